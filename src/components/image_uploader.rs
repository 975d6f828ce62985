//! Image Uploader Component
//!
//! Picks, validates and previews story images. Images are kept base64
//! encoded until the story is submitted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::DropZone;
use crate::models::StoryImage;
use crate::uploader::{append_images, encode_image, remove_image, validate_batch, FileMeta, UploadError, UploadLimits};

fn file_meta(file: &File) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

async fn read_bytes(file: &File) -> Result<Vec<u8>, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(format!("{}: {:?}", file.name(), e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Read every file; any failure discards the whole batch
async fn read_batch(files: Vec<File>, mimes: Vec<String>) -> Result<Vec<StoryImage>, UploadError> {
    let stamp = js_sys::Date::now() as u64;
    let mut batch = Vec::with_capacity(files.len());
    for (i, (file, mime)) in files.iter().zip(mimes).enumerate() {
        let bytes = read_bytes(file).await?;
        batch.push(encode_image(format!("img-{}-{}", stamp, i), file.name(), mime, &bytes));
    }
    Ok(batch)
}

#[component]
pub fn ImageUploader(
    images: ReadSignal<Vec<StoryImage>>,
    set_images: WriteSignal<Vec<StoryImage>>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let limits = UploadLimits::STORY;
    let (error, set_error) = signal::<Option<String>>(None);
    let (processing, set_processing) = signal(false);

    let at_limit = move || images.with(|imgs| imgs.len() >= limits.max_images);
    let inert = Signal::derive(move || disabled.get() || processing.get() || at_limit());

    let on_files = Callback::new(move |files: Vec<File>| {
        set_error.set(None);
        let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();
        let mimes = match validate_batch(images.get_untracked().len(), &metas, limits) {
            Ok(mimes) => mimes,
            Err(e) => {
                log::warn!("[Uploader] Rejected {} file(s): {}", metas.len(), e);
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_processing.set(true);
        spawn_local(async move {
            let outcome = match read_batch(files, mimes).await {
                Ok(batch) => {
                    let mut appended = Ok(());
                    set_images.try_update(|imgs| appended = append_images(imgs, batch, limits));
                    appended
                }
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                log::error!("[Uploader] {}", e);
                let _ = set_error.try_set(Some(e.to_string()));
            }
            let _ = set_processing.try_set(false);
        });
    });

    let remove = move |id: String| {
        set_images.update(|imgs| remove_image(imgs, &id));
        set_error.set(None);
    };

    view! {
        <div class="image-uploader">
            <DropZone on_files=on_files accept="image/*" disabled=inert>
                <div class="drop-zone-content">
                    <span class="drop-zone-icon">"🖼"</span>
                    <p class="drop-zone-title">
                        {move || if processing.get() { "Processing images..." } else { "Add photos to your story" }}
                    </p>
                    <p class="drop-zone-hint">
                        {move || {
                            if at_limit() {
                                format!("Maximum {} images reached", limits.max_images)
                            } else {
                                format!(
                                    "Drag and drop or click to select (max {} images, {}MB each)",
                                    limits.max_images,
                                    limits.max_size_mb,
                                )
                            }
                        }}
                    </p>
                </div>
            </DropZone>

            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !images.get().is_empty()>
                <div class="image-previews">
                    <For
                        each=move || images.get()
                        key=|img| img.id.clone()
                        children=move |img| {
                            let id = img.id.clone();
                            view! {
                                <div class="image-preview">
                                    <img src=img.data_url() alt=img.filename.clone() />
                                    <button
                                        type="button"
                                        class="image-remove"
                                        title="Remove image"
                                        disabled=move || disabled.get()
                                        on:click=move |_| remove(id.clone())
                                    >
                                        "✕"
                                    </button>
                                    <span class="image-name">{img.filename.clone()}</span>
                                </div>
                            }
                        }
                    />
                </div>
                <p class="image-count">
                    {move || format!("{} of {} images", images.get().len(), limits.max_images)}
                </p>
            </Show>
        </div>
    }
}
