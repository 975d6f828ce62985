//! Archive Page
//!
//! Past editions; selecting one opens it story by story.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_flipbook::Layout;

use crate::api;
use crate::components::{ErrorPanel, FlipBook};
use crate::format::{format_date, format_week, pluralize};
use crate::models::Newspaper;
use crate::store::{store_close_edition, store_open_edition, use_app_store, AppStateStoreFields};

#[component]
pub fn ArchivePage() -> impl IntoView {
    let store = use_app_store();

    let (editions, set_editions) = signal(Vec::<Newspaper>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::archived_editions().await {
                Ok(loaded) => {
                    log::info!("[Archive] Loaded {} editions", loaded.len());
                    let _ = set_editions.try_set(loaded);
                }
                Err(e) => {
                    log::error!("[Archive] Failed to load: {}", e);
                    let _ = set_error.try_set(Some(e.user_message("Failed to load archive")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let list_view = move || {
        view! {
            <header class="page-header">
                <h1>"Archive"</h1>
                <p>"Browse past editions of your Acta Diurna newspaper"</p>
            </header>

            <Show when=move || error.get().is_some()>
                <ErrorPanel
                    message=Signal::derive(move || error.get().unwrap_or_default())
                    on_retry=Callback::new(move |_| set_reload.update(|n| *n += 1))
                />
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading archive..."</div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none() && editions.get().is_empty()>
                <div class="empty-state">
                    <span class="empty-icon">"📚"</span>
                    <p>"No past editions yet"</p>
                    <p class="hint">"Every published edition is kept here for you to revisit."</p>
                </div>
            </Show>

            <div class="archive-list">
                <For
                    each=move || editions.get()
                    key=|edition| edition.id.clone()
                    children=move |edition| {
                        let opened = edition.clone();
                        view! {
                            <button class="archive-entry" on:click=move |_| store_open_edition(&store, opened.clone())>
                                <div class="archive-entry-main">
                                    <h3>{format!("{} - {}", edition.title, format_week(&edition.week_of))}</h3>
                                    <p>{format!("Published {}", format_date(&edition.published_at))}</p>
                                </div>
                                <div class="archive-entry-side">
                                    <span>{pluralize(edition.stories.len(), "story", "stories")}</span>
                                    <span class="hint">"Click to read"</span>
                                </div>
                            </button>
                        }
                    }
                />
            </div>
        }
    };

    view! {
        <div class="page archive">
            {move || match store.open_edition().get() {
                Some(edition) => view! {
                    <div class="archive-reader">
                        <button class="btn back-btn" on:click=move |_| store_close_edition(&store)>
                            "← Back to Archive"
                        </button>
                        <h2>{format!("{} - {}", edition.title, format_week(&edition.week_of))}</h2>
                        <FlipBook edition=edition layout=Layout::Single />
                    </div>
                }
                .into_any(),
                None => list_view().into_any(),
            }}
        </div>
    }
}
