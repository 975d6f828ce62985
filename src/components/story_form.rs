//! Story Form Component
//!
//! Weekly story submission. The draft is kept in local storage while
//! typing and posted to the server periodically; both are best effort.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ImageUploader, StoryEditor};
use crate::api::{self, CreateStoryArgs};
use crate::autosave::{latest_server_draft, LocalDraftAutoSave};
use crate::config::{DRAFT_KEY, LOCAL_DRAFT_DEBOUNCE_MS, MAX_CONTENT_CHARS, PUBLICATION_TIME, SERVER_DRAFT_INTERVAL_MS};
use crate::markdown::render_markdown;
use crate::models::{Draft, Story, StoryImage};
use crate::storage::LocalStorage;

#[component]
pub fn StoryForm(
    /// Called with the created story after all images are uploaded
    on_created: Callback<Story>,
    /// Submissions closed for the week
    #[prop(into, default = Signal::stored(false))]
    closed: Signal<bool>,
) -> impl IntoView {
    let autosave = StoredValue::new(LocalDraftAutoSave::new(LocalStorage, DRAFT_KEY));
    let saved = autosave.with_value(|a| a.load()).unwrap_or_default();
    let has_local_draft = !saved.is_blank();
    if has_local_draft {
        log::info!("[StoryForm] Restored local draft");
    }

    let (draft_id, set_draft_id) = signal(saved.id.clone());
    let (title, set_title) = signal(saved.title);
    let (headline, set_headline) = signal(saved.headline);
    let (content, set_content) = signal(saved.content);
    let (is_headline, set_is_headline) = signal(saved.is_headline);
    let (images, set_images) = signal(Vec::<StoryImage>::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // No local draft: fall back to the newest server draft
    if !has_local_draft {
        spawn_local(async move {
            let drafts = match api::list_drafts().await {
                Ok(drafts) => drafts,
                Err(e) => {
                    log::warn!("[StoryForm] Could not load server drafts: {}", e);
                    return;
                }
            };
            let Some(draft) = latest_server_draft(drafts) else {
                return;
            };
            let untouched = try_snapshot(draft_id, title, headline, content, is_headline).is_some_and(|d| d.is_blank());
            if untouched {
                log::info!("[StoryForm] Restored server draft");
                let _ = set_draft_id.try_set(draft.id);
                let _ = set_title.try_set(draft.title);
                let _ = set_headline.try_set(draft.headline);
                let _ = set_content.try_set(draft.content);
                let _ = set_is_headline.try_set(draft.is_headline);
            }
        });
    }

    let current_draft = move || Draft {
        id: draft_id.get(),
        title: title.get(),
        headline: headline.get(),
        content: content.get(),
        is_headline: is_headline.get(),
    };

    // Local draft: debounce every edit
    Effect::new(move |_| {
        let draft = current_draft();
        let ticket = autosave.try_update_value(|a| a.record(draft));
        let Some(ticket) = ticket else { return };
        spawn_local(async move {
            TimeoutFuture::new(LOCAL_DRAFT_DEBOUNCE_MS).await;
            autosave.try_update_value(|a| a.flush(ticket));
        });
    });

    // Server draft: fixed interval while the form is mounted
    spawn_local(async move {
        loop {
            TimeoutFuture::new(SERVER_DRAFT_INTERVAL_MS).await;
            let Some(draft) = try_snapshot(draft_id, title, headline, content, is_headline) else {
                break;
            };
            if draft.is_blank() || submitting.try_get_untracked().unwrap_or(true) {
                continue;
            }
            match api::save_draft(&draft).await {
                Ok(saved) => {
                    log::debug!("[StoryForm] Draft saved to server");
                    let Some(id) = saved.id else { continue };
                    let Some(current) = try_snapshot(draft_id, title, headline, content, is_headline) else {
                        break;
                    };
                    // Submitted or cleared while the save was in flight
                    if current.is_blank() || submitting.try_get_untracked().unwrap_or(true) {
                        discard_server_draft(&id).await;
                    } else {
                        let _ = set_draft_id.try_set(Some(id));
                    }
                }
                Err(e) => log::error!("[StoryForm] Server draft save failed: {}", e),
            }
        }
        log::debug!("[StoryForm] Server draft loop stopped");
    });

    // Runs after awaits; the form may be gone by then
    let reset_form = move || {
        let _ = set_draft_id.try_set(None);
        let _ = set_title.try_set(String::new());
        let _ = set_headline.try_set(String::new());
        let _ = set_content.try_set(String::new());
        let _ = set_is_headline.try_set(false);
        let _ = set_images.try_set(Vec::new());
        autosave.try_update_value(|a| a.clear());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        set_notice.set(None);

        let draft = current_draft();
        if let Some(problem) = draft.submission_error(MAX_CONTENT_CHARS) {
            set_error.set(Some(problem.to_string()));
            return;
        }
        let images = images.get_untracked();

        set_submitting.set(true);
        spawn_local(async move {
            let html = render_markdown(&draft.content);
            let args = CreateStoryArgs {
                title: draft.title.trim(),
                headline: draft.headline.trim(),
                content: &html,
                is_headline: draft.is_headline,
            };

            match api::create_story(&args).await {
                Ok(story) => {
                    log::info!("[StoryForm] Story {} created, uploading {} image(s)", story.id, images.len());
                    match api::upload_story_images(&story.id, &images).await {
                        Ok(_) => {
                            let _ = set_notice.try_set(Some(format!(
                                "Story submitted! It will appear in the edition published {}.",
                                PUBLICATION_TIME
                            )));
                        }
                        Err((uploaded, e)) => {
                            log::error!("[StoryForm] Image upload stopped after {}: {}", uploaded, e);
                            let _ = set_error.try_set(Some(format!(
                                "Story submitted, but only {} of {} images were uploaded: {}",
                                uploaded,
                                images.len(),
                                e.user_message("Image upload failed"),
                            )));
                        }
                    }
                    if let Some(id) = draft.id.as_deref() {
                        discard_server_draft(id).await;
                    }
                    reset_form();
                    notify_created(on_created, story);
                }
                Err(e) => {
                    log::error!("[StoryForm] Submit failed: {}", e);
                    let _ = set_error.try_set(Some(e.user_message("Failed to create story")));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let inert = Signal::derive(move || submitting.get() || closed.get());

    view! {
        <form class="story-form" on:submit=on_submit>
            <h2>"Submit Your Weekly Story"</h2>

            <Show when=move || closed.get()>
                <p class="form-notice">"Submissions are closed for this week."</p>
            </Show>

            <label class="form-field">
                <span>"Story Title"</span>
                <input
                    type="text"
                    placeholder="Enter a compelling title for your story"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=move || inert.get()
                />
            </label>

            <label class="form-field">
                <span>"Headline"</span>
                <input
                    type="text"
                    placeholder="A one-line summary for the front page"
                    prop:value=move || headline.get()
                    on:input=move |ev| set_headline.set(event_target_value(&ev))
                    disabled=move || inert.get()
                />
            </label>

            <label class="form-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || is_headline.get()
                    on:change=move |ev| set_is_headline.set(event_target_checked(&ev))
                    disabled=move || inert.get()
                />
                <span>"Mark as headline story (major life event)"</span>
            </label>

            <div class="form-field">
                <span>"Story Content"</span>
                <StoryEditor
                    content=content
                    set_content=set_content
                    disabled=inert
                    placeholder="Tell your story... Share what's been happening in your life this week."
                />
            </div>

            <div class="form-field">
                <span>"Images (up to 3)"</span>
                <ImageUploader images=images set_images=set_images disabled=inert />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form-success">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <div class="form-actions">
                <span class="autosave-hint">"Drafts are saved automatically"</span>
                <button type="submit" class="btn primary" disabled=move || inert.get()>
                    {move || if submitting.get() { "Saving..." } else { "Submit Story" }}
                </button>
            </div>
        </form>
    }
}

/// Hand the new story to the owning page. Returns false when the page was
/// left while the submission was in flight.
fn notify_created(on_created: Callback<Story>, story: Story) -> bool {
    let delivered = on_created.try_run(story).is_some();
    if !delivered {
        log::info!("[StoryForm] Story created after the page was closed");
    }
    delivered
}

/// Submitted drafts must not be offered for restore again
async fn discard_server_draft(id: &str) {
    match api::delete_draft(id).await {
        Ok(()) => log::debug!("[StoryForm] Server draft {} removed", id),
        Err(e) => log::warn!("[StoryForm] Could not remove server draft {}: {}", id, e),
    }
}

/// Current form contents, or `None` once the form has been torn down
fn try_snapshot(
    id: ReadSignal<Option<String>>,
    title: ReadSignal<String>,
    headline: ReadSignal<String>,
    content: ReadSignal<String>,
    is_headline: ReadSignal<bool>,
) -> Option<Draft> {
    Some(Draft {
        id: id.try_get_untracked()?,
        title: title.try_get_untracked()?,
        headline: headline.try_get_untracked()?,
        content: content.try_get_untracked()?,
        is_headline: is_headline.try_get_untracked()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            author_id: "u1".to_string(),
            author_name: "Ana".to_string(),
            title: "Moving day".to_string(),
            headline: "We finally did it".to_string(),
            content: "<p>Boxes</p>".to_string(),
            images: Vec::new(),
            week_of: "2024-W52".to_string(),
            is_headline: false,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_notify_created_reaches_live_page() {
        let page = Owner::new();
        let received = StoredValue::new(Vec::<String>::new());
        let on_created = page.with(|| Callback::new(move |s: Story| received.update_value(|ids| ids.push(s.id))));

        assert!(notify_created(on_created, story("s1")));
        assert_eq!(received.get_value(), vec!["s1".to_string()]);
    }

    #[test]
    fn test_notify_created_after_page_left() {
        let page = Owner::new();
        let on_created = page.with(|| Callback::new(|_: Story| {}));
        page.cleanup();

        assert!(!notify_created(on_created, story("s2")));
    }
}
