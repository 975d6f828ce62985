//! My Stories Page
//!
//! Story submission plus the user's previously submitted stories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorPanel, StoryForm};
use crate::format::{format_date, format_week, pluralize};
use crate::models::Story;

#[component]
pub fn StoriesPage() -> impl IntoView {
    let (stories, set_stories) = signal(Vec::<Story>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (closed, set_closed) = signal(false);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::my_stories().await {
                Ok(loaded) => {
                    log::info!("[Stories] Loaded {} stories", loaded.len());
                    let _ = set_stories.try_set(loaded);
                }
                Err(e) => {
                    log::error!("[Stories] Failed to load: {}", e);
                    let _ = set_error.try_set(Some(e.user_message("Failed to load your stories")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    // Submission window; an unreachable health check leaves the form open
    spawn_local(async move {
        match api::health().await {
            Ok(health) => {
                let _ = set_closed.try_set(!health.submissions_open);
            }
            Err(e) => log::warn!("[Stories] Health check failed: {}", e),
        }
    });

    let on_created = Callback::new(move |story: Story| {
        set_stories.update(|list| list.insert(0, story));
    });

    view! {
        <div class="page stories">
            <header class="page-header">
                <h1>"My Stories"</h1>
                <p>"Share what happened in your life this week"</p>
            </header>

            <StoryForm on_created=on_created closed=closed />

            <section class="story-list">
                <h2>{move || format!("Your Stories ({})", stories.get().len())}</h2>

                <Show when=move || error.get().is_some()>
                    <ErrorPanel
                        message=Signal::derive(move || error.get().unwrap_or_default())
                        on_retry=Callback::new(move |_| set_reload.update(|n| *n += 1))
                    />
                </Show>

                <Show when=move || loading.get()>
                    <div class="loading">"Loading stories..."</div>
                </Show>

                <Show when=move || !loading.get() && error.get().is_none() && stories.get().is_empty()>
                    <div class="empty-state">
                        <p>"You haven't written any stories yet."</p>
                        <p class="hint">"Your first story will appear in next Tuesday's edition."</p>
                    </div>
                </Show>

                <For
                    each=move || stories.get()
                    key=|story| story.id.clone()
                    children=move |story| {
                        view! {
                            <article class=if story.is_headline { "story-card headline" } else { "story-card" }>
                                <div class="story-card-meta">
                                    <span class="story-week">{format_week(&story.week_of)}</span>
                                    {story.is_headline.then(|| view! { <span class="headline-badge">"Headline"</span> })}
                                    <span class="story-date">{format_date(&story.created_at)}</span>
                                </div>
                                <h3>{story.title.clone()}</h3>
                                <p class="story-card-headline">{story.headline.clone()}</p>
                                <div class="story-content" inner_html=story.content.clone()></div>
                                {(!story.images.is_empty())
                                    .then(|| view! {
                                        <p class="story-card-images">{pluralize(story.images.len(), "image", "images")}</p>
                                    })}
                            </article>
                        }
                    }
                />
            </section>
        </div>
    }
}
