//! Weekly Edition Page
//!
//! The current edition as a flipbook. Server errors are retried before
//! giving up.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, with_retry, RetryPolicy};
use crate::components::{EditionStats, ErrorPanel, FlipBook};
use crate::config::PUBLICATION_TIME;
use crate::format::format_week;
use crate::models::Newspaper;

#[derive(Clone, Debug, PartialEq)]
enum EditionState {
    Loading,
    Ready(Newspaper),
    /// Nothing published yet
    Missing,
    Failed(String),
}

#[component]
pub fn WeeklyEditionPage() -> impl IntoView {
    let (state, set_state) = signal(EditionState::Loading);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_state.set(EditionState::Loading);
        spawn_local(async move {
            let next = match with_retry(RetryPolicy::SERVER_ERRORS, api::current_edition).await {
                Ok(edition) => {
                    log::info!("[Edition] Loaded {} with {} stories", edition.week_of, edition.stories.len());
                    EditionState::Ready(edition)
                }
                Err(e) if e.status() == Some(404) => EditionState::Missing,
                Err(e) => {
                    log::error!("[Edition] Failed to load: {}", e);
                    EditionState::Failed(e.user_message("Failed to load weekly edition"))
                }
            };
            let _ = set_state.try_set(next);
        });
    });

    let retry = Callback::new(move |_| set_reload.update(|n| *n += 1));

    view! {
        <div class="page weekly-edition">
            {move || match state.get() {
                EditionState::Loading => view! {
                    <div class="loading">"Loading this week's edition..."</div>
                }
                .into_any(),
                EditionState::Failed(message) => view! {
                    <div class="edition-error">
                        <h3>"Error loading edition"</h3>
                        <ErrorPanel message=message on_retry=retry />
                    </div>
                }
                .into_any(),
                EditionState::Missing => view! {
                    <div class="empty-state">
                        <span class="empty-icon">"📰"</span>
                        <p>"No newspaper available"</p>
                        <p class="hint">{format!("Editions are published {}", PUBLICATION_TIME)}</p>
                    </div>
                }
                .into_any(),
                EditionState::Ready(edition) => view! {
                    <header class="page-header centered">
                        <h1>"Weekly Edition"</h1>
                        <p class="edition-week">"📅 " {format_week(&edition.week_of)}</p>
                    </header>
                    <EditionStats edition=edition.clone() />
                    <FlipBook edition=edition />
                }
                .into_any(),
            }}
        </div>
    }
}
