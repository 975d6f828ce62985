//! Dashboard Page
//!
//! Week status, network counts and shortcuts into the other pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorPanel;
use crate::config::{MAX_FRIENDS, SUBMISSION_DEADLINE};
use crate::context::use_auth;
use crate::format::format_week;
use crate::models::{pending_count, stories_in_week};
use crate::store::{store_navigate, use_app_store, Page};

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardStats {
    contributors: usize,
    pending_invitations: usize,
    stories_this_week: usize,
    submitted_this_week: bool,
    submissions_open: bool,
    current_week: String,
}

async fn load_stats() -> api::ApiResult<DashboardStats> {
    let (health, contributors, sent, network, mine) = futures::join!(
        api::health(),
        api::my_contributors(),
        api::sent_invitations(),
        api::list_stories(),
        api::my_stories(),
    );
    let health = health?;
    Ok(DashboardStats {
        contributors: contributors?.len(),
        pending_invitations: pending_count(&sent?),
        stories_this_week: stories_in_week(&network?, &health.current_week),
        submitted_this_week: stories_in_week(&mine?, &health.current_week) > 0,
        submissions_open: health.submissions_open,
        current_week: health.current_week,
    })
}

struct QuickAction {
    page: Page,
    title: &'static str,
    description: String,
    badge: Option<String>,
    disabled: bool,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();

    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        set_error.set(None);
        spawn_local(async move {
            match load_stats().await {
                Ok(loaded) => {
                    let _ = set_stats.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("[Dashboard] Failed to load: {}", e);
                    let _ = set_error.try_set(Some(e.user_message("Failed to load dashboard")));
                }
            }
        });
    });

    let first_name = move || {
        auth.user()
            .map(|u| u.full_name.split_whitespace().next().unwrap_or_default().to_string())
            .unwrap_or_default()
    };

    let quick_actions = move |s: &DashboardStats| {
        vec![
            QuickAction {
                page: Page::Friends,
                title: "Invite Friends",
                description: "Send invitations to join your network".to_string(),
                badge: (s.pending_invitations > 0).then(|| format!("{} pending", s.pending_invitations)),
                disabled: false,
            },
            QuickAction {
                page: Page::Contributors,
                title: "Manage Contributors",
                description: "Add or remove story contributors".to_string(),
                badge: Some(format!("{} active", s.contributors)),
                disabled: false,
            },
            QuickAction {
                page: Page::Stories,
                title: "Write Story",
                description: if s.submissions_open {
                    "Submit your weekly story".to_string()
                } else {
                    "Submissions closed".to_string()
                },
                badge: s.submitted_this_week.then(|| "Submitted".to_string()),
                disabled: !s.submissions_open,
            },
            QuickAction {
                page: Page::WeeklyEdition,
                title: "Read Newspaper",
                description: "View the latest published edition".to_string(),
                badge: None,
                disabled: false,
            },
        ]
    };

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <h1>{move || format!("Welcome back, {}", first_name())}</h1>
                <p>"Ready to share your story with the world?"</p>
            </header>

            <Show when=move || error.get().is_some()>
                <ErrorPanel
                    message=Signal::derive(move || error.get().unwrap_or_default())
                    on_retry=Callback::new(move |_| set_reload.update(|n| *n += 1))
                />
            </Show>

            {move || match stats.get() {
                None if error.get().is_none() => view! { <div class="loading">"Loading dashboard..."</div> }.into_any(),
                None => ().into_any(),
                Some(s) => view! {
                    <div class="status-cards">
                        <div class="status-card">
                            <span class="status-label">"Current Week"</span>
                            <span class="status-value">{format_week(&s.current_week)}</span>
                        </div>
                        <div class="status-card">
                            <span class="status-label">"Submissions"</span>
                            <span class=if s.submissions_open { "status-value open" } else { "status-value closed" }>
                                {if s.submissions_open { "Open" } else { "Closed" }}
                            </span>
                        </div>
                        <div class="status-card">
                            <span class="status-label">"Contributors"</span>
                            <span class="status-value">{s.contributors}</span>
                        </div>
                        <div class="status-card">
                            <span class="status-label">"Stories This Week"</span>
                            <span class="status-value">{s.stories_this_week}</span>
                        </div>
                        <div class="status-card">
                            <span class="status-label">"Next Deadline"</span>
                            <span class="status-value small">{SUBMISSION_DEADLINE}</span>
                        </div>
                    </div>

                    <section class="quick-actions">
                        <h2>"Quick Actions"</h2>
                        <div class="action-grid">
                            {quick_actions(&s)
                                .into_iter()
                                .map(|action| {
                                    let page = action.page;
                                    let disabled = action.disabled;
                                    view! {
                                        <button
                                            class=if disabled { "action-card disabled" } else { "action-card" }
                                            disabled=disabled
                                            on:click=move |_| store_navigate(&store, page)
                                        >
                                            <span class="action-icon">{page.icon()}</span>
                                            {action.badge.map(|b| view! { <span class="action-badge">{b}</span> })}
                                            <h3>{action.title}</h3>
                                            <p>{action.description}</p>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
                .into_any(),
            }}

            <section class="getting-started">
                <h2>"Getting Started"</h2>
                <ol>
                    <li>
                        <strong>"Invite your friends"</strong>
                        <p>{format!("Send email invitations to up to {} friends who will contribute stories", MAX_FRIENDS)}</p>
                    </li>
                    <li>
                        <strong>"Add contributors"</strong>
                        <p>"Choose whose stories appear in your weekly edition"</p>
                    </li>
                    <li>
                        <strong>"Write your story"</strong>
                        <p>{format!("Submit one story each week before {}", SUBMISSION_DEADLINE)}</p>
                    </li>
                    <li>
                        <strong>"Read your newspaper"</strong>
                        <p>"Your edition is published every Tuesday morning"</p>
                    </li>
                </ol>
            </section>
        </div>
    }
}
