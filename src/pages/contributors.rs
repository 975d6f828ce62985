//! Contributors Page
//!
//! Choose whose stories go into the user's edition: accept people who sent
//! an invitation, remove existing contributors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, ErrorPanel};
use crate::format::format_date;
use crate::models::{is_contributor, Contributor, Invitation};

#[component]
pub fn ContributorsPage() -> impl IntoView {
    let (contributors, set_contributors) = signal(Vec::<Contributor>::new());
    let (received, set_received) = signal(Vec::<Invitation>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    let (message, set_message) = signal::<Option<String>>(None);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let (contributors_res, received_res) = futures::join!(api::my_contributors(), api::received_invitations());
            match (contributors_res, received_res) {
                (Ok(c), Ok(r)) => {
                    log::info!("[Contributors] {} contributors, {} invitations", c.len(), r.len());
                    let _ = set_contributors.try_set(c);
                    let _ = set_received.try_set(r);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("[Contributors] Failed to load: {}", e);
                    let _ = set_load_error.try_set(Some(e.user_message("Failed to load data")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let refresh = move || {
        set_reload.try_update(|n| *n += 1);
    };

    let add = move |invitation_id: String| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_message.set(None);
        set_action_error.set(None);
        spawn_local(async move {
            match api::add_contributor(&invitation_id).await {
                Ok(()) => {
                    let _ = set_message.try_set(Some("Contributor added successfully".to_string()));
                    refresh();
                }
                Err(e) => {
                    log::error!("[Contributors] Add failed: {}", e);
                    let _ = set_action_error.try_set(Some(e.user_message("Failed to add contributor")));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    let remove = move |contributor_id: String| {
        set_message.set(None);
        set_action_error.set(None);
        spawn_local(async move {
            match api::remove_contributor(&contributor_id).await {
                Ok(()) => {
                    set_contributors.try_update(|list| list.retain(|c| c.id != contributor_id));
                    let _ = set_message.try_set(Some("Contributor removed successfully".to_string()));
                }
                Err(e) => {
                    log::error!("[Contributors] Remove failed: {}", e);
                    let _ = set_action_error.try_set(Some(e.user_message("Failed to remove contributor")));
                }
            }
        });
    };

    view! {
        <div class="page contributors">
            <header class="page-header">
                <h1>"My Contributors"</h1>
                <p>"Manage who contributes stories to your weekly newspaper"</p>
            </header>

            <Show when=move || message.get().is_some()>
                <p class="form-success">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || action_error.get().is_some()>
                <p class="form-error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <ErrorPanel
                    message=Signal::derive(move || load_error.get().unwrap_or_default())
                    on_retry=Callback::new(move |_| refresh())
                />
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading contributors..."</div>
            </Show>

            <Show when=move || !received.get().is_empty()>
                <section class="card-list">
                    <h2>{move || format!("Available to Add ({})", received.get().len())}</h2>
                    <p class="hint">"People who have invited you and are available to add as contributors:"</p>
                    <For
                        each=move || received.get()
                        key=|inv| inv.id.clone()
                        children=move |inv| {
                            let invitation = inv.clone();
                            let already = move || contributors.with(|list| is_contributor(&invitation, list));
                            let id = inv.id.clone();
                            view! {
                                <div class="list-row">
                                    <div class="list-row-main">
                                        <span class="row-title">{inv.from_user_name.clone()}</span>
                                        <span class="row-subtitle">{inv.from_user_email.clone()}</span>
                                    </div>
                                    <Show
                                        when=already
                                        fallback=move || {
                                            let id = id.clone();
                                            view! {
                                                <button
                                                    class="btn primary small"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| add(id.clone())
                                                >
                                                    "+ Add as Contributor"
                                                </button>
                                            }
                                        }
                                    >
                                        <span class="status-badge accepted">"✓ Already Added"</span>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </section>
            </Show>

            <section class="card-list">
                <h2>{move || format!("Current Contributors ({})", contributors.get().len())}</h2>
                <Show when=move || !loading.get() && load_error.get().is_none() && contributors.get().is_empty()>
                    <div class="empty-state">
                        <span class="empty-icon">"🤝"</span>
                        <h3>"No contributors yet"</h3>
                        <p>"When friends invite you, add them here to include their stories in your edition."</p>
                    </div>
                </Show>
                <For
                    each=move || contributors.get()
                    key=|c| c.id.clone()
                    children=move |c| {
                        let id = c.id.clone();
                        view! {
                            <div class="list-row">
                                <div class="list-row-main">
                                    <span class="row-title">{c.contributor_name.clone()}</span>
                                    <span class="row-subtitle">{c.contributor_email.clone()}</span>
                                </div>
                                <span class="row-meta">{format!("Added {}", format_date(&c.added_at))}</span>
                                <DeleteConfirmButton
                                    button_class="btn danger small"
                                    label="Remove"
                                    prompt="Remove this contributor?"
                                    on_confirm=Callback::new(move |_| remove(id.clone()))
                                />
                            </div>
                        }
                    }
                />
            </section>
        </div>
    }
}
