//! Friends Page
//!
//! Invite friends by email, track sent invitations, list the network.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorPanel;
use crate::config::MAX_FRIENDS;
use crate::format::format_date;
use crate::models::{Friend, Invitation};

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}

#[component]
pub fn FriendsPage() -> impl IntoView {
    let (friends, set_friends) = signal(Vec::<Friend>::new());
    let (sent, set_sent) = signal(Vec::<Invitation>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    let (show_invite, set_show_invite) = signal(false);
    let (email, set_email) = signal(String::new());
    let (inviting, set_inviting) = signal(false);
    let (invite_error, set_invite_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = reload.get();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let (friends_res, sent_res) = futures::join!(api::list_friends(), api::sent_invitations());
            match (friends_res, sent_res) {
                (Ok(f), Ok(s)) => {
                    log::info!("[Friends] {} friends, {} sent invitations", f.len(), s.len());
                    let _ = set_friends.try_set(f);
                    let _ = set_sent.try_set(s);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("[Friends] Failed to load: {}", e);
                    let _ = set_load_error.try_set(Some(e.user_message("Failed to load friends")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let at_limit = move || friends.get().len() >= MAX_FRIENDS;

    let on_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() || inviting.get_untracked() {
            return;
        }
        set_inviting.set(true);
        set_invite_error.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match api::invite_friend(&address).await {
                Ok(()) => {
                    log::info!("[Friends] Invitation sent to {}", address);
                    let _ = set_notice.try_set(Some(format!("Invitation sent to {}", address)));
                    let _ = set_email.try_set(String::new());
                    let _ = set_show_invite.try_set(false);
                    set_reload.try_update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("[Friends] Invite failed: {}", e);
                    let _ = set_invite_error.try_set(Some(e.user_message("Failed to send invitation")));
                }
            }
            let _ = set_inviting.try_set(false);
        });
    };

    view! {
        <div class="page friends">
            <header class="page-header with-action">
                <div>
                    <h1>"Friends"</h1>
                    <p>"Invite the people whose stories you want to read"</p>
                </div>
                <button
                    class="btn primary"
                    disabled=at_limit
                    on:click=move |_| set_show_invite.update(|s| *s = !*s)
                >
                    "+ Invite Friend"
                </button>
            </header>

            <div class="info-banner">
                <strong>{move || format!("Friends: {}/{}", friends.get().len(), MAX_FRIENDS)}</strong>
                <p>{format!("You can have up to {} friends who can contribute to your weekly editions.", MAX_FRIENDS)}</p>
            </div>

            <Show when=move || notice.get().is_some()>
                <p class="form-success">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || show_invite.get()>
                <form class="invite-form" on:submit=on_invite>
                    <h3>"Invite a Friend"</h3>
                    <label class="form-field">
                        <span>"Friend's Email Address"</span>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter their email address"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || invite_error.get().is_some()>
                        <p class="form-error">{move || invite_error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="form-actions">
                        <button type="submit" class="btn primary" disabled=move || inviting.get()>
                            {move || if inviting.get() { "Sending..." } else { "Send Invitation" }}
                        </button>
                        <button type="button" class="btn" on:click=move |_| set_show_invite.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <ErrorPanel
                    message=Signal::derive(move || load_error.get().unwrap_or_default())
                    on_retry=Callback::new(move |_| set_reload.update(|n| *n += 1))
                />
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading friends..."</div>
            </Show>

            <Show when=move || !sent.get().is_empty()>
                <section class="card-list">
                    <h2>"Sent Invitations"</h2>
                    <For
                        each=move || sent.get()
                        key=|inv| inv.id.clone()
                        children=move |inv| view! {
                            <div class="list-row">
                                <div class="list-row-main">
                                    <span class="row-title">{inv.to_email.clone()}</span>
                                    <span class="row-subtitle">{format!("Sent {}", format_date(&inv.created_at))}</span>
                                </div>
                                <span class=inv.status.css_class()>{inv.status.label()}</span>
                            </div>
                        }
                    />
                </section>
            </Show>

            <Show
                when=move || !friends.get().is_empty()
                fallback=move || view! {
                    <Show when=move || !loading.get() && load_error.get().is_none()>
                        <div class="empty-state">
                            <span class="empty-icon">"👥"</span>
                            <h3>"No friends yet"</h3>
                            <p>"Invite friends to start building your social newspaper network!"</p>
                            <button class="btn primary" on:click=move |_| set_show_invite.set(true)>
                                "Invite Your First Friend"
                            </button>
                        </div>
                    </Show>
                }
            >
                <section class="card-list">
                    <h2>"Your Friends"</h2>
                    <For
                        each=move || friends.get()
                        key=|friend| friend.id.clone()
                        children=move |friend| view! {
                            <div class="list-row">
                                <span class="avatar">{initial(&friend.full_name)}</span>
                                <div class="list-row-main">
                                    <span class="row-title">{friend.full_name.clone()}</span>
                                    <span class="row-subtitle">{friend.email.clone()}</span>
                                </div>
                                <span class="row-meta">{format!("Joined {}", format_date(&friend.created_at))}</span>
                            </div>
                        }
                    />
                </section>
            </Show>
        </div>
    }
}
