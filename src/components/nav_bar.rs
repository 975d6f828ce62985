//! Navigation Bar Component
//!
//! App header with page navigation, the signed-in user and logout.

use leptos::prelude::*;

use crate::context::use_auth;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();

    let user_name = move || auth.user().map(|u| u.full_name).unwrap_or_default();

    view! {
        <header class="nav-bar">
            <div class="nav-brand" on:click=move |_| store_navigate(&store, Page::Dashboard)>
                <span class="nav-logo">"📜"</span>
                <span class="nav-title">"Acta Diurna"</span>
            </div>

            <nav class="nav-links">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if store.page().get() == page { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |_| store_navigate(&store, page)
                            >
                                <span class="nav-icon">{page.icon()}</span>
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="nav-user">
                <span class="nav-user-name">{user_name}</span>
                <button class="nav-logout" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </div>
        </header>

        <Show when=move || auth.session_error().is_some()>
            <div class="session-banner">
                <span>{move || auth.session_error().unwrap_or_default()}</span>
                <button class="banner-close" on:click=move |_| auth.clear_error()>"✕"</button>
            </div>
        </Show>
    }
}
