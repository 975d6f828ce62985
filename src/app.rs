//! Acta Diurna Frontend App
//!
//! Session gate plus the signed-in layout: navigation bar and the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::NavBar;
use crate::context::AuthContext;
use crate::pages::{ArchivePage, ContributorsPage, DashboardPage, FriendsPage, LoginPage, StoriesPage, WeeklyEditionPage};
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let auth = AuthContext::new(store);
    provide_context(auth);
    auth.restore_session();

    view! {
        <Show
            when=move || !auth.checking.get()
            fallback=|| view! { <div class="loading full">"Loading..."</div> }
        >
            <Show when=move || auth.is_authenticated() fallback=|| view! { <LoginPage /> }>
                <div class="app-layout">
                    <NavBar />
                    <main class="main-content">
                        {move || match store.page().get() {
                            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                            Page::WeeklyEdition => view! { <WeeklyEditionPage /> }.into_any(),
                            Page::Stories => view! { <StoriesPage /> }.into_any(),
                            Page::Friends => view! { <FriendsPage /> }.into_any(),
                            Page::Contributors => view! { <ContributorsPage /> }.into_any(),
                            Page::Archive => view! { <ArchivePage /> }.into_any(),
                        }}
                    </main>
                </div>
            </Show>
        </Show>
    }
}
