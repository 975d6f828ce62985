//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Newspaper, User};

/// Top-level screens reachable from the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    WeeklyEdition,
    Stories,
    Friends,
    Contributors,
    Archive,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::WeeklyEdition,
        Page::Stories,
        Page::Friends,
        Page::Contributors,
        Page::Archive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::WeeklyEdition => "Weekly Edition",
            Page::Stories => "My Stories",
            Page::Friends => "Friends",
            Page::Contributors => "Contributors",
            Page::Archive => "Archive",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::WeeklyEdition => "📰",
            Page::Stories => "✏️",
            Page::Friends => "👥",
            Page::Contributors => "🤝",
            Page::Archive => "📚",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible screen
    pub page: Page,
    /// Signed-in user; `None` shows the login screen
    pub user: Option<User>,
    /// Session problem that did not end the session (e.g. offline)
    pub session_error: Option<String>,
    /// Archived edition opened from the archive list
    pub open_edition: Option<Newspaper>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch screens, closing any opened archive edition
pub fn store_navigate(store: &AppStore, page: Page) {
    store.open_edition().set(None);
    store.page().set(page);
}

pub fn store_open_edition(store: &AppStore, edition: Newspaper) {
    store.open_edition().set(Some(edition));
}

pub fn store_close_edition(store: &AppStore) {
    store.open_edition().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_order_and_labels() {
        assert_eq!(Page::ALL[0], Page::default());
        assert_eq!(Page::ALL.len(), 6);
        assert_eq!(Page::Stories.label(), "My Stories");
        assert_eq!(Page::WeeklyEdition.label(), "Weekly Edition");
    }
}
