//! Application Context
//!
//! Session state shared via Leptos Context API. The user lives in the app
//! store; this wraps the login, registration and logout flows around it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ApiResult, NETWORK_ERROR_MESSAGE};
use crate::models::User;
use crate::storage;
use crate::store::{AppStateStoreFields, AppStore, Page};

pub const LOGIN_FAILED: &str = "Login failed - please try again";
pub const REGISTER_FAILED: &str = "Registration failed - please try again";
pub const FULL_NAME_REQUIRED: &str = "Full name is required";

/// What a `/users/me` result means for the session
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    SignedIn(User),
    /// Token rejected: drop it
    LoggedOut,
    /// Backend unreachable or misbehaving: keep the token
    Kept { message: String },
}

impl SessionOutcome {
    pub fn from_result(result: ApiResult<User>) -> Self {
        match result {
            Ok(user) => SessionOutcome::SignedIn(user),
            Err(e) if e.is_auth_failure() => SessionOutcome::LoggedOut,
            Err(_) => SessionOutcome::Kept {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: AppStore,
    /// Initial token check in progress - read
    pub checking: ReadSignal<bool>,
    /// Initial token check in progress - write
    set_checking: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new(store: AppStore) -> Self {
        let (checking, set_checking) = signal(storage::stored_token().is_some());
        Self {
            store,
            checking,
            set_checking,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.store.user().get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.user().with(|u| u.is_some())
    }

    pub fn session_error(&self) -> Option<String> {
        self.store.session_error().get()
    }

    pub fn clear_error(&self) {
        self.store.session_error().set(None);
    }

    /// Validate a stored token on startup
    pub fn restore_session(&self) {
        if storage::stored_token().is_none() {
            self.set_checking.set(false);
            return;
        }
        let this = *self;
        spawn_local(async move {
            this.refresh_user().await;
            this.set_checking.set(false);
        });
    }

    async fn refresh_user(&self) -> bool {
        self.clear_error();
        match SessionOutcome::from_result(api::current_user().await) {
            SessionOutcome::SignedIn(user) => {
                log::info!("[Auth] Signed in as {}", user.email);
                self.store.user().set(Some(user));
                true
            }
            SessionOutcome::LoggedOut => {
                log::warn!("[Auth] Stored session rejected, logging out");
                self.logout();
                false
            }
            SessionOutcome::Kept { message } => {
                log::error!("[Auth] Could not validate session: {}", message);
                self.store.session_error().set(Some(message));
                false
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.clear_error();
        let token = api::login(email, password).await.map_err(|e| failure(&e, LOGIN_FAILED))?;
        self.start_session(&token.access_token, LOGIN_FAILED).await
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> Result<(), String> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(FULL_NAME_REQUIRED.to_string());
        }
        self.clear_error();
        let token = api::register(email, password, full_name)
            .await
            .map_err(|e| failure(&e, REGISTER_FAILED))?;
        self.start_session(&token.access_token, REGISTER_FAILED).await
    }

    async fn start_session(&self, token: &str, fallback: &str) -> Result<(), String> {
        storage::store_token(token);
        if self.refresh_user().await {
            Ok(())
        } else {
            Err(self.session_error().unwrap_or_else(|| fallback.to_string()))
        }
    }

    pub fn logout(&self) {
        storage::clear_token();
        self.store.user().set(None);
        self.store.session_error().set(None);
        self.store.open_edition().set(None);
        self.store.page().set(Page::default());
    }
}

fn failure(err: &ApiError, fallback: &str) -> String {
    log::error!("[Auth] {}", err);
    err.user_message(fallback)
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "ana@example.com".to_string(),
            full_name: "Ana".to_string(),
            created_at: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn test_auth_failures_log_out() {
        assert_eq!(SessionOutcome::from_result(Err(ApiError::from_status(401, ""))), SessionOutcome::LoggedOut);
        assert_eq!(SessionOutcome::from_result(Err(ApiError::from_status(403, ""))), SessionOutcome::LoggedOut);
    }

    #[test]
    fn test_network_errors_keep_session() {
        let outcome = SessionOutcome::from_result(Err(ApiError::Network { detail: "offline".to_string() }));
        assert_eq!(
            outcome,
            SessionOutcome::Kept {
                message: NETWORK_ERROR_MESSAGE.to_string()
            }
        );
        assert!(matches!(SessionOutcome::from_result(Err(ApiError::from_status(500, ""))), SessionOutcome::Kept { .. }));
    }

    #[test]
    fn test_signed_in() {
        assert_eq!(SessionOutcome::from_result(Ok(user())), SessionOutcome::SignedIn(user()));
    }

    #[test]
    fn test_login_failure_messages() {
        let err = ApiError::from_status(401, r#"{"detail": "Incorrect email or password"}"#);
        assert_eq!(failure(&err, LOGIN_FAILED), "Incorrect email or password");

        let err = ApiError::from_status(400, "");
        assert_eq!(failure(&err, REGISTER_FAILED), REGISTER_FAILED);

        let err = ApiError::Network { detail: String::new() };
        assert_eq!(failure(&err, LOGIN_FAILED), NETWORK_ERROR_MESSAGE);
    }
}
