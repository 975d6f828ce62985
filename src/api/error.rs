//! API Errors
//!
//! Classification of failed backend calls.

use serde::Deserialize;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";
pub const TIMEOUT_MESSAGE: &str = "Request timeout - please check your connection";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request timeout - please check your connection")]
    Timeout,

    /// No response at all (offline, DNS, CORS, ...)
    #[error("Network error - please check your connection")]
    Network { detail: String },

    /// 401 / 403
    #[error("Authentication failed")]
    Unauthorized { status: u16, detail: Option<String> },

    /// 5xx
    #[error("Server error - please try again")]
    Server { status: u16, detail: Option<String> },

    /// Any other non-success status
    #[error("Request failed with status {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The request could not be built (bad MIME type, bad payload, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// FastAPI error body: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build an error from a non-success status and its response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = parse_detail(body);
        match status {
            401 | 403 => ApiError::Unauthorized { status, detail },
            500..=599 => ApiError::Server { status, detail },
            _ => ApiError::Http { status, detail },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Server { status, .. } | ApiError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Server-provided explanation, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail, .. } | ApiError::Server { detail, .. } | ApiError::Http { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    /// The session is no longer valid
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }

    /// Text for the UI: the server detail when present, the connectivity
    /// message for network failures, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self {
            ApiError::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Timeout => TIMEOUT_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Extract a string `detail`. Validation errors carry a list instead; those
/// are not shown verbatim.
fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detail_is_verbatim() {
        let err = ApiError::from_status(401, r#"{"detail": "Incorrect email or password"}"#);
        assert!(err.is_auth_failure());
        assert_eq!(err.user_message("Login failed - please try again"), "Incorrect email or password");
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network { detail: "TypeError: Failed to fetch".to_string() };
        assert!(!err.is_auth_failure());
        assert_eq!(err.user_message("Login failed - please try again"), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(ApiError::Timeout.user_message("fallback"), TIMEOUT_MESSAGE);
    }

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_status(403, "").is_auth_failure());
        assert!(ApiError::from_status(502, "<html>Bad Gateway</html>").is_server_error());
        assert_eq!(ApiError::from_status(404, "").status(), Some(404));
        assert!(matches!(ApiError::from_status(422, ""), ApiError::Http { status: 422, .. }));
    }

    #[test]
    fn test_fallback_without_detail() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to load weekly edition"), "Failed to load weekly edition");
    }

    #[test]
    fn test_validation_detail_list_is_ignored() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to send invitation"), "Failed to send invitation");
    }
}
