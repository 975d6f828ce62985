//! Client Configuration
//!
//! Compile-time settings. Override the backend with `ACTA_API_URL` at build time.

/// Backend origin, without the `/api` suffix
pub const API_BASE_URL: &str = match option_env!("ACTA_API_URL") {
    Some(url) => url,
    None => "http://localhost:8001",
};

/// Per-request timeout
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Local storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Local storage key holding the unsubmitted story draft
pub const DRAFT_KEY: &str = "acta_story_draft";

/// Debounce window for local draft writes
pub const LOCAL_DRAFT_DEBOUNCE_MS: u32 = 1_000;

/// Interval between server draft saves
pub const SERVER_DRAFT_INTERVAL_MS: u32 = 30_000;

/// Images allowed per story
pub const MAX_IMAGES: usize = 3;

/// Maximum size of a single image, in megabytes
pub const MAX_IMAGE_MB: u64 = 5;

/// Story content limit, in characters
pub const MAX_CONTENT_CHARS: usize = 5_000;

/// Friends allowed per network
pub const MAX_FRIENDS: usize = 50;

/// Submission deadline shown in the UI
pub const SUBMISSION_DEADLINE: &str = "Monday 11:59 PM EST";

/// Publication time shown in the UI
pub const PUBLICATION_TIME: &str = "Tuesday at 8:00 AM EST";

/// Build a full API URL from a path such as `/stories/my`
pub fn api_url(path: &str) -> String {
    format!("{}/api{}", API_BASE_URL.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let url = api_url("/stories/my");
        assert!(url.ends_with("/api/stories/my"));
        assert!(!url.contains("//api"));
    }
}
