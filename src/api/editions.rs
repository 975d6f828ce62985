//! Edition Endpoints
//!
//! Weekly editions, the archive and the submission window.

use super::{get_json, ApiResult};
use crate::models::{Health, Newspaper};

pub async fn current_edition() -> ApiResult<Newspaper> {
    get_json("/editions/current").await
}

pub async fn archived_editions() -> ApiResult<Vec<Newspaper>> {
    get_json("/newspapers/archive").await
}

/// Submission window and current week
pub async fn health() -> ApiResult<Health> {
    get_json("/health").await
}
