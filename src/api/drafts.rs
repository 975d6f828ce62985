//! Server-side Draft Endpoints
//!
//! The backend lists drafts newest first. A draft with an id is updated in
//! place; without one a new draft is created.

use super::{delete, get_json, path_segment, post_json, put_json, ApiError, ApiResult};
use crate::models::Draft;

pub async fn list_drafts() -> ApiResult<Vec<Draft>> {
    get_json("/drafts").await
}

pub async fn save_draft(draft: &Draft) -> ApiResult<Draft> {
    let Some(id) = draft.id.as_deref() else {
        return post_json("/drafts", draft).await;
    };
    match put_json(&format!("/drafts/{}", path_segment(id)), draft).await {
        // Deleted elsewhere: start a fresh one
        Err(ApiError::Http { status: 404, .. }) => {
            let fresh = Draft { id: None, ..draft.clone() };
            post_json("/drafts", &fresh).await
        }
        other => other,
    }
}

pub async fn delete_draft(id: &str) -> ApiResult<()> {
    delete(&format!("/drafts/{}", path_segment(id))).await
}
