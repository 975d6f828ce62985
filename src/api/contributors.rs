//! Contributor Endpoints

use serde::Serialize;

use super::{delete, get_json, path_segment, post_ignore, ApiResult};
use crate::models::Contributor;

#[derive(Serialize)]
struct AddContributorArgs<'a> {
    invitation_id: &'a str,
}

pub async fn my_contributors() -> ApiResult<Vec<Contributor>> {
    get_json("/contributors/my").await
}

/// Accept the sender of `invitation_id` as a contributor
pub async fn add_contributor(invitation_id: &str) -> ApiResult<()> {
    post_ignore("/contributors/add", &AddContributorArgs { invitation_id }).await
}

pub async fn remove_contributor(contributor_id: &str) -> ApiResult<()> {
    delete(&format!("/contributors/{}", path_segment(contributor_id))).await
}
