//! Friend and Invitation Endpoints

use serde::Serialize;

use super::{get_json, post_ignore, ApiResult};
use crate::models::{Friend, Invitation};

#[derive(Serialize)]
struct InviteArgs<'a> {
    email: &'a str,
}

pub async fn invite_friend(email: &str) -> ApiResult<()> {
    post_ignore("/friends/invite", &InviteArgs { email }).await
}

pub async fn list_friends() -> ApiResult<Vec<Friend>> {
    get_json("/friends").await
}

/// Invitations the current user sent
pub async fn sent_invitations() -> ApiResult<Vec<Invitation>> {
    get_json("/invitations/sent").await
}

/// Invitations other users sent to the current user
pub async fn received_invitations() -> ApiResult<Vec<Invitation>> {
    get_json("/invitations/received").await
}
