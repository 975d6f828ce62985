//! Auth Endpoints

use serde::Serialize;

use super::{get_json, post_json, ApiResult};
use crate::models::{AuthToken, User};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

pub async fn login(email: &str, password: &str) -> ApiResult<AuthToken> {
    post_json("/auth/login", &LoginArgs { email, password }).await
}

pub async fn register(email: &str, password: &str, full_name: &str) -> ApiResult<AuthToken> {
    post_json("/auth/register", &RegisterArgs { email, password, full_name }).await
}

/// Validate the stored token and fetch its user
pub async fn current_user() -> ApiResult<User> {
    get_json("/users/me").await
}
