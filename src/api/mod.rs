//! Backend API Wrappers
//!
//! Frontend bindings to the REST backend, organized by domain.
//! Every request carries the stored bearer token and is bounded by
//! `REQUEST_TIMEOUT_MS`.

mod auth;
mod contributors;
mod drafts;
mod editions;
mod error;
mod friends;
mod retry;
mod stories;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{api_url, REQUEST_TIMEOUT_MS};
use crate::storage;

// Re-export all public items
pub use auth::*;
pub use contributors::*;
pub use drafts::*;
pub use editions::*;
pub use error::*;
pub use friends::*;
pub use retry::*;
pub use stories::*;

pub type ApiResult<T> = Result<T, ApiError>;

/// Start a request to `/api{path}` with the auth header attached
fn request(method: Method, path: &str) -> RequestBuilder {
    let builder = Client::new().request(method, api_url(path));
    match storage::stored_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send with timeout and map non-success statuses to `ApiError`
async fn send(builder: RequestBuilder, label: &str) -> ApiResult<Response> {
    let response = match select(Box::pin(builder.send()), Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS))).await {
        Either::Left((Ok(response), _)) => response,
        Either::Left((Err(e), _)) => {
            log::error!("[Api] {} failed: {}", label, e);
            return Err(ApiError::Network { detail: e.to_string() });
        }
        Either::Right(_) => {
            log::error!("[Api] {} timed out after {}ms", label, REQUEST_TIMEOUT_MS);
            return Err(ApiError::Timeout);
        }
    };

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status.as_u16(), &body);
    log::error!("[Api] {} returned {}: {}", label, status.as_u16(), err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response, label: &str) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| {
        log::error!("[Api] {} returned an unreadable body: {}", label, e);
        ApiError::Decode(e.to_string())
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let label = format!("GET {}", path);
    let response = send(request(Method::GET, path), &label).await?;
    decode(response, &label).await
}

pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let label = format!("POST {}", path);
    let response = send(request(Method::POST, path).json(body), &label).await?;
    decode(response, &label).await
}

pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let label = format!("PUT {}", path);
    let response = send(request(Method::PUT, path).json(body), &label).await?;
    decode(response, &label).await
}

/// POST whose response body is not needed
pub(crate) async fn post_ignore<B: Serialize + ?Sized>(path: &str, body: &B) -> ApiResult<()> {
    let label = format!("POST {}", path);
    send(request(Method::POST, path).json(body), &label).await.map(|_| ())
}

pub(crate) async fn post_multipart(path: &str, form: reqwest::multipart::Form) -> ApiResult<()> {
    let label = format!("POST {}", path);
    send(request(Method::POST, path).multipart(form), &label).await.map(|_| ())
}

pub(crate) async fn delete(path: &str) -> ApiResult<()> {
    let label = format!("DELETE {}", path);
    send(request(Method::DELETE, path), &label).await.map(|_| ())
}

/// Unreserved URL characters stay as they are
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode an id for use as a path segment
pub(crate) fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("3f2a-77_b.c"), "3f2a-77_b.c");
        assert_eq!(path_segment("a/b"), "a%2Fb");
        assert_eq!(path_segment("abc123"), "abc123");
    }
}
