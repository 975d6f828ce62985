//! Story Endpoints

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use super::{get_json, path_segment, post_json, post_multipart, ApiError, ApiResult};
use crate::models::{Story, StoryImage};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateStoryArgs<'a> {
    pub title: &'a str,
    pub headline: &'a str,
    /// Rendered HTML
    pub content: &'a str,
    pub is_headline: bool,
}

// ========================
// Commands
// ========================

pub async fn list_stories() -> ApiResult<Vec<Story>> {
    get_json("/stories").await
}

pub async fn my_stories() -> ApiResult<Vec<Story>> {
    get_json("/stories/my").await
}

pub async fn create_story(args: &CreateStoryArgs<'_>) -> ApiResult<Story> {
    post_json("/stories", args).await
}

/// Upload one image as multipart field `file`
pub async fn upload_story_image(story_id: &str, image: &StoryImage) -> ApiResult<()> {
    let bytes = STANDARD
        .decode(image.data.as_bytes())
        .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", image.filename, e)))?;

    let part = Part::bytes(bytes)
        .file_name(image.filename.clone())
        .mime_str(&image.content_type)
        .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", image.filename, e)))?;

    let path = format!("/stories/{}/images", path_segment(story_id));
    post_multipart(&path, Form::new().part("file", part)).await
}

/// Upload images one at a time, in order. Stops at the first failure and
/// reports how many went through.
pub async fn upload_story_images(story_id: &str, images: &[StoryImage]) -> Result<usize, (usize, ApiError)> {
    for (uploaded, image) in images.iter().enumerate() {
        if let Err(e) = upload_story_image(story_id, image).await {
            return Err((uploaded, e));
        }
    }
    Ok(images.len())
}
