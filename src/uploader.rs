//! Image Upload Rules
//!
//! Validation for story images. A batch is accepted or rejected as a whole;
//! a rejected batch leaves the current images untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::{MAX_IMAGES, MAX_IMAGE_MB};
use crate::models::StoryImage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Maximum {max} images allowed per story")]
    TooMany { max: usize },

    #[error("Please select only image files")]
    NotAnImage { name: String },

    #[error("Image \"{name}\" is too large. Maximum size is {max_mb}MB")]
    TooLarge { name: String, max_mb: u64 },

    #[error("Failed to process images: {0}")]
    Read(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_images: usize,
    pub max_size_mb: u64,
}

impl UploadLimits {
    pub const STORY: UploadLimits = UploadLimits {
        max_images: MAX_IMAGES,
        max_size_mb: MAX_IMAGE_MB,
    };

    pub fn max_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::STORY
    }
}

/// What the browser tells us about a picked file before reading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// `File.type`; may be empty
    pub mime: String,
    pub size: u64,
}

/// Image MIME type for a file: the reported type when it is an image,
/// otherwise a guess from the file name when nothing was reported.
pub fn resolve_mime(name: &str, reported: &str) -> Option<String> {
    if !reported.is_empty() {
        return reported.starts_with("image/").then(|| reported.to_string());
    }
    mime_guess::from_path(name)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .map(|m| m.essence_str().to_string())
}

/// Check a batch against the limits, given how many images are already
/// attached. Returns the resolved MIME type of each file, in order.
pub fn validate_batch(existing: usize, files: &[FileMeta], limits: UploadLimits) -> Result<Vec<String>, UploadError> {
    if existing + files.len() > limits.max_images {
        return Err(UploadError::TooMany { max: limits.max_images });
    }

    files
        .iter()
        .map(|file| {
            let mime = resolve_mime(&file.name, &file.mime).ok_or_else(|| UploadError::NotAnImage {
                name: file.name.clone(),
            })?;
            if file.size > limits.max_bytes() {
                return Err(UploadError::TooLarge {
                    name: file.name.clone(),
                    max_mb: limits.max_size_mb,
                });
            }
            Ok(mime)
        })
        .collect()
}

/// Append a read batch. Re-checks the count since the list may have
/// changed while files were being read.
pub fn append_images(images: &mut Vec<StoryImage>, batch: Vec<StoryImage>, limits: UploadLimits) -> Result<(), UploadError> {
    if images.len() + batch.len() > limits.max_images {
        return Err(UploadError::TooMany { max: limits.max_images });
    }
    images.extend(batch);
    Ok(())
}

pub fn remove_image(images: &mut Vec<StoryImage>, id: &str) {
    images.retain(|img| img.id != id);
}

pub fn encode_image(id: String, filename: String, content_type: String, bytes: &[u8]) -> StoryImage {
    StoryImage {
        id,
        filename,
        content_type,
        data: STANDARD.encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, mime: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    fn image(id: &str) -> StoryImage {
        encode_image(id.to_string(), format!("{}.png", id), "image/png".to_string(), b"png")
    }

    #[test]
    fn test_rejects_excess_images_and_keeps_list() {
        let mut images = vec![image("a"), image("b")];
        let before = images.clone();

        let batch = [meta("c.png", "image/png", 10), meta("d.png", "image/png", 10)];
        let err = validate_batch(images.len(), &batch, UploadLimits::STORY).unwrap_err();
        assert_eq!(err, UploadError::TooMany { max: 3 });
        assert_eq!(err.to_string(), "Maximum 3 images allowed per story");

        let err = append_images(&mut images, vec![image("c"), image("d")], UploadLimits::STORY).unwrap_err();
        assert_eq!(err, UploadError::TooMany { max: 3 });
        assert_eq!(images, before);
    }

    #[test]
    fn test_accepts_up_to_limit() {
        let mut images = vec![image("a")];
        let batch = [meta("b.jpg", "image/jpeg", 1024), meta("c.gif", "image/gif", 2048)];

        let mimes = validate_batch(images.len(), &batch, UploadLimits::STORY).unwrap();
        assert_eq!(mimes, vec!["image/jpeg".to_string(), "image/gif".to_string()]);

        append_images(&mut images, vec![image("b"), image("c")], UploadLimits::STORY).unwrap();
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_rejects_non_images() {
        let batch = [meta("notes.pdf", "application/pdf", 10)];
        let err = validate_batch(0, &batch, UploadLimits::STORY).unwrap_err();
        assert_eq!(err.to_string(), "Please select only image files");
    }

    #[test]
    fn test_rejects_large_files() {
        let limits = UploadLimits::STORY;
        let batch = [meta("huge.png", "image/png", limits.max_bytes() + 1)];
        let err = validate_batch(0, &batch, limits).unwrap_err();
        assert_eq!(err.to_string(), "Image \"huge.png\" is too large. Maximum size is 5MB");

        let exact = [meta("ok.png", "image/png", limits.max_bytes())];
        assert!(validate_batch(0, &exact, limits).is_ok());
    }

    #[test]
    fn test_mime_guessed_when_missing() {
        assert_eq!(resolve_mime("photo.JPG", ""), Some("image/jpeg".to_string()));
        assert_eq!(resolve_mime("archive.zip", ""), None);
        assert_eq!(resolve_mime("photo.png", "text/plain"), None);
    }

    #[test]
    fn test_remove_image() {
        let mut images = vec![image("a"), image("b")];
        remove_image(&mut images, "a");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "b");
    }

    #[test]
    fn test_encode_image_data_url() {
        let img = encode_image("x".to_string(), "x.png".to_string(), "image/png".to_string(), b"hi");
        assert_eq!(img.data, "aGk=");
        assert_eq!(img.data_url(), "data:image/png;base64,aGk=");
    }
}
