//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod drop_zone;
mod edition_stats;
mod error_panel;
mod flip_book;
mod image_uploader;
mod nav_bar;
mod story_editor;
mod story_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use edition_stats::EditionStats;
pub use error_panel::ErrorPanel;
pub use flip_book::FlipBook;
pub use image_uploader::ImageUploader;
pub use nav_bar::NavBar;
pub use story_editor::StoryEditor;
pub use story_form::StoryForm;
