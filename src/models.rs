//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_edition_title() -> String {
    "Acta Diurna".to_string()
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Login / register response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    #[serde(other)]
    Unknown,
}

impl InvitationStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvitationStatus::Pending => "Pending",
            InvitationStatus::Accepted => "Accepted",
            InvitationStatus::Declined => "Declined",
            InvitationStatus::Unknown => "Unknown",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            InvitationStatus::Pending => "status-badge pending",
            InvitationStatus::Accepted => "status-badge accepted",
            InvitationStatus::Declined => "status-badge declined",
            InvitationStatus::Unknown => "status-badge",
        }
    }
}

/// Friend invitation (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub from_user_id: String,
    pub from_user_name: String,
    pub from_user_email: String,
    pub to_email: String,
    pub status: InvitationStatus,
    #[serde(default)]
    pub created_at: String,
}

pub fn pending_count(invitations: &[Invitation]) -> usize {
    invitations.iter().filter(|inv| inv.status == InvitationStatus::Pending).count()
}

/// Whether the sender of `invitation` is already one of `contributors`
pub fn is_contributor(invitation: &Invitation, contributors: &[Contributor]) -> bool {
    contributors.iter().any(|c| c.contributor_id == invitation.from_user_id)
}

/// A friend whose stories go into the user's edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: String,
    pub user_id: String,
    pub contributor_id: String,
    pub contributor_name: String,
    pub contributor_email: String,
    #[serde(default)]
    pub added_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Image attached to a story, base64 encoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryImage {
    pub id: String,
    pub filename: String,
    pub content_type: String,
    pub data: String,
}

impl StoryImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub title: String,
    pub headline: String,
    /// HTML
    pub content: String,
    #[serde(default)]
    pub images: Vec<StoryImage>,
    /// Format: "2024-W52"
    pub week_of: String,
    #[serde(default)]
    pub is_headline: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Stories filed for `week` (ISO week, e.g. "2024-W52")
pub fn stories_in_week(stories: &[Story], week: &str) -> usize {
    stories.iter().filter(|s| s.week_of == week).count()
}

/// One compiled weekly edition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newspaper {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub week_of: String,
    #[serde(default = "default_edition_title")]
    pub title: String,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub published_at: String,
}

impl Newspaper {
    pub fn headline_count(&self) -> usize {
        self.stories.iter().filter(|s| s.is_headline).count()
    }

    pub fn image_count(&self) -> usize {
        self.stories.iter().map(|s| s.images.len()).sum()
    }

    /// Distinct author names in first-appearance order
    pub fn contributor_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for story in &self.stories {
            if !names.contains(&story.author_name) {
                names.push(story.author_name.clone());
            }
        }
        names
    }
}

/// Story form contents; also the shape of a saved draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub headline: String,
    /// Markdown source
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_headline: bool,
}

impl Draft {
    /// Nothing worth saving
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.headline.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Why the draft cannot be submitted yet, if anything
    pub fn submission_error(&self, max_chars: usize) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("Please enter a story title")
        } else if self.headline.trim().is_empty() {
            Some("Please enter a headline")
        } else if self.content.trim().is_empty() {
            Some("Please write your story")
        } else if self.content.chars().count() > max_chars {
            Some("Your story is too long")
        } else {
            None
        }
    }
}

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default = "default_true")]
    pub submissions_open: bool,
    #[serde(default)]
    pub current_week: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(author: &str, is_headline: bool, images: usize) -> Story {
        Story {
            id: format!("{}-{}", author, images),
            author_id: author.to_lowercase(),
            author_name: author.to_string(),
            title: "Title".to_string(),
            headline: "Headline".to_string(),
            content: "<p>Body</p>".to_string(),
            images: (0..images)
                .map(|i| StoryImage {
                    id: i.to_string(),
                    filename: format!("{}.png", i),
                    content_type: "image/png".to_string(),
                    data: "AAAA".to_string(),
                })
                .collect(),
            week_of: "2024-W52".to_string(),
            is_headline,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_newspaper_stats() {
        let paper = Newspaper {
            id: "n1".to_string(),
            user_id: "u1".to_string(),
            week_of: "2024-W52".to_string(),
            title: "Acta Diurna".to_string(),
            stories: vec![story("Ana", true, 2), story("Ben", false, 1), story("Ana", false, 0)],
            published_at: String::new(),
        };

        assert_eq!(paper.headline_count(), 1);
        assert_eq!(paper.image_count(), 3);
        assert_eq!(paper.contributor_names(), vec!["Ana".to_string(), "Ben".to_string()]);
    }

    #[test]
    fn test_newspaper_defaults_from_backend_json() {
        let json = r#"{"id": "n1", "week_of": "2024-W51"}"#;
        let paper: Newspaper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.title, "Acta Diurna");
        assert!(paper.stories.is_empty());
    }

    #[test]
    fn test_unknown_invitation_status() {
        let json = r#"{
            "id": "i1", "from_user_id": "u1", "from_user_name": "Ana",
            "from_user_email": "ana@example.com", "to_email": "ben@example.com",
            "status": "expired"
        }"#;
        let inv: Invitation = serde_json::from_str(json).unwrap();
        assert_eq!(inv.status, InvitationStatus::Unknown);
    }

    fn invitation(from: &str, status: InvitationStatus) -> Invitation {
        Invitation {
            id: format!("inv-{}", from),
            from_user_id: from.to_string(),
            from_user_name: from.to_uppercase(),
            from_user_email: format!("{}@example.com", from),
            to_email: "me@example.com".to_string(),
            status,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_invitation_helpers() {
        let invitations = vec![
            invitation("ana", InvitationStatus::Pending),
            invitation("ben", InvitationStatus::Accepted),
            invitation("cy", InvitationStatus::Pending),
        ];
        assert_eq!(pending_count(&invitations), 2);

        let contributors = vec![Contributor {
            id: "c1".to_string(),
            user_id: "me".to_string(),
            contributor_id: "ben".to_string(),
            contributor_name: "BEN".to_string(),
            contributor_email: "ben@example.com".to_string(),
            added_at: String::new(),
        }];
        assert!(is_contributor(&invitations[1], &contributors));
        assert!(!is_contributor(&invitations[0], &contributors));
    }

    #[test]
    fn test_draft_blank() {
        assert!(Draft::default().is_blank());
        assert!(Draft { title: "  ".to_string(), ..Default::default() }.is_blank());
        assert!(!Draft { content: "x".to_string(), ..Default::default() }.is_blank());
    }

    #[test]
    fn test_draft_submission_checks() {
        let mut draft = Draft {
            title: "Moving day".to_string(),
            headline: "We finally did it".to_string(),
            content: "Boxes everywhere".to_string(),
            is_headline: true,
            ..Default::default()
        };
        assert_eq!(draft.submission_error(5_000), None);
        assert_eq!(draft.submission_error(5), Some("Your story is too long"));

        draft.headline.clear();
        assert_eq!(draft.submission_error(5_000), Some("Please enter a headline"));
        draft.title = " ".to_string();
        assert_eq!(draft.submission_error(5_000), Some("Please enter a story title"));
    }

    #[test]
    fn test_stories_in_week() {
        let mut older = story("Ana", false, 0);
        older.week_of = "2024-W51".to_string();
        let stories = vec![story("Ana", false, 0), older, story("Ben", true, 1)];
        assert_eq!(stories_in_week(&stories, "2024-W52"), 2);
        assert_eq!(stories_in_week(&stories, "2025-W01"), 0);
    }
}
