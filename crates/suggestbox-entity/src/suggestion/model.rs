//! Suggestion entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::reply::Reply;
use super::status::SuggestionStatus;

/// Length of a tracking code.
pub const TRACKING_CODE_LENGTH: usize = 6;
/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;
/// Maximum content length in characters, shared by suggestions and replies.
pub const MAX_CONTENT_LENGTH: usize = 3000;

/// A student suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Suggestion {
    /// Unique suggestion identifier.
    pub id: i64,
    /// Public tracking code handed to the submitter.
    pub tracking_code: String,
    /// Short title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Free-form category label.
    pub category: String,
    /// Addressed department; `None` means all departments.
    pub department_id: Option<i64>,
    /// Name of the addressed department, filled by joined queries.
    #[sqlx(default)]
    pub department_name: Option<String>,
    /// Optional submitter name.
    pub submitter_name: Option<String>,
    /// Optional submitter class.
    pub submitter_class: Option<String>,
    /// Current lifecycle status.
    pub status: SuggestionStatus,
    /// Whether the submitter allowed public listing.
    pub is_public: bool,
    /// Upvote count.
    pub upvotes: i64,
    /// When the suggestion was submitted.
    pub created_at: DateTime<Utc>,
    /// When the suggestion last changed.
    pub updated_at: DateTime<Utc>,
}

/// A suggestion together with its ordered replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionDetail {
    /// The suggestion itself.
    #[serde(flatten)]
    pub suggestion: Suggestion,
    /// Replies, oldest first.
    pub replies: Vec<Reply>,
}

/// Data required to insert a new suggestion.
#[derive(Debug, Clone)]
pub struct CreateSuggestion {
    /// Generated tracking code.
    pub tracking_code: String,
    /// Validated title.
    pub title: String,
    /// Validated content.
    pub content: String,
    /// Category label.
    pub category: String,
    /// Addressed department.
    pub department_id: Option<i64>,
    /// Submitter name.
    pub submitter_name: Option<String>,
    /// Submitter class.
    pub submitter_class: Option<String>,
    /// Public listing consent.
    pub is_public: bool,
}
