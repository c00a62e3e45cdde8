//! Suggestion status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a suggestion.
///
/// Any state may move to any other state; only the value set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionStatus {
    /// Newly submitted, not yet reviewed. Hidden from the public list.
    PendingReview,
    /// Reviewed and waiting to be handled.
    Pending,
    /// Being worked on.
    InProgress,
    /// Handled.
    Resolved,
    /// Closed without further action.
    Closed,
    /// Rejected. Hidden from the public list.
    Rejected,
}

impl SuggestionStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [SuggestionStatus; 6] = [
        Self::PendingReview,
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
        Self::Rejected,
    ];

    /// Whether suggestions in this status may appear in the public list.
    pub fn is_publicly_listed(&self) -> bool {
        !matches!(self, Self::PendingReview | Self::Rejected)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "pending-review",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SuggestionStatus {
    type Err = suggestbox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| {
                suggestbox_core::AppError::validation(format!(
                    "Invalid status: '{s}'. Expected one of: pending-review, pending, \
                     in-progress, resolved, closed, rejected"
                ))
            })
    }
}
