//! Visibility scope of suggestion queries.

use serde::{Deserialize, Serialize};

/// Which suggestions a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionScope {
    /// Every suggestion.
    All,
    /// Suggestions of one department plus those addressed to all departments.
    Department(i64),
}

impl SuggestionScope {
    /// The department a query must be restricted to, if any.
    pub fn department_id(&self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Department(id) => Some(*id),
        }
    }

    /// Whether a suggestion addressed to `department_id` is visible.
    pub fn permits(&self, department_id: Option<i64>) -> bool {
        match (self, department_id) {
            (Self::All, _) => true,
            (Self::Department(_), None) => true,
            (Self::Department(own), Some(target)) => *own == target,
        }
    }

    /// Whether the caller may narrow results to another department.
    pub fn is_cross_department(&self) -> bool {
        matches!(self, Self::All)
    }
}
