//! Dashboard statistics value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated figures shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Suggestions visible to the caller.
    pub total: i64,
    /// Suggestions awaiting review.
    pub pending_review: i64,
    /// Suggestions being worked on.
    pub in_progress: i64,
    /// Resolved suggestions.
    pub resolved: i64,
    /// `resolved / total * 100`, zero when there are no suggestions.
    pub resolution_rate: f64,
    /// One entry per day, oldest first.
    pub trend: Vec<TrendPoint>,
    /// Suggestion counts per department, largest first.
    pub by_department: Vec<DepartmentCount>,
}

/// Activity on a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day (UTC).
    pub date: NaiveDate,
    /// Suggestions submitted that day.
    pub new: i64,
    /// Suggestions resolved that day.
    pub resolved: i64,
}

/// Number of suggestions addressed to one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DepartmentCount {
    /// Department identifier.
    pub department_id: i64,
    /// Department name.
    pub name: String,
    /// Suggestion count.
    pub count: i64,
}
