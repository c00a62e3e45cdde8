//! Response DTOs.

use serde::{Deserialize, Serialize};

use suggestbox_entity::admin::AdminUser;

/// Returned after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingCodeResponse {
    /// Code the submitter uses to follow up.
    pub tracking_code: String,
}

/// Returned after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for admin routes.
    pub token: String,
    /// The authenticated admin.
    pub admin: AdminUser,
}

/// Upvote count after an upvote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpvoteResponse {
    /// New count.
    pub upvotes: i64,
}

/// Number of rows removed by a bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Suggestions deleted.
    pub deleted: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// `connected` or `unavailable`.
    pub database: String,
    /// Crate version.
    pub version: String,
}
