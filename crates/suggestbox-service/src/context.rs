//! Request context carrying the authenticated admin's claims.

use chrono::{DateTime, Utc};

use suggestbox_auth::jwt::Claims;

/// Context for the current authenticated request.
///
/// Built by the API layer from a validated token and passed into service
/// methods so every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Claims decoded from the session token.
    pub claims: Claims,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(claims: Claims) -> Self {
        Self {
            claims,
            request_time: Utc::now(),
        }
    }

    /// The acting admin's ID.
    pub fn admin_id(&self) -> i64 {
        self.claims.admin_id()
    }

    /// The acting admin's username.
    pub fn username(&self) -> &str {
        &self.claims.username
    }
}
