//! JWT claims structure carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use suggestbox_entity::admin::{AdminRole, AdminUser};
use suggestbox_entity::suggestion::SuggestionScope;

/// Claims payload minted at login. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the admin ID.
    pub sub: i64,
    /// Username at the time of issuance.
    pub username: String,
    /// Role at the time of issuance.
    pub role: AdminRole,
    /// Department affiliation at the time of issuance.
    pub department_id: Option<i64>,
    /// Cross-department flag at the time of issuance.
    pub can_view_all: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for an admin issued at `now` and valid for `ttl`.
    pub fn for_admin(admin: &AdminUser, now: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self {
            sub: admin.id,
            username: admin.username.clone(),
            role: admin.role,
            department_id: admin.department_id,
            can_view_all: admin.can_view_all,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Returns the admin ID from the subject claim.
    pub fn admin_id(&self) -> i64 {
        self.sub
    }

    /// Whether the holder is a super admin.
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }

    /// Whether the holder may read every department's suggestions.
    pub fn sees_all_departments(&self) -> bool {
        self.is_super_admin() || self.can_view_all
    }

    /// The suggestion scope these claims grant, if any.
    ///
    /// `None` means a department admin without a department and without
    /// the view-all flag, which sees nothing.
    pub fn scope(&self) -> Option<SuggestionScope> {
        if self.sees_all_departments() {
            Some(SuggestionScope::All)
        } else {
            self.department_id.map(SuggestionScope::Department)
        }
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
