//! Admin role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles an admin account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Sees every suggestion and manages accounts and departments.
    SuperAdmin,
    /// Handles the suggestions of one department.
    DepartmentAdmin,
}

impl AdminRole {
    /// Check if this role is a super admin.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::DepartmentAdmin => "department_admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = suggestbox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "department_admin" => Ok(Self::DepartmentAdmin),
            _ => Err(suggestbox_core::AppError::validation(format!(
                "Invalid admin role: '{s}'. Expected one of: super_admin, department_admin"
            ))),
        }
    }
}
