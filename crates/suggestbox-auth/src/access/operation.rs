//! Operations and targets the access evaluator decides on.

use std::fmt;

use suggestbox_entity::admin::AdminRole;

/// An action an authenticated caller wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read a suggestion, list suggestions, or view dashboard figures.
    ReadSuggestion,
    /// Reply to a suggestion.
    ReplySuggestion,
    /// Change a suggestion's status.
    UpdateSuggestionStatus,
    /// Delete suggestions.
    DeleteSuggestion,
    /// List admin accounts.
    ListAdmins,
    /// Create an admin account.
    CreateAdmin,
    /// Change an admin account.
    UpdateAdmin,
    /// Remove an admin account.
    DeleteAdmin,
    /// Create, rename, or delete departments.
    ManageDepartments,
}

impl Operation {
    /// Whether the operation is reserved for super admins.
    pub fn is_administrative(&self) -> bool {
        matches!(
            self,
            Self::ListAdmins
                | Self::CreateAdmin
                | Self::UpdateAdmin
                | Self::DeleteAdmin
                | Self::ManageDepartments
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ReadSuggestion => "read suggestions",
            Self::ReplySuggestion => "reply to suggestions",
            Self::UpdateSuggestionStatus => "update suggestion status",
            Self::DeleteSuggestion => "delete suggestions",
            Self::ListAdmins => "list admins",
            Self::CreateAdmin => "create admins",
            Self::UpdateAdmin => "update admins",
            Self::DeleteAdmin => "delete admins",
            Self::ManageDepartments => "manage departments",
        };
        f.write_str(name)
    }
}

/// What an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// No particular resource, e.g. a scoped list.
    Collection,
    /// A suggestion addressed to a department (`None` = all departments).
    Suggestion {
        /// The suggestion's department.
        department_id: Option<i64>,
    },
    /// An existing admin account.
    Admin {
        /// Whether the account is the protected root.
        is_root: bool,
    },
    /// Settings for a new or changed admin account.
    AdminAssignment {
        /// Requested role.
        role: AdminRole,
        /// Requested department.
        department_id: Option<i64>,
        /// Requested cross-department flag.
        can_view_all: bool,
    },
}
