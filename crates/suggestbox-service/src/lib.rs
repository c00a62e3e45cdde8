//! # suggestbox-service
//!
//! Business logic service layer for SuggestBox. Each service orchestrates
//! repositories and the auth building blocks to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod bootstrap;
pub mod context;
pub mod dashboard;
pub mod department;
pub mod suggestion;

#[cfg(test)]
pub(crate) mod testing;

pub use admin::{AdminService, AuthService};
pub use bootstrap::BootstrapService;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use department::DepartmentService;
pub use suggestion::SuggestionService;
