//! Repository implementations for all SuggestBox entities.

pub mod admin;
pub mod department;
pub mod reply;
pub mod stats;
pub mod suggestion;

pub use admin::AdminRepository;
pub use department::DepartmentRepository;
pub use reply::ReplyRepository;
pub use stats::StatsRepository;
pub use suggestion::SuggestionRepository;
