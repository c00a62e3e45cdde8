//! Suggestion domain entities.

pub mod model;
pub mod reply;
pub mod scope;
pub mod status;

pub use model::{CreateSuggestion, Suggestion, SuggestionDetail};
pub use reply::Reply;
pub use scope::SuggestionScope;
pub use status::SuggestionStatus;
