//! Suggestion lifecycle: submission, lookup, listing, triage, and removal.

pub mod service;
pub mod tracking;

pub use service::{SubmitSuggestion, SuggestionService};
pub use tracking::generate_tracking_code;
