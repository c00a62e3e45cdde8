//! Core type definitions used across the SuggestBox workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
