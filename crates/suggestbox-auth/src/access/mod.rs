//! Access control evaluation for admin operations.

pub mod evaluator;
pub mod operation;

pub use evaluator::AccessEvaluator;
pub use operation::{Operation, Target};
