//! Memoizing expression evaluator
//!
//! The recursive reducer that collapses an expression tree to a single
//! integer, memoizing function call results for the duration of one
//! evaluation session.

#![warn(missing_docs)]

mod cache;
mod engine;
mod error;

pub use cache::{CallCache, CallKey};
pub use engine::Evaluator;
pub use error::{EvaluationError, EvaluationResult};
