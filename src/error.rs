//! Crate-level error type

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any fault an engine operation can produce
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Expression text failed to parse
    #[error("Parse error: {0}")]
    Parse(#[from] crate::parser::ParseError),

    /// Expression tree failed to evaluate
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] crate::evaluator::EvaluationError),
}
