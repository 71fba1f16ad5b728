//! Error types for expression evaluation

use thiserror::Error;

use crate::ast::CallTarget;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors that can occur during expression evaluation
///
/// Every fault aborts the whole evaluation; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Function invocation error
    #[error("Function error: {0}")]
    Function(#[from] crate::registry::function::FunctionError),

    /// Call target not present in the registry
    #[error("Unknown function '{target}'")]
    UnknownFunction {
        /// The unresolved call target
        target: CallTarget,
    },

    /// Unbound identifier encountered in the tree
    #[error("Unbound variable '{name}'")]
    UnboundVariable {
        /// Variable name
        name: String,
    },

    /// Expression nesting exceeded the evaluator's depth guard
    #[error("Expression nesting exceeds the maximum depth of {limit}")]
    RecursionLimitExceeded {
        /// Maximum supported depth
        limit: usize,
    },
}
