//! Integer arithmetic expression engine with per-evaluation memoization of
//! external function calls
//!
//! Expressions are parsed into an [`ast::ExpressionNode`] tree and reduced
//! bottom-up by the [`evaluator::Evaluator`]. Call nodes resolve through a
//! [`registry::FunctionRegistry`]; each distinct combination of function,
//! receiver, and fully-reduced argument values is invoked at most once per
//! evaluation, and the cache dies with the evaluation.
//!
//! ```
//! use memocalc::{Engine, FunctionRegistry};
//!
//! let mut functions = FunctionRegistry::new();
//! functions.register_fn("double", 1, |args| Ok(args[0] * 2));
//!
//! let engine = Engine::new(functions);
//! // `double` runs once; the second occurrence is served from the cache.
//! assert_eq!(engine.evaluate("double(4) + double(4)").unwrap(), 16);
//! ```

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod registry;

// Re-export main types
pub use ast::{BinaryOperator, CallTarget, ExpressionNode, UnaryOperator};
pub use engine::Engine;
pub use error::{Error, Result};
pub use evaluator::{EvaluationError, Evaluator};
pub use parser::{ParseError, parse_expression as parse};
pub use registry::{
    Callable, FunctionError, FunctionRegistry, FunctionResult, FunctionSignature, NativeFunction,
    create_standard_registry,
};
