//! Function registry for external callables
//!
//! A trait-based registry mapping call targets to integer-valued functions,
//! allowing extensible and type-safe resolution ahead of invocation.

#![warn(missing_docs)]

pub mod function;
pub mod functions;
pub mod signature;

pub use function::{Callable, FunctionError, FunctionRegistry, FunctionResult, NativeFunction};
pub use signature::FunctionSignature;

/// Create a registry preloaded with all built-in functions
pub fn create_standard_registry() -> FunctionRegistry {
    let mut functions = FunctionRegistry::new();
    functions::register_builtin_functions(&mut functions);
    functions
}
