//! Built-in functions available in the standard registry

pub mod math;

pub use math::{AbsFunction, MaxFunction, MinFunction};

use super::function::FunctionRegistry;

/// Register all built-in functions
pub fn register_builtin_functions(registry: &mut FunctionRegistry) {
    math::register_math_functions(registry);
}
