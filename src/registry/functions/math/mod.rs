//! Math function implementations

mod abs;
mod max;
mod min;

pub use abs::AbsFunction;
pub use max::MaxFunction;
pub use min::MinFunction;

use crate::registry::function::FunctionRegistry;

/// Register all math functions
pub fn register_math_functions(registry: &mut FunctionRegistry) {
    registry.register(AbsFunction);
    registry.register(MinFunction);
    registry.register(MaxFunction);
}
