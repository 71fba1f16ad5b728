//! abs() function - absolute value

use crate::registry::function::{Callable, FunctionResult};
use crate::registry::signature::FunctionSignature;

/// abs() function - absolute value
pub struct AbsFunction;

impl Callable for AbsFunction {
    fn name(&self) -> &str {
        "abs"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: std::sync::LazyLock<FunctionSignature> =
            std::sync::LazyLock::new(|| FunctionSignature::new("abs", 1));
        &SIG
    }

    fn invoke(&self, args: &[i64]) -> FunctionResult<i64> {
        self.validate_args(args)?;
        Ok(args[0].abs())
    }
}
