//! max() function - larger of two values

use crate::registry::function::{Callable, FunctionResult};
use crate::registry::signature::FunctionSignature;

/// max() function - larger of two values
pub struct MaxFunction;

impl Callable for MaxFunction {
    fn name(&self) -> &str {
        "max"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: std::sync::LazyLock<FunctionSignature> =
            std::sync::LazyLock::new(|| FunctionSignature::new("max", 2));
        &SIG
    }

    fn invoke(&self, args: &[i64]) -> FunctionResult<i64> {
        self.validate_args(args)?;
        Ok(args[0].max(args[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_larger_argument() {
        assert_eq!(MaxFunction.invoke(&[4, 5]), Ok(5));
        assert_eq!(MaxFunction.invoke(&[-4, -5]), Ok(-4));
    }
}
