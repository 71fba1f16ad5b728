//! min() function - smaller of two values

use crate::registry::function::{Callable, FunctionResult};
use crate::registry::signature::FunctionSignature;

/// min() function - smaller of two values
pub struct MinFunction;

impl Callable for MinFunction {
    fn name(&self) -> &str {
        "min"
    }

    fn signature(&self) -> &FunctionSignature {
        static SIG: std::sync::LazyLock<FunctionSignature> =
            std::sync::LazyLock::new(|| FunctionSignature::new("min", 2));
        &SIG
    }

    fn invoke(&self, args: &[i64]) -> FunctionResult<i64> {
        self.validate_args(args)?;
        Ok(args[0].min(args[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_smaller_argument() {
        assert_eq!(MinFunction.invoke(&[2, 3]), Ok(2));
        assert_eq!(MinFunction.invoke(&[3, -2]), Ok(-2));
    }
}
