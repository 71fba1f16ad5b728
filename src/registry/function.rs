//! Callable functions and the registry that resolves call targets

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::ast::CallTarget;
use crate::registry::signature::FunctionSignature;

/// Result type for function operations
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function invocation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// Invalid number of arguments
    #[error("Function '{name}' expects {min}-{} arguments, got {actual}", max.map_or("∞".to_string(), |n| n.to_string()))]
    InvalidArity {
        /// Function name
        name: String,
        /// Minimum arguments
        min: usize,
        /// Maximum arguments (None for unlimited)
        max: Option<usize>,
        /// Actual arguments provided
        actual: usize,
    },

    /// Runtime failure inside the function itself
    #[error("Function '{name}' evaluation error: {message}")]
    EvaluationError {
        /// Function name
        name: String,
        /// Error message
        message: String,
    },
}

/// An external integer-valued function callable from expressions
///
/// Implementations are pure from the evaluator's point of view: the return
/// value is the only output the engine relies on.
pub trait Callable: Send + Sync {
    /// Name the function is registered under
    fn name(&self) -> &str;

    /// Declared signature, used for arity validation
    fn signature(&self) -> &FunctionSignature;

    /// Invoke the function with fully-reduced argument values
    fn invoke(&self, args: &[i64]) -> FunctionResult<i64>;

    /// Validate the argument count against the signature
    fn validate_args(&self, args: &[i64]) -> FunctionResult<()> {
        let signature = self.signature();
        if signature.matches(args.len()) {
            Ok(())
        } else {
            Err(FunctionError::InvalidArity {
                name: self.name().to_string(),
                min: signature.min_arity,
                max: signature.max_arity,
                actual: args.len(),
            })
        }
    }
}

/// A [`Callable`] backed by a plain closure
///
/// The adapter embedders and tests reach for when a full trait
/// implementation is not worth the ceremony.
pub struct NativeFunction<F> {
    signature: FunctionSignature,
    function: F,
}

impl<F> NativeFunction<F>
where
    F: Fn(&[i64]) -> FunctionResult<i64> + Send + Sync,
{
    /// Wrap a closure with a fixed-arity signature
    pub fn new(name: impl Into<String>, arity: usize, function: F) -> Self {
        Self {
            signature: FunctionSignature::new(name, arity),
            function,
        }
    }

    /// Wrap a closure with an explicit signature
    pub fn with_signature(signature: FunctionSignature, function: F) -> Self {
        Self {
            signature,
            function,
        }
    }
}

impl<F> Callable for NativeFunction<F>
where
    F: Fn(&[i64]) -> FunctionResult<i64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.signature.name
    }

    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn invoke(&self, args: &[i64]) -> FunctionResult<i64> {
        (self.function)(args)
    }
}

/// Registry resolving call targets to callables
///
/// Targets are resolved here ahead of invocation; the evaluator never
/// performs any dynamic lookup beyond this map.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: FxHashMap<CallTarget, Arc<dyn Callable>>,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("function_count", &self.functions.len())
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    /// Register a free function under its own name
    pub fn register<F: Callable + 'static>(&mut self, function: F) {
        let target = CallTarget::function(function.name());
        self.functions.insert(target, Arc::new(function));
    }

    /// Register a function bound to a named receiver instance
    pub fn register_bound<F: Callable + 'static>(
        &mut self,
        receiver: impl Into<String>,
        function: F,
    ) {
        let target = CallTarget::method(receiver, function.name());
        self.functions.insert(target, Arc::new(function));
    }

    /// Register a closure as a free function with a fixed arity
    pub fn register_fn<F>(&mut self, name: impl Into<String>, arity: usize, function: F)
    where
        F: Fn(&[i64]) -> FunctionResult<i64> + Send + Sync + 'static,
    {
        self.register(NativeFunction::new(name, arity, function));
    }

    /// Register a closure as a bound method with a fixed arity
    pub fn register_bound_fn<F>(
        &mut self,
        receiver: impl Into<String>,
        name: impl Into<String>,
        arity: usize,
        function: F,
    ) where
        F: Fn(&[i64]) -> FunctionResult<i64> + Send + Sync + 'static,
    {
        self.register_bound(receiver, NativeFunction::new(name, arity, function));
    }

    /// Resolve a call target to its callable
    pub fn get(&self, target: &CallTarget) -> Option<&Arc<dyn Callable>> {
        self.functions.get(target)
    }

    /// Check whether a target is registered
    pub fn contains(&self, target: &CallTarget) -> bool {
        self.functions.contains_key(target)
    }

    /// Number of registered callables
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Iterate over the registered targets
    pub fn targets(&self) -> impl Iterator<Item = &CallTarget> {
        self.functions.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_free_and_bound_targets_separately() {
        let mut registry = FunctionRegistry::new();
        registry.register_fn("value", 0, |_| Ok(1));
        registry.register_bound_fn("left", "value", 0, |_| Ok(2));

        let free = CallTarget::function("value");
        let bound = CallTarget::method("left", "value");
        assert_eq!(registry.get(&free).unwrap().invoke(&[]), Ok(1));
        assert_eq!(registry.get(&bound).unwrap().invoke(&[]), Ok(2));
        assert!(!registry.contains(&CallTarget::method("right", "value")));
    }

    #[test]
    fn validate_args_enforces_arity() {
        let function = NativeFunction::new("pair", 2, |args: &[i64]| Ok(args[0] + args[1]));
        assert_eq!(function.validate_args(&[1, 2]), Ok(()));
        assert_eq!(
            function.validate_args(&[1]),
            Err(FunctionError::InvalidArity {
                name: "pair".to_string(),
                min: 2,
                max: Some(2),
                actual: 1,
            })
        );
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = FunctionRegistry::new();
        registry.register_fn("f", 0, |_| Ok(1));
        registry.register_fn("f", 0, |_| Ok(2));
        assert_eq!(registry.len(), 1);
        let target = CallTarget::function("f");
        assert_eq!(registry.get(&target).unwrap().invoke(&[]), Ok(2));
    }
}
