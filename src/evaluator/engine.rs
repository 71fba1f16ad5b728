//! The memoizing tree-walking evaluator

use std::sync::Arc;

use log::{debug, trace};
use smallvec::SmallVec;

use super::cache::{CallCache, CallKey};
use super::error::{EvaluationError, EvaluationResult};
use crate::ast::{BinaryOperator, CallData, ExpressionNode, UnaryOperator};
use crate::registry::FunctionRegistry;

/// Maximum tree depth one evaluation descends before faulting
const MAX_DEPTH: usize = 1024;

/// Tree-walking evaluator that memoizes function call results
///
/// Holds only the registry handle. Every [`evaluate`](Evaluator::evaluate)
/// call owns a fresh [`CallCache`], so no state survives from one
/// evaluation to the next and independent evaluators can run side by side
/// without sharing anything.
#[derive(Debug, Clone)]
pub struct Evaluator {
    functions: Arc<FunctionRegistry>,
}

impl Evaluator {
    /// Create an evaluator resolving calls through the given registry
    pub fn new(functions: Arc<FunctionRegistry>) -> Self {
        Self { functions }
    }

    /// Registry used to resolve call targets
    pub fn functions(&self) -> &Arc<FunctionRegistry> {
        &self.functions
    }

    /// Reduce an expression tree to a single integer
    ///
    /// The call cache lives exactly as long as this invocation: within it,
    /// every distinct combination of target, receiver, and argument values
    /// invokes the underlying function once; afterwards nothing is
    /// remembered.
    pub fn evaluate(&self, expression: &ExpressionNode) -> EvaluationResult<i64> {
        let mut cache = CallCache::new();
        let result = self.reduce(expression, &mut cache, 0);
        trace!("evaluation finished with {} memoized call(s)", cache.len());
        result
    }

    fn reduce(
        &self,
        node: &ExpressionNode,
        cache: &mut CallCache,
        depth: usize,
    ) -> EvaluationResult<i64> {
        if depth >= MAX_DEPTH {
            return Err(EvaluationError::RecursionLimitExceeded { limit: MAX_DEPTH });
        }

        match node {
            ExpressionNode::Constant(value) => Ok(*value),

            ExpressionNode::UnaryOp { op, operand } => {
                let value = self.reduce(operand, cache, depth + 1)?;
                Ok(match op {
                    UnaryOperator::Plus => value,
                    UnaryOperator::Negate => -value,
                })
            }

            ExpressionNode::BinaryOp(data) => {
                // Left before right keeps nested call order deterministic.
                let left = self.reduce(&data.left, cache, depth + 1)?;
                let right = self.reduce(&data.right, cache, depth + 1)?;
                Ok(match data.op {
                    BinaryOperator::Add => left + right,
                    BinaryOperator::Subtract => left - right,
                    BinaryOperator::Multiply => left * right,
                    // A zero divisor is the division primitive's fault to
                    // raise, not ours to intercept.
                    BinaryOperator::Divide => left / right,
                })
            }

            ExpressionNode::Call(data) => self.reduce_call(data, cache, depth),

            ExpressionNode::Variable(name) => {
                Err(EvaluationError::UnboundVariable { name: name.clone() })
            }
        }
    }

    fn reduce_call(
        &self,
        call: &CallData,
        cache: &mut CallCache,
        depth: usize,
    ) -> EvaluationResult<i64> {
        // Arguments reduce left to right before the key can exist, so calls
        // nested in arguments always run before the outer call is looked up.
        let mut values: SmallVec<[i64; 4]> = SmallVec::with_capacity(call.args.len());
        for arg in &call.args {
            values.push(self.reduce(arg, cache, depth + 1)?);
        }

        let key = CallKey::new(call.target.clone(), values);

        if let Some(cached) = cache.get(&key) {
            trace!("cache hit for {key}");
            return Ok(cached);
        }

        let function = self.functions.get(key.target()).ok_or_else(|| {
            EvaluationError::UnknownFunction {
                target: call.target.clone(),
            }
        })?;

        function.validate_args(key.args())?;
        debug!("invoking {key}");
        let result = function.invoke(key.args())?;

        // Only a returned value is stored; a failed invocation leaves the
        // entry absent so the same key would invoke again.
        cache.insert(key, result);
        Ok(result)
    }
}
