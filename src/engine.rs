//! Engine - the main entry point for parsing and evaluating expressions

use std::sync::Arc;

use crate::ast::ExpressionNode;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser::parse_expression;
use crate::registry::{FunctionRegistry, create_standard_registry};

/// Main engine coupling a function registry with parse-then-evaluate
#[derive(Debug, Clone)]
pub struct Engine {
    evaluator: Evaluator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(create_standard_registry())
    }
}

impl Engine {
    /// Create an engine over the given function registry
    pub fn new(functions: FunctionRegistry) -> Self {
        Self {
            evaluator: Evaluator::new(Arc::new(functions)),
        }
    }

    /// Create an engine sharing an existing registry handle
    pub fn with_registry(functions: Arc<FunctionRegistry>) -> Self {
        Self {
            evaluator: Evaluator::new(functions),
        }
    }

    /// Parse source text into an expression tree
    ///
    /// Blank input is rejected here, before any evaluation is attempted.
    pub fn parse(&self, source: &str) -> Result<ExpressionNode> {
        Ok(parse_expression(source)?)
    }

    /// Parse and evaluate source text
    ///
    /// Every call runs in its own session: a function memoized during one
    /// call is invoked again by the next.
    pub fn evaluate(&self, source: &str) -> Result<i64> {
        let expression = self.parse(source)?;
        Ok(self.evaluator.evaluate(&expression)?)
    }

    /// Evaluate an already-parsed expression tree
    pub fn evaluate_expression(&self, expression: &ExpressionNode) -> Result<i64> {
        Ok(self.evaluator.evaluate(expression)?)
    }

    /// The underlying evaluator
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}
