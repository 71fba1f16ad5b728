//! Expression AST node definitions

use std::fmt;

use smallvec::SmallVec;

use crate::ast::operator::{BinaryOperator, UnaryOperator};

/// AST representation of an arithmetic expression
///
/// Immutable value type; large variants are boxed to keep the enum small.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNode {
    /// Integer literal
    Constant(i64),

    /// Unary operation (`+x`, `-x`)
    UnaryOp {
        /// The operator
        op: UnaryOperator,
        /// The operand
        operand: Box<ExpressionNode>,
    },

    /// Binary operation (boxed for size optimization)
    BinaryOp(Box<BinaryOpData>),

    /// Call to a registered function (boxed for size optimization)
    Call(Box<CallData>),

    /// Unresolved identifier; representable so a parse can surface it, but
    /// never evaluable
    Variable(String),
}

/// Binary operation data (separate struct to optimize enum size)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOpData {
    /// The operator
    pub op: BinaryOperator,
    /// Left operand, always reduced first
    pub left: ExpressionNode,
    /// Right operand
    pub right: ExpressionNode,
}

/// Function call data (separate struct to optimize enum size)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallData {
    /// The call target, resolved through the registry at evaluation time
    pub target: CallTarget,
    /// Argument expressions (SmallVec for the common case of 0-4 args)
    pub args: SmallVec<[ExpressionNode; 4]>,
}

/// Identity of a callable: optional receiver label plus function name
///
/// Used as the registry lookup key and as the function-identity component of
/// the memoization key. Two targets denote the same function exactly when
/// both components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallTarget {
    /// Receiver instance label for bound methods, `None` for free functions
    pub receiver: Option<String>,
    /// Function name
    pub name: String,
}

impl CallTarget {
    /// Target of a free function
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            receiver: None,
            name: name.into(),
        }
    }

    /// Target of a method bound to a named receiver instance
    pub fn method(receiver: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            receiver: Some(receiver.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.receiver {
            Some(receiver) => write!(f, "{receiver}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl ExpressionNode {
    /// Create a constant expression
    pub fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// Create a unary operation expression
    pub fn unary_op(op: UnaryOperator, operand: ExpressionNode) -> Self {
        Self::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    /// Create a binary operation expression
    pub fn binary_op(op: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::BinaryOp(Box::new(BinaryOpData { op, left, right }))
    }

    /// Create a call expression for an already-built target
    pub fn call(target: CallTarget, args: impl Into<SmallVec<[ExpressionNode; 4]>>) -> Self {
        Self::Call(Box::new(CallData {
            target,
            args: args.into(),
        }))
    }

    /// Create a free function call expression
    pub fn function_call(
        name: impl Into<String>,
        args: impl Into<SmallVec<[ExpressionNode; 4]>>,
    ) -> Self {
        Self::call(CallTarget::function(name), args)
    }

    /// Create a bound method call expression
    pub fn method_call(
        receiver: impl Into<String>,
        name: impl Into<String>,
        args: impl Into<SmallVec<[ExpressionNode; 4]>>,
    ) -> Self {
        Self::call(CallTarget::method(receiver, name), args)
    }

    /// Create a variable expression
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Constant(value) => write!(f, "{value}"),
            ExpressionNode::UnaryOp { op, operand } => {
                if matches!(**operand, ExpressionNode::BinaryOp(_)) {
                    write!(f, "{}({})", op.symbol(), operand)
                } else {
                    write!(f, "{}{}", op.symbol(), operand)
                }
            }
            ExpressionNode::BinaryOp(data) => {
                write!(f, "({} {} {})", data.left, data.op.symbol(), data.right)
            }
            ExpressionNode::Call(data) => {
                write!(f, "{}(", data.target)?;
                for (index, arg) in data.args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            ExpressionNode::Variable(name) => f.write_str(name),
        }
    }
}
