//! Pratt parser for arithmetic expressions
//!
//! Precedence-climbing over the tokenizer's output. All operator precedence
//! lives in a single table, so the main loop handles every binary operator
//! uniformly.

use smallvec::SmallVec;

use super::error::{ParseError, ParseResult};
use super::tokenizer::{Token, Tokenizer};
use crate::ast::{BinaryOperator, CallTarget, ExpressionNode, UnaryOperator};

/// Operator precedence levels (higher = tighter binding)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Additive operators (`+`, `-`)
    Additive = 1,
    /// Multiplicative operators (`*`, `/`)
    Multiplicative = 2,
    /// Unary operators (`+`, `-`)
    Unary = 3,
    /// Invocation (`.`, call arguments)
    Invocation = 4,
}

impl Precedence {
    /// Next higher precedence level, used for left-associative climbing
    pub(crate) const fn next_level(self) -> Self {
        match self {
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Invocation,
            Precedence::Invocation => Precedence::Invocation, // Already highest
        }
    }
}

fn get_precedence(token: &Token<'_>) -> Option<Precedence> {
    match token {
        Token::Plus | Token::Minus => Some(Precedence::Additive),
        Token::Multiply | Token::Divide => Some(Precedence::Multiplicative),
        _ => None,
    }
}

fn token_to_binary_op(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Multiply => Some(BinaryOperator::Multiply),
        Token::Divide => Some(BinaryOperator::Divide),
        _ => None,
    }
}

/// Parse an expression string into an AST
pub fn parse_expression(input: &str) -> ParseResult<ExpressionNode> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut parser = Parser::new(input);
    parser.advance()?;
    let expression = parser.parse_expression_with_precedence(Precedence::Additive)?;

    if parser.current().is_some() {
        return Err(ParseError::TrailingInput {
            position: parser.position(),
        });
    }

    Ok(expression)
}

struct Parser<'input> {
    tokenizer: Tokenizer<'input>,
    current_token: Option<Token<'input>>,
}

impl<'input> Parser<'input> {
    fn new(input: &'input str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            current_token: None,
        }
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.current_token = self.tokenizer.next_token()?;
        Ok(())
    }

    fn current(&self) -> Option<&Token<'input>> {
        self.current_token.as_ref()
    }

    fn position(&self) -> usize {
        self.tokenizer.position()
    }

    fn expect(&mut self, expected: Token<'input>) -> ParseResult<()> {
        match &self.current_token {
            Some(token) if std::mem::discriminant(token) == std::mem::discriminant(&expected) => {
                self.advance()
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                message: format!("expected {expected:?}, found {token:?}"),
                position: self.position(),
            }),
            None => Err(ParseError::UnexpectedEndOfInput {
                expected: format!("{expected:?}"),
            }),
        }
    }

    fn parse_expression_with_precedence(
        &mut self,
        min_precedence: Precedence,
    ) -> ParseResult<ExpressionNode> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.current() {
            let Some(precedence) = get_precedence(token) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }

            // Every token with a precedence maps to an operator.
            let Some(op) = token_to_binary_op(token) else {
                break;
            };
            self.advance()?;

            let right = self.parse_expression_with_precedence(precedence.next_level())?;
            left = ExpressionNode::binary_op(op, left, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<ExpressionNode> {
        match self.current() {
            Some(Token::Plus) => {
                self.advance()?;
                let operand = self.parse_unary()?;
                Ok(ExpressionNode::unary_op(UnaryOperator::Plus, operand))
            }
            Some(Token::Minus) => {
                self.advance()?;
                let operand = self.parse_unary()?;
                Ok(ExpressionNode::unary_op(UnaryOperator::Negate, operand))
            }
            _ => {
                let primary = self.parse_primary()?;
                self.parse_postfix(primary)
            }
        }
    }

    /// Parse primary expressions (literals, identifiers, parenthesized
    /// expressions), most common cases first
    fn parse_primary(&mut self) -> ParseResult<ExpressionNode> {
        match self.current() {
            Some(Token::Integer(value)) => {
                let value = *value;
                self.advance()?;
                Ok(ExpressionNode::constant(value))
            }

            Some(Token::Identifier(name)) => {
                let name = *name;
                self.advance()?;
                // An identifier followed by `(` is a free function call;
                // otherwise it stays a variable for the evaluator to reject.
                if let Some(Token::LeftParen) = self.current() {
                    self.parse_call(CallTarget::function(name))
                } else {
                    Ok(ExpressionNode::variable(name))
                }
            }

            Some(Token::LeftParen) => {
                self.advance()?;
                let expression = self.parse_expression_with_precedence(Precedence::Additive)?;
                self.expect(Token::RightParen)?;
                Ok(expression)
            }

            Some(token) => Err(ParseError::UnexpectedToken {
                message: format!("expected an expression, found {token:?}"),
                position: self.position(),
            }),

            None => Err(ParseError::UnexpectedEndOfInput {
                expected: "an expression".to_string(),
            }),
        }
    }

    /// Parse the method-call postfix (`receiver.name(args)`)
    fn parse_postfix(&mut self, left: ExpressionNode) -> ParseResult<ExpressionNode> {
        if let Some(Token::Dot) = self.current() {
            // Only a bare identifier can act as a receiver label.
            let receiver = match left {
                ExpressionNode::Variable(name) => name,
                _ => {
                    return Err(ParseError::InvalidMethodReceiver {
                        position: self.position(),
                    });
                }
            };
            self.advance()?;

            let name = match self.current() {
                Some(Token::Identifier(name)) => name.to_string(),
                Some(token) => {
                    return Err(ParseError::UnexpectedToken {
                        message: format!("expected method name after '.', found {token:?}"),
                        position: self.position(),
                    });
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        expected: "method name after '.'".to_string(),
                    });
                }
            };
            self.advance()?;

            return self.parse_call(CallTarget::method(receiver, name));
        }

        Ok(left)
    }

    fn parse_call(&mut self, target: CallTarget) -> ParseResult<ExpressionNode> {
        self.expect(Token::LeftParen)?;

        let mut args: SmallVec<[ExpressionNode; 4]> = SmallVec::new();

        // Handle empty argument list
        if let Some(Token::RightParen) = self.current() {
            self.advance()?;
            return Ok(ExpressionNode::call(target, args));
        }

        loop {
            args.push(self.parse_expression_with_precedence(Precedence::Additive)?);

            match self.current() {
                Some(Token::Comma) => {
                    self.advance()?;
                }
                Some(Token::RightParen) => {
                    self.advance()?;
                    break;
                }
                Some(token) => {
                    return Err(ParseError::UnexpectedToken {
                        message: format!("expected ',' or ')' in call arguments, found {token:?}"),
                        position: self.position(),
                    });
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        expected: "',' or ')' in call arguments".to_string(),
                    });
                }
            }
        }

        Ok(ExpressionNode::call(target, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_left_associative_additive_chain() {
        let expr = parse_expression("1 - 2 + 3").unwrap();
        assert_eq!(
            expr,
            ExpressionNode::binary_op(
                BinaryOperator::Add,
                ExpressionNode::binary_op(
                    BinaryOperator::Subtract,
                    ExpressionNode::constant(1),
                    ExpressionNode::constant(2),
                ),
                ExpressionNode::constant(3),
            )
        );
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_expression("2 + 3 * 4").unwrap();
        assert_eq!(
            expr,
            ExpressionNode::binary_op(
                BinaryOperator::Add,
                ExpressionNode::constant(2),
                ExpressionNode::binary_op(
                    BinaryOperator::Multiply,
                    ExpressionNode::constant(3),
                    ExpressionNode::constant(4),
                ),
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse_expression("(2 + 3) * 4").unwrap();
        assert_eq!(
            expr,
            ExpressionNode::binary_op(
                BinaryOperator::Multiply,
                ExpressionNode::binary_op(
                    BinaryOperator::Add,
                    ExpressionNode::constant(2),
                    ExpressionNode::constant(3),
                ),
                ExpressionNode::constant(4),
            )
        );
    }

    #[test]
    fn unary_minus_binds_tighter_than_multiplication() {
        let expr = parse_expression("-2 * 3").unwrap();
        assert_eq!(
            expr,
            ExpressionNode::binary_op(
                BinaryOperator::Multiply,
                ExpressionNode::unary_op(UnaryOperator::Negate, ExpressionNode::constant(2)),
                ExpressionNode::constant(3),
            )
        );
    }

    #[test]
    fn parses_free_function_calls() {
        let expr = parse_expression("f(1, 2 + 3)").unwrap();
        assert_eq!(
            expr,
            ExpressionNode::function_call(
                "f",
                vec![
                    ExpressionNode::constant(1),
                    ExpressionNode::binary_op(
                        BinaryOperator::Add,
                        ExpressionNode::constant(2),
                        ExpressionNode::constant(3),
                    ),
                ],
            )
        );
    }

    #[test]
    fn parses_nullary_and_method_calls() {
        assert_eq!(
            parse_expression("A()").unwrap(),
            ExpressionNode::function_call("A", Vec::new()),
        );
        assert_eq!(
            parse_expression("counter.next()").unwrap(),
            ExpressionNode::method_call("counter", "next", Vec::new()),
        );
    }

    #[test]
    fn bare_identifier_parses_as_variable() {
        assert_eq!(
            parse_expression("x + 1").unwrap(),
            ExpressionNode::binary_op(
                BinaryOperator::Add,
                ExpressionNode::variable("x"),
                ExpressionNode::constant(1),
            )
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_expression(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse_expression("   "), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(matches!(
            parse_expression("1 2"),
            Err(ParseError::TrailingInput { .. })
        ));
    }

    #[test]
    fn rejects_non_identifier_method_receiver() {
        assert!(matches!(
            parse_expression("f().g()"),
            Err(ParseError::InvalidMethodReceiver { .. })
        ));
        assert!(matches!(
            parse_expression("5.g()"),
            Err(ParseError::InvalidMethodReceiver { .. })
        ));
    }

    #[test]
    fn rejects_unterminated_call() {
        assert!(matches!(
            parse_expression("f(1,"),
            Err(ParseError::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn rejects_dangling_operator() {
        assert!(matches!(
            parse_expression("2 +"),
            Err(ParseError::UnexpectedEndOfInput { .. })
        ));
    }
}
