//! Zero-copy tokenizer for arithmetic expressions
//!
//! Tokens borrow identifier text from the input; no allocation happens
//! during tokenization.

use super::error::{ParseError, ParseResult};

/// A single lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'input> {
    /// Integer literal (non-negative; leading `-` is parsed as unary negation)
    Integer(i64),
    /// Identifier (function, receiver, or variable name)
    Identifier(&'input str),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
}

/// Streaming tokenizer over expression source text
pub struct Tokenizer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Tokenizer<'input> {
    /// Create a tokenizer over the given source
    pub fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the source
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Produce the next token, or `None` at end of input
    pub fn next_token(&mut self) -> ParseResult<Option<Token<'input>>> {
        self.skip_whitespace();

        let bytes = self.input.as_bytes();
        let Some(&byte) = bytes.get(self.pos) else {
            return Ok(None);
        };

        let token = match byte {
            b'+' => {
                self.pos += 1;
                Token::Plus
            }
            b'-' => {
                self.pos += 1;
                Token::Minus
            }
            b'*' => {
                self.pos += 1;
                Token::Multiply
            }
            b'/' => {
                self.pos += 1;
                Token::Divide
            }
            b'(' => {
                self.pos += 1;
                Token::LeftParen
            }
            b')' => {
                self.pos += 1;
                Token::RightParen
            }
            b',' => {
                self.pos += 1;
                Token::Comma
            }
            b'.' => {
                self.pos += 1;
                Token::Dot
            }
            b'0'..=b'9' => self.read_integer()?,
            b if b.is_ascii_alphabetic() || b == b'_' => self.read_identifier(),
            _ => {
                let ch = self.input[self.pos..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnexpectedCharacter {
                    ch,
                    position: self.pos,
                });
            }
        };

        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn read_integer(&mut self) -> ParseResult<Token<'input>> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if byte.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        let value = literal
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidNumber {
                literal: literal.to_string(),
                position: start,
            })?;
        Ok(Token::Integer(value))
    }

    fn read_identifier(&mut self) -> Token<'input> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if byte.is_ascii_alphanumeric() || byte == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        Token::Identifier(&self.input[start..self.pos])
    }
}
