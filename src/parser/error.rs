//! Error types for expression parsing

use thiserror::Error;

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while turning source text into an expression tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source text is empty or all whitespace
    #[error("Empty expression")]
    EmptyExpression,

    /// A character outside the expression grammar
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Byte offset into the source
        position: usize,
    },

    /// An integer literal that does not fit the value range
    #[error("Invalid number literal '{literal}' at position {position}")]
    InvalidNumber {
        /// The literal as written
        literal: String,
        /// Byte offset into the source
        position: usize,
    },

    /// A token that cannot appear here
    #[error("Unexpected token at position {position}: {message}")]
    UnexpectedToken {
        /// What was found and what was expected
        message: String,
        /// Byte offset into the source
        position: usize,
    },

    /// The source ended before the expression was complete
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// What the parser was looking for
        expected: String,
    },

    /// A complete expression was parsed but input remains
    #[error("Unexpected trailing input at position {position}")]
    TrailingInput {
        /// Byte offset of the first unconsumed token
        position: usize,
    },

    /// A method call whose receiver is not a plain identifier
    #[error("Method call receiver must be an identifier at position {position}")]
    InvalidMethodReceiver {
        /// Byte offset of the `.`
        position: usize,
    },
}
