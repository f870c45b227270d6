use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors raised when the token sequence does not match the
/// grammar.
pub enum SyntaxError {
    /// A specific token kind was required but another one was found.
    #[error("Error at position {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// A factor (an integer or a parenthesized expression) was required.
    #[error("Error at position {position}: Expected an integer or '(', found {found}.")]
    ExpectedFactor {
        /// The token kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("Error at position {position}: Extra tokens after expression, starting with {found}.")]
    UnexpectedTrailingTokens {
        /// The first leftover token kind.
        found:    TokenKind,
        /// Byte offset of the first leftover token.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedFactor { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}
