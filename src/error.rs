use thiserror::Error as ThisError;

/// Lexical errors.
///
/// Raised by the tokenizer when a character does not begin any token, or when
/// an integer literal cannot be represented exactly.
pub mod lex_error;
/// Runtime errors.
///
/// Raised while computing a result from a well-formed expression: division by
/// zero, or a result too large for an `f64`.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the evaluator when the token sequence does not match the
/// grammar: a wrong token in place of a required one, a missing factor, an
/// unclosed parenthesis, or tokens left over after a complete expression.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure of a single evaluation.
///
/// Every variant aborts the evaluation that raised it; no partial result is
/// kept.
#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`LexError`].
    #[error(transparent)]
    Lex(#[from] LexError),
    /// See [`SyntaxError`].
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// See [`RuntimeError`].
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input contains a character that starts no token.
    Lex,
    /// The tokens do not form an expression.
    Syntax,
    /// A division had a zero divisor.
    DivisionByZero,
    /// An intermediate result left the finite `f64` range.
    Overflow,
}

impl Error {
    /// Returns the coarse kind of this error.
    ///
    /// # Example
    /// ```
    /// use quotient::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
        }
    }

    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
