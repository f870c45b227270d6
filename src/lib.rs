//! # quotient
//!
//! quotient evaluates arithmetic expressions over non-negative integer
//! literals with `+`, `-`, `*`, `/` and parentheses. Multiplication and
//! division bind tighter than addition and subtraction, operators of equal
//! precedence associate to the left, and division always yields a real
//! quotient.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]

use crate::{
    error::{Error, LexError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Token, Tokenizer},
    },
};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines the three error families an evaluation can fail with
/// and the crate-level [`error::Error`] that wraps them. Every error carries
/// the byte offset of the offending input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, arithmetic).
/// - Renders human-readable messages identifying the failure kind.
pub mod error;
/// Ties the tokenizer and the evaluator together.
///
/// # Responsibilities
/// - Provides the pull-based tokenizer.
/// - Provides the recursive-descent evaluator built on top of it.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates an arithmetic expression and returns its value.
///
/// Each call owns an independent tokenizer and evaluator, so calls on
/// different threads never share state.
///
/// # Errors
/// Returns [`Error::Lex`] for a character that starts no token,
/// [`Error::Syntax`] when the tokens do not form exactly one expression, and
/// [`Error::Runtime`] for division by zero or for an intermediate result
/// outside the finite `f64` range. A successful result is never `inf` or
/// `NaN`.
///
/// # Examples
/// ```
/// use quotient::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("7 / 2"), Ok(3.5));
///
/// assert_eq!(evaluate("3 + )").unwrap_err().kind(), ErrorKind::Syntax);
/// assert_eq!(evaluate("3 @ 4").unwrap_err().kind(), ErrorKind::Lex);
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Evaluator::new(source)?.evaluate()
}

/// Tokenizes the whole source, excluding the final end-of-input token.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Examples
/// ```
/// use quotient::tokenize;
///
/// let tokens = tokenize("4 - 5 / 7").unwrap();
/// let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(dump[0], "Token(INTEGER, 4)");
/// assert_eq!(dump[1], "Token(MINUS, '-')");
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}
