use std::mem;

use tracing::{debug, trace};

use crate::{
    error::{Error, SyntaxError},
    interpreter::lexer::{Token, TokenKind, Tokenizer},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an [`Error`]
/// describing the first failure.
pub type EvalResult<T> = Result<T, Error>;

/// A one-shot recursive-descent evaluator.
///
/// Owns its [`Tokenizer`] and exactly one lookahead token. Tokens are pulled
/// on demand, never pushed back. An evaluator is consumed by
/// [`Evaluator::evaluate`], so each instance computes a single result.
pub struct Evaluator<'src> {
    tokenizer: Tokenizer<'src>,
    current:   Token,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator for `source` and reads its first lookahead token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be read.
    pub fn new(source: &'src str) -> EvalResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer, current })
    }

    /// Evaluates the whole source as one expression.
    ///
    /// The expression must be followed by end of input; leftover tokens are a
    /// syntax error.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or division-by-zero error.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::evaluator::core::Evaluator;
    ///
    /// let value = Evaluator::new("(2 + 3) * 4").and_then(Evaluator::evaluate);
    /// assert_eq!(value, Ok(20.0));
    /// ```
    pub fn evaluate(mut self) -> EvalResult<f64> {
        let outcome = self.expr().and_then(|value| {
                                     if self.current.kind == TokenKind::EndOfInput {
                                         Ok(value)
                                     } else {
                                         Err(SyntaxError::UnexpectedTrailingTokens {
                                             found:    self.current.kind,
                                             position: self.current.span.start,
                                         }.into())
                                     }
                                 });

        match &outcome {
            Ok(value) => debug!(source = self.tokenizer.source(), value, "evaluated expression"),
            Err(e) => debug!(source = self.tokenizer.source(), error = %e, "evaluation failed"),
        }
        outcome
    }

    /// The lookahead token.
    pub(super) const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the lookahead if it has the `expected` kind.
    ///
    /// The lookahead is replaced by the next token from the tokenizer and the
    /// consumed token is returned.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] on a kind mismatch, or the
    /// tokenizer's error when the replacement token cannot be read.
    pub(super) fn eat(&mut self, expected: TokenKind) -> EvalResult<Token> {
        if self.current.kind != expected {
            return Err(SyntaxError::UnexpectedToken { expected,
                                                      found: self.current.kind,
                                                      position: self.current.span.start }.into());
        }
        let next = self.tokenizer.next_token()?;
        let eaten = mem::replace(&mut self.current, next);
        trace!(token = %eaten, lookahead = %self.current, "ate token");
        Ok(eaten)
    }
}
