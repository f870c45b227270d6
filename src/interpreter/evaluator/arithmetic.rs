use crate::{error::RuntimeError, interpreter::lexer::TokenKind};

/// Arithmetic operators of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps `+` and `-` to their operators; `None` for any other kind.
    #[must_use]
    pub const fn additive(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Maps `*` and `/` to their operators; `None` for any other kind.
    #[must_use]
    pub const fn multiplicative(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// The token kind that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division is always real-valued, so `7 / 2` yields `3.5`. Results are
    /// always finite; neither `inf` nor `NaN` is ever returned.
    ///
    /// # Parameters
    /// - `left`: The accumulated left operand.
    /// - `right`: The right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by exactly zero
    /// and [`RuntimeError::Overflow`] when the result is not finite.
    ///
    /// # Example
    /// ```
    /// use quotient::{
    ///     error::RuntimeError, interpreter::evaluator::arithmetic::BinaryOperator,
    /// };
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 2.0, 2), Ok(3.5));
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 0.0, 2),
    ///            Err(RuntimeError::DivisionByZero { position: 2 }));
    /// assert_eq!(BinaryOperator::Mul.apply(f64::MAX, 2.0, 4),
    ///            Err(RuntimeError::Overflow { position: 4 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> Result<f64, RuntimeError> {
        let result = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left / right
            },
        };
        if !result.is_finite() {
            return Err(RuntimeError::Overflow { position });
        }
        Ok(result)
    }
}
