use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::{
            arithmetic::BinaryOperator,
            core::{EvalResult, Evaluator},
        },
        lexer::TokenKind,
    },
};

impl Evaluator<'_> {
    /// Evaluates addition and subtraction.
    ///
    /// Left-associative: `10 - 2 - 3` is `(10 - 2) - 3`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub(super) fn expr(&mut self) -> EvalResult<f64> {
        let mut result = self.term()?;
        while let Some(op) = BinaryOperator::additive(self.current().kind) {
            let operator = self.eat(op.token_kind())?;
            let right = self.term()?;
            result = op.apply(result, right, operator.span.start)?;
        }
        Ok(result)
    }

    /// Evaluates multiplication and division.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(super) fn term(&mut self) -> EvalResult<f64> {
        let mut result = self.factor()?;
        while let Some(op) = BinaryOperator::multiplicative(self.current().kind) {
            let operator = self.eat(op.token_kind())?;
            let right = self.factor()?;
            result = op.apply(result, right, operator.span.start)?;
        }
        Ok(result)
    }

    /// Evaluates an integer literal or a parenthesized expression.
    ///
    /// The rule is: `factor := INTEGER | "(" expr ")"`
    ///
    /// Nesting depth is bounded only by the call stack.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn factor(&mut self) -> EvalResult<f64> {
        match (self.current().kind, self.current().value) {
            // The lexer only admits literals up to `MAX_SAFE_U64_INT`.
            (TokenKind::Integer, Some(literal)) => {
                self.eat(TokenKind::Integer)?;
                Ok(literal as f64)
            },
            (TokenKind::LParen, _) => {
                self.eat(TokenKind::LParen)?;
                let result = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(result)
            },
            (found, _) => Err(SyntaxError::ExpectedFactor { found,
                                                            position: self.current().span.start }.into()),
        }
    }
}
