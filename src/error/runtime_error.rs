use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// An operation produced a value outside the finite `f64` range.
    #[error("Error at position {position}: Arithmetic overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
