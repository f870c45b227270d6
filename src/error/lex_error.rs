use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning text into tokens.
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Error at position {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// An integer literal too large to be represented exactly.
    #[error("Error at position {position}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal.
        literal:  String,
        /// Byte offset of the first digit in the source.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}
