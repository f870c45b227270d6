use std::{fmt, ops::Range};

use logos::Logos;
use tracing::trace;

use crate::{error::LexError, util::num::parse_safe_integer};

/// Classifies a lexical token of the source input.
///
/// The derived lexer recognizes every kind except `EndOfInput`, which the
/// [`Tokenizer`] produces itself once the source is exhausted. Whitespace is
/// skipped and never becomes a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// The end of the source.
    EndOfInput,
}

impl TokenKind {
    /// Name used by the token dump, e.g. `PLUS`, `EOF`, or the bracket itself
    /// for parentheses.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::EndOfInput => "EOF",
        }
    }

    /// The single source character of operator and parenthesis kinds.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Integer | Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (_, Some(symbol)) => write!(f, "'{symbol}'"),
            (Self::Integer, None) => write!(f, "integer"),
            _ => write!(f, "end of input"),
        }
    }
}

/// A classified token together with the source span it was read from.
///
/// `value` is present only for [`TokenKind::Integer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind:  TokenKind,
    /// The literal value of an integer token.
    pub value: Option<u64>,
    /// Byte range of the token in the source. Empty for `EndOfInput`.
    pub span:  Range<usize>,
}

impl Token {
    /// Creates the end-of-input token for a source of length `len`.
    #[must_use]
    pub const fn end_of_input(len: usize) -> Self {
        Self { kind:  TokenKind::EndOfInput,
               value: None,
               span:  len..len, }
    }
}

/// Renders the diagnostic dump format: `Token(INTEGER, 3)`,
/// `Token(PLUS, '+')`, `Token((, '(')` or `Token(EOF, None)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match (self.value, self.kind.symbol()) {
            (Some(value), _) => write!(f, "Token({name}, {value})"),
            (None, Some(symbol)) => write!(f, "Token({name}, '{symbol}')"),
            (None, None) => write!(f, "Token({name}, None)"),
        }
    }
}

/// Pull-based cursor over the source text.
///
/// Each call to [`Tokenizer::next_token`] reads exactly one token, advancing
/// monotonically. Once the input is exhausted every further call returns an
/// `EndOfInput` token.
///
/// As an [`Iterator`] it yields the tokens before `EndOfInput` and stops after
/// the first lexical error.
pub struct Tokenizer<'src> {
    lexer:     logos::Lexer<'src, TokenKind>,
    exhausted: bool,
    failed:    bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     TokenKind::lexer(source),
               exhausted: false,
               failed:    false, }
    }

    /// The source text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Current cursor position, a byte offset in `[0, source.len()]`.
    ///
    /// Equals `source.len()` once end of input has been reached.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.exhausted {
            self.source().len()
        } else {
            self.lexer.span().end
        }
    }

    /// Reads the next token.
    ///
    /// # Errors
    /// Returns [`LexError::UnrecognizedCharacter`] for a character that starts
    /// no token and [`LexError::LiteralTooLarge`] for an integer that cannot
    /// be represented exactly.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::lexer::{TokenKind, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new("12 *");
    /// let token = tokenizer.next_token().unwrap();
    /// assert_eq!((token.kind, token.value), (TokenKind::Integer, Some(12)));
    /// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Star);
    /// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let len = self.source().len();
        if self.exhausted {
            return Ok(Token::end_of_input(len));
        }

        let token = match self.lexer.next() {
            None => {
                self.exhausted = true;
                Token::end_of_input(len)
            },
            Some(Ok(TokenKind::Integer)) => {
                let literal = self.lexer.slice();
                let span = self.lexer.span();
                let value =
                    parse_safe_integer(literal).ok_or_else(|| LexError::LiteralTooLarge {
                                                   literal:  literal.to_string(),
                                                   position: span.start,
                                               })?;
                Token { kind: TokenKind::Integer,
                        value: Some(value),
                        span }
            },
            Some(Ok(kind)) => Token { kind,
                                      value: None,
                                      span: self.lexer.span() },
            Some(Err(())) => {
                let position = self.lexer.span().start;
                let character = self.source()
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter { character, position });
            },
        };

        trace!(token = %token, start = token.span.start, "lexed token");
        Ok(token)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            },
        }
    }
}
