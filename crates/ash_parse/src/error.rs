use thiserror::Error;

use crate::token::{Span, Token};

/// Error returned when input cannot be split into tokens.
///
/// Lexing always produces a token sequence. When it fails, the tokens that were lexed before the
/// failure are kept, terminated by a single [`crate::TokenKind::Error`] token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unterminated string starting at position {start}")]
pub struct LexError {
    /// Offset of the opening quote.
    start: usize,

    /// Tokens lexed up to and including the error token.
    tokens: Vec<Token>,
}

impl LexError {
    pub(crate) fn unterminated_string(start: usize) -> Self {
        Self {
            start,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Returns the byte offset of the opening quote.
    pub fn position(&self) -> usize {
        self.start
    }

    /// Returns the tokens lexed before the error, ending with the error token.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        "this quote is never closed"
    }

    /// Returns the positional span in which the error resides.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.start + 1)
    }
}

/// Parse errors are returned when a token sequence does not match the grammar.
///
/// Each error holds the offending token. No partial syntax tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input could not be lexed.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A command without words, such as a leading pipe or two consecutive separators.
    #[error("expected a command before {} at position {}", .0.kind, .0.position())]
    EmptyCommand(Token),

    /// A redirection operator that is not followed by a file name.
    #[error("expected a file name at position {}, found {}", .0.position(), .0.kind)]
    MissingRedirectTarget(Token),

    /// A second redirection on a single command.
    #[error("a command may only redirect its output once (position {})", .0.position())]
    DuplicateRedirection(Token),

    /// A word directly following a redirection target.
    #[error("unexpected word '{}' after redirection at position {}", .0.lexeme.as_deref().unwrap_or_default(), .0.position())]
    TrailingWord(Token),

    /// Any other token that does not fit the grammar.
    #[error("unexpected token {} at position {}", .0.kind, .0.position())]
    UnexpectedToken(Token),
}

impl ParseError {
    /// Returns a help text associated with the error.
    pub fn help(&self) -> &str {
        match self {
            ParseError::Lex(error) => error.help(),
            ParseError::EmptyCommand(_) => "a command is missing here",
            ParseError::MissingRedirectTarget(_) => "a file name is expected here",
            ParseError::DuplicateRedirection(_) => "output is already redirected",
            ParseError::TrailingWord(_) => "separate commands with ';' or '|'",
            ParseError::UnexpectedToken(_) => "this token is unexpected here",
        }
    }

    /// Returns the positional span in which the error resides.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(error) => error.span(),
            ParseError::EmptyCommand(token)
            | ParseError::MissingRedirectTarget(token)
            | ParseError::DuplicateRedirection(token)
            | ParseError::TrailingWord(token)
            | ParseError::UnexpectedToken(token) => token.span,
        }
    }

    /// Returns the byte offset at which the error was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(error) => error.position(),
            _ => self.span().start,
        }
    }
}
