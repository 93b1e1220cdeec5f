use std::fmt::Display;

/// A byte range in the lexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "Span start {} cannot come after end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Returns `true` if the span covers no input.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare or quoted word.
    Word,
    /// "|"
    Pipe,
    /// ";"
    Semicolon,
    /// ">"
    RedirOut,
    /// ">>"
    RedirAppend,
    /// Marks the position where lexing failed.
    Error,
    /// End of input.
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Word => "WORD",
            TokenKind::Pipe => "PIPE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::RedirOut => "REDIRECT OUT",
            TokenKind::RedirAppend => "REDIRECT APPEND",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A unit of input identified through lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,

    /// Decoded text. Only present for [`TokenKind::Word`].
    pub lexeme: Option<String>,

    /// Token position in the input.
    pub span: Span,
}

impl Token {
    /// Constructs a new token without a lexeme.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            lexeme: None,
            span,
        }
    }

    /// Constructs a new word token.
    pub fn word<S: Into<String>>(lexeme: S, span: Span) -> Self {
        Self {
            kind: TokenKind::Word,
            lexeme: Some(lexeme.into()),
            span,
        }
    }

    /// Returns the byte offset at which the token starts.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

/// Formats a token as `<position> | <KIND>`, or `<position> | WORD '<lexeme>'` for words.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.lexeme) {
            (TokenKind::Word, Some(lexeme)) => {
                write!(f, "{} | {} '{}'", self.position(), self.kind, lexeme)
            }
            _ => write!(f, "{} | {}", self.position(), self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_words_with_lexeme() {
        let token = Token::word("out.txt", Span::new(4, 11));
        assert_eq!(token.to_string(), "4 | WORD 'out.txt'");
    }

    #[test]
    fn it_formats_operators() {
        let cases = [
            (TokenKind::Pipe, "2 | PIPE"),
            (TokenKind::Semicolon, "2 | SEMICOLON"),
            (TokenKind::RedirOut, "2 | REDIRECT OUT"),
            (TokenKind::RedirAppend, "2 | REDIRECT APPEND"),
            (TokenKind::Error, "2 | ERROR"),
            (TokenKind::Eof, "2 | EOF"),
        ];

        for (kind, expected) in cases {
            assert_eq!(Token::new(kind, Span::new(2, 3)).to_string(), expected);
        }
    }
}
