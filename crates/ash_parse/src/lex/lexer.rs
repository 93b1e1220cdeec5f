use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;

use crate::error::LexError;
use crate::lex::input::{is_quote, is_whitespace, is_word_delimiter};
use crate::token::{Span, Token, TokenKind};

/// Character representing the end of input (also known as end of file = EOF).
const EOF_CHAR: char = '\0';

/// Quote character in which backslash escapes are decoded.
const ESCAPING_QUOTE: char = '"';

type Input<'a> = Peekable<CharIndices<'a>>;
type LexResult = Result<Token, LexError>;

/// Lexes some input `str` and returns all tokens within the input.
///
/// On success, the final token is always a single [`TokenKind::Eof`].
///
/// # Errors
///
/// Returns a [`LexError`] if a quoted string is never closed. The error retains all tokens lexed
/// before the failure followed by one [`TokenKind::Error`] token.
pub fn lex(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                tokens.push(token);
                break;
            }
            Ok(token) => tokens.push(token),
            Err(error) => {
                tokens.push(lexer.error_token());
                trace!("lexing failed after {} tokens: {}", tokens.len(), error);
                return Err(error.with_tokens(tokens));
            }
        }
    }

    trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// A lexer takes some `str` input and splits it into tokens.
///
/// Input ends at the first NUL character, if any.
pub struct Lexer<'a> {
    src: &'a str,
    input: Input<'a>,
    input_length: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        let src = src.split(EOF_CHAR).next().unwrap_or_default();
        Self {
            src,
            input: src.char_indices().peekable(),
            input_length: src.len(),
        }
    }

    /// Advances the cursor and returns the next token.
    ///
    /// Whitespace between tokens is skipped. Once all input is consumed, every call returns a
    /// [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> LexResult {
        self.eat_while(is_whitespace);

        let default = (self.input_length, EOF_CHAR);
        match self.input.peek().unwrap_or(&default).1 {
            ';' => Ok(self.eat_char(TokenKind::Semicolon)),
            '|' => Ok(self.eat_char(TokenKind::Pipe)),
            '>' => Ok(self.eat_redirect()),
            c if is_quote(&c) => self.eat_quoted(c),
            EOF_CHAR => Ok(self.eof_token()),
            _ => Ok(self.eat_word()),
        }
    }

    /// Returns a token marking a lexical error at the current position.
    pub fn error_token(&mut self) -> Token {
        let position = self.position();
        Token::new(TokenKind::Error, Span::new(position, position + 1))
    }

    /// Returns a token denoting the end of input (commonly known as EOF = end of file).
    fn eof_token(&self) -> Token {
        Token::new(
            TokenKind::Eof,
            Span::new(self.input_length, self.input_length + 1),
        )
    }

    /// Returns the byte offset of the next character.
    fn position(&mut self) -> usize {
        self.input
            .peek()
            .map_or(self.input_length, |&(index, _)| index)
    }

    /// Eats a single character operator.
    fn eat_char(&mut self, kind: TokenKind) -> Token {
        let start = self.position();
        self.input.next();
        Token::new(kind, Span::new(start, start + 1))
    }

    /// Eats [`TokenKind::RedirAppend`] ">>" or [`TokenKind::RedirOut`] ">".
    fn eat_redirect(&mut self) -> Token {
        let first = self.eat_char(TokenKind::RedirOut);
        if self.input.next_if(|&(_, c)| c == '>').is_some() {
            Token::new(
                TokenKind::RedirAppend,
                Span::new(first.span.start, first.span.end + 1),
            )
        } else {
            first
        }
    }

    /// Eats a quoted word, decoding escapes within double quotes.
    ///
    /// Within double quotes, a backslash is always dropped and the character following it is
    /// taken literally. Single quoted words are taken verbatim.
    fn eat_quoted(&mut self, delimiter: char) -> LexResult {
        let start = self.position();
        self.input.next();

        let mut contents = String::new();
        loop {
            match self.input.next() {
                Some((_, c)) if c == delimiter => break,
                Some((_, '\\')) if delimiter == ESCAPING_QUOTE => match self.input.next() {
                    Some((_, escaped)) => contents.push(escaped),
                    None => return Err(LexError::unterminated_string(start)),
                },
                Some((_, c)) => contents.push(c),
                None => return Err(LexError::unterminated_string(start)),
            }
        }

        Ok(Token::word(contents, Span::new(start, self.position())))
    }

    /// Eats a bare word.
    fn eat_word(&mut self) -> Token {
        let span = self.eat_while(|c| !is_word_delimiter(c));
        debug_assert!(!span.is_empty(), "bare words are never empty");
        Token::word(&self.src[span.start..span.end], span)
    }

    /// Consumes the input while a predicate holds and returns a [`Span`] denoting the consumed
    /// character indices in the original input.
    fn eat_while(&mut self, mut predicate: impl FnMut(&char) -> bool) -> Span {
        let start = self.position();
        let mut end = start;
        while let Some((i, c)) = self.input.next_if(|(_, c)| predicate(c)) {
            end = i + c.len_utf8();
        }

        Span::new(start, end)
    }
}
