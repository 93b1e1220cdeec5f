use std::{iter::Peekable, vec::IntoIter};

use crate::token::{Span, Token, TokenKind};

/// A cursor for traversing through a peekable [`Token`] iterator.
#[derive(Clone)]
pub struct TokenCursor {
    /// Tokens that the cursor traverses.
    tokens: Peekable<IntoIter<Token>>,

    /// The token representing the cursor's EOF.
    /// This token is returned upon, and after, consuming all tokens.
    eof_token: Token,
}

impl TokenCursor {
    /// Constructs a new cursor for a predefined set of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map_or(0, |token| token.span.end);
        Self {
            eof_token: Token::new(TokenKind::Eof, Span::new(end, end + 1)),
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Returns a reference to the next [`Token`] without advancing the cursor.
    pub fn peek(&mut self) -> &Token {
        self.tokens.peek().unwrap_or(&self.eof_token)
    }

    /// Returns the next [`Token`] while advancing the cursor.
    pub fn next(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof_token.clone())
    }

    /// Advances the cursor past the next token if it is of a given kind.
    pub fn next_if_eq(&mut self, kind: TokenKind) -> Option<Token> {
        self.tokens.next_if(|token| token.kind == kind)
    }
}
