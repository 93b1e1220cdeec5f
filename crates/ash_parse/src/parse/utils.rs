use crate::{token::TokenKind, ParseError};

use super::cursor::TokenCursor;

/// Returns a [`ParseError::UnexpectedToken`] around a copy of the next token.
pub fn unexpected_token(tokens: &mut TokenCursor) -> ParseError {
    ParseError::UnexpectedToken(tokens.peek().clone())
}

/// Returns an error describing a command slot that holds no words.
///
/// Operators and end of input in place of a command indicate an empty command. Any other token
/// is unexpected.
pub fn empty_command(tokens: &mut TokenCursor) -> ParseError {
    let token = tokens.peek().clone();
    match token.kind {
        TokenKind::Pipe
        | TokenKind::Semicolon
        | TokenKind::RedirOut
        | TokenKind::RedirAppend
        | TokenKind::Eof => ParseError::EmptyCommand(token),
        TokenKind::Word | TokenKind::Error => ParseError::UnexpectedToken(token),
    }
}

/// Returns `true` if the remaining tokens are separators followed by the end of input.
pub fn only_separators(mut tokens: TokenCursor) -> bool {
    while tokens.next_if_eq(TokenKind::Semicolon).is_some() {}
    tokens.peek().kind == TokenKind::Eof
}
