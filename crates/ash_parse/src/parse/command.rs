use ash_ast::{Command, RedirectMode};

use crate::{token::TokenKind, ParseError};

use super::{cursor::TokenCursor, utils::empty_command, ParseResult};

/// Parses a [`Command`]: one or more words, optionally followed by a single redirection.
pub fn parse_command(tokens: &mut TokenCursor) -> ParseResult<Command> {
    let mut command = Command::new();
    while let Some(word) = tokens.next_if_eq(TokenKind::Word) {
        command.arg(word.lexeme.as_deref().unwrap_or_default());
    }

    if command.arguments.is_empty() {
        return Err(empty_command(tokens));
    }

    if let Some(mode) = parse_redirect_operator(tokens) {
        let target = tokens
            .next_if_eq(TokenKind::Word)
            .ok_or_else(|| ParseError::MissingRedirectTarget(tokens.peek().clone()))?;
        command.set_redirection(mode, target.lexeme.as_deref());

        // The redirection must be the final construct of a command.
        let next = tokens.peek();
        match next.kind {
            TokenKind::RedirOut | TokenKind::RedirAppend => {
                return Err(ParseError::DuplicateRedirection(next.clone()))
            }
            TokenKind::Word => return Err(ParseError::TrailingWord(next.clone())),
            _ => (),
        }
    }

    Ok(command)
}

/// Advances past a redirection operator and returns its mode, if the next token is one.
fn parse_redirect_operator(tokens: &mut TokenCursor) -> Option<RedirectMode> {
    if tokens.next_if_eq(TokenKind::RedirOut).is_some() {
        Some(RedirectMode::Truncate)
    } else if tokens.next_if_eq(TokenKind::RedirAppend).is_some() {
        Some(RedirectMode::Append)
    } else {
        None
    }
}
