use ash_ast::Sequence;

use crate::token::TokenKind;

use super::{
    cursor::TokenCursor,
    pipeline::parse_pipeline,
    utils::{only_separators, unexpected_token},
    ParseResult,
};

/// Parses a [`Sequence`] of pipelines separated by semicolons.
///
/// Input consisting only of separators yields an empty sequence. Otherwise, every separator must
/// follow a pipeline. A single trailing separator is allowed.
pub fn parse_sequence(tokens: &mut TokenCursor) -> ParseResult<Sequence> {
    let mut sequence = Sequence::new();

    if only_separators(tokens.clone()) {
        return Ok(sequence);
    }

    loop {
        sequence.pipeline(parse_pipeline(tokens)?);

        match tokens.peek().kind {
            TokenKind::Semicolon => {
                tokens.next();
                if tokens.next_if_eq(TokenKind::Eof).is_some() {
                    break;
                }
            }
            TokenKind::Eof => {
                tokens.next();
                break;
            }
            _ => return Err(unexpected_token(tokens)),
        }
    }

    Ok(sequence)
}
