use ash_ast::Pipeline;

use crate::token::TokenKind;

use super::{command::parse_command, cursor::TokenCursor, ParseResult};

/// Parses a [`Pipeline`] of one or more commands separated by pipes.
pub fn parse_pipeline(tokens: &mut TokenCursor) -> ParseResult<Pipeline> {
    let mut pipeline = Pipeline::new();
    pipeline.command(parse_command(tokens)?);

    while tokens.next_if_eq(TokenKind::Pipe).is_some() {
        pipeline.command(parse_command(tokens)?);
    }

    Ok(pipeline)
}
