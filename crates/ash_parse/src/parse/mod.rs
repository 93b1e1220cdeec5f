use ash_ast::Sequence;
use log::debug;

use crate::{lex::lexer::lex, token::Token, ParseError};

use self::{cursor::TokenCursor, sequence::parse_sequence};

mod command;
mod cursor;
mod pipeline;
mod sequence;
mod utils;


/// A specialized [`Result`] type for parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a [`Sequence`] by consuming some input `src` in its entirety.
///
/// # Errors
///
/// This function will return an error if the input can't be lexed, or if its tokens do not form
/// a valid sequence.
pub fn parse(src: &str) -> ParseResult<Sequence> {
    parse_tokens(lex(src)?)
}

/// Parses a [`Sequence`] from previously lexed tokens.
///
/// # Errors
///
/// This function will return an error if the tokens do not form a valid sequence.
pub fn parse_tokens(tokens: Vec<Token>) -> ParseResult<Sequence> {
    let sequence = parse_sequence(&mut TokenCursor::new(tokens))?;
    debug!("parsed sequence of {} pipelines", sequence.pipelines.len());
    Ok(sequence)
}
