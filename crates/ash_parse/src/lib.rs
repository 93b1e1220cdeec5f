mod error;
mod lex;
mod parse;
mod token;

pub use error::{LexError, ParseError};
pub use lex::lexer::lex;
pub use parse::{parse, parse_tokens, ParseResult};
pub use token::{Span, Token, TokenKind};
