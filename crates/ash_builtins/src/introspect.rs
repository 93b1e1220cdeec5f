use std::io::Write;

use ash_parse::{lex, parse};

use crate::{status, utils, Builtin, Io};

/// Command name for printing tokens.
const TOKENS: &str = "tokens";

/// Command name for printing syntax trees.
const AST: &str = "ast";

/// Returns the single input string passed to `name`.
///
/// The input is taken verbatim, so strings such as `--` or `-h` are lexed rather than treated
/// as options. Prints a usage line and returns an exit code if the argument count is wrong.
fn single_input<'a>(name: &str, args: &'a [String], io: &mut Io) -> Result<&'a str, i32> {
    match args {
        [_, input] => Ok(input.as_str()),
        _ => {
            let usage = format!("usage: {name} \"<string>\"");
            Err(utils::exit_with_error(io, name, status::BUILTIN_ERROR, &usage))
        }
    }
}

/// Print the tokens lexed from a string.
#[derive(Clone)]
pub struct Tokens;
impl Builtin for Tokens {
    fn name(&self) -> &str {
        TOKENS
    }

    fn run(&self, args: &[String], io: &mut Io) -> i32 {
        let input = match single_input(TOKENS, args, io) {
            Ok(input) => input,
            Err(code) => return code,
        };

        let tokens = match lex(input) {
            Ok(tokens) => tokens,
            Err(error) => {
                return utils::exit_with_error(io, TOKENS, status::GENERAL_ERROR, &error.to_string())
            }
        };

        let result = tokens
            .iter()
            .try_for_each(|token| writeln!(io.stdout, "{token}"))
            .and_then(|_| io.stdout.flush());
        match result {
            Ok(_) => status::SUCCESS,
            Err(error) => {
                utils::exit_with_error(io, TOKENS, status::GENERAL_ERROR, &error.to_string())
            }
        }
    }
}

/// Print the syntax tree parsed from a string.
#[derive(Clone)]
pub struct Ast;
impl Builtin for Ast {
    fn name(&self) -> &str {
        AST
    }

    fn run(&self, args: &[String], io: &mut Io) -> i32 {
        let input = match single_input(AST, args, io) {
            Ok(input) => input,
            Err(code) => return code,
        };

        let sequence = match parse(input) {
            Ok(sequence) => sequence,
            Err(error) => {
                return utils::exit_with_error(io, AST, status::GENERAL_ERROR, &error.to_string())
            }
        };

        match write!(io.stdout, "{sequence}").and_then(|_| io.stdout.flush()) {
            Ok(_) => status::SUCCESS,
            Err(error) => {
                utils::exit_with_error(io, AST, status::GENERAL_ERROR, &error.to_string())
            }
        }
    }
}
