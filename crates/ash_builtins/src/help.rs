use std::io::Write;

use log::warn;

use crate::{status, Builtin, Io};

/// Command name.
const NAME: &str = "help";

/// Usage text listing every built-in command.
const USAGE: &str = "\
Ash builtin commands:
cd <optional: path>    Change directory to a specified path; no path changes to HOME directory.
echo <message>         Print a specified message in the standard output.
help                   Display all builtin commands and their uses.
exit                   Exit the shell.
tokens \"<string>\"      Print the tokens lexed from a string.
ast \"<string>\"         Print the syntax tree parsed from a string.
";

/// Implementation for the "help" built-in command.
#[derive(Clone)]
pub struct Help;
impl Builtin for Help {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, _args: &[String], io: &mut Io) -> i32 {
        if let Err(error) = write!(io.stdout, "{USAGE}").and_then(|_| io.stdout.flush()) {
            warn!("{NAME}: could not write output: {error}");
        }

        status::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        all_builtins,
        utils::{args, file_contents, mock_io},
    };

    use super::*;

    #[test]
    fn it_lists_all_builtins() {
        let (mut io, mut stdout, _stderr) = mock_io();

        let status = Help.run(&args(&["help", "ignored"]), &mut io);
        let output = file_contents(&mut stdout);

        assert_eq!(status, status::SUCCESS);
        assert!(output.starts_with("Ash builtin commands:\n"));
        for builtin in all_builtins() {
            assert!(
                output.lines().any(|line| line.starts_with(builtin.name())),
                "missing usage for {}",
                builtin.name()
            );
        }
    }
}
