use std::io::{BufRead, BufReader, Read};

use log::warn;

use crate::shell::{Shell, ShellInput};

/// A minimal non-interactive shell reading lines from a type implementing
/// [`std::io::Read`], such as a script file or piped standard input.
pub struct InputShell<R: Read> {
    /// Internal read buffer.
    reader: BufReader<R>,
}

impl<R: Read> InputShell<R> {
    /// Constructs a new shell from a type implementing [`std::io::Read`].
    pub fn new(input: R) -> Self {
        Self {
            reader: BufReader::new(input),
        }
    }
}

impl<R: Read> Shell for InputShell<R> {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => ShellInput::None,
            Ok(_) => ShellInput::Line(line),
            Err(error) => {
                warn!("could not read input: {error}");
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {}

    fn save_history(&mut self, _path: &std::path::Path) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reads_line_by_line() {
        let mut shell = InputShell::new("first\nsecond".as_bytes());

        assert!(matches!(shell.prompt_line("$ "), ShellInput::Line(line) if line == "first\n"));
        assert!(matches!(shell.prompt_line("$ "), ShellInput::Line(line) if line == "second"));
        assert!(matches!(shell.prompt_line("$ "), ShellInput::None));
    }
}
