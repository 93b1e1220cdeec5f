use std::io::Write;

use log::warn;

use crate::{status, Builtin, Io};

/// Command name.
const NAME: &str = "echo";

/// Implementation for the "echo" built-in command.
///
/// Arguments are printed verbatim, separated by a single space and followed by a newline.
#[derive(Clone)]
pub struct Echo;
impl Builtin for Echo {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &[String], io: &mut Io) -> i32 {
        if let Err(error) = try_print_words(args.get(1..).unwrap_or_default(), io) {
            warn!("{NAME}: could not write output: {error}");
        }

        status::SUCCESS
    }
}

/// Tries to print words to stdout.
fn try_print_words(words: &[String], io: &mut Io) -> std::io::Result<()> {
    let mut words = words.iter();

    // The first word should be written as-is.
    if let Some(word) = words.next() {
        write!(io.stdout, "{}", word)?;
    }

    // Remaining words are prefixed with a whitespace to ensure separation.
    for word in words {
        write!(io.stdout, " {}", word)?;
    }

    writeln!(io.stdout)?;
    io.stdout.flush()
}

#[cfg(test)]
mod tests {
    use crate::utils::{args, file_contents, mock_io};

    use super::*;

    #[test]
    fn it_prints_to_stdout() {
        let (mut io, mut stdout, mut stderr) = mock_io();

        let status = Echo.run(&args(&["echo", "message"]), &mut io);

        assert_eq!(status, status::SUCCESS);
        assert_eq!(&file_contents(&mut stdout), "message\n");
        assert_eq!(&file_contents(&mut stderr), "");
    }

    #[test]
    fn it_separates_arguments_with_a_single_space() {
        let (mut io, mut stdout, _stderr) = mock_io();

        let status = Echo.run(&args(&["echo", "first", "second", "third"]), &mut io);

        assert_eq!(status, status::SUCCESS);
        assert_eq!(&file_contents(&mut stdout), "first second third\n");
    }

    #[test]
    fn it_prints_a_newline_without_arguments() {
        let (mut io, mut stdout, _stderr) = mock_io();

        let status = Echo.run(&args(&["echo"]), &mut io);

        assert_eq!(status, status::SUCCESS);
        assert_eq!(&file_contents(&mut stdout), "\n");
    }

    #[test]
    fn it_prints_flags_verbatim() {
        let (mut io, mut stdout, _stderr) = mock_io();

        Echo.run(&args(&["echo", "-n", "--help"]), &mut io);

        assert_eq!(&file_contents(&mut stdout), "-n --help\n");
    }
}
