use std::io::Write;

use crate::{status, Io};

/// Prints a [`clap::Error`] message to standard out or standard error depending
/// on the error type.
///
/// Returns an exit code.
pub fn exit_with_parse_error(io: &mut Io, error: clap::Error) -> i32 {
    let (fd, code) = match error.use_stderr() {
        true => (&mut io.stderr, status::BUILTIN_ERROR),
        false => (&mut io.stdout, status::SUCCESS),
    };

    let _ = write!(fd, "{}", error);
    let _ = fd.flush();
    code
}

/// Prints an error message prefixed by a command name to standard error.
///
/// Returns an exit code.
pub fn exit_with_error(io: &mut Io, name: &str, status: i32, error: &str) -> i32 {
    let _ = writeln!(io.stderr, "{}: {}", name, error);
    let _ = io.stderr.flush();
    status
}

/// Converts string slices to owned arguments.
#[cfg(test)]
pub(crate) fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Constructs a new Io instance backed by temporary files.
#[cfg(test)]
pub(crate) fn mock_io() -> (Io, std::fs::File, std::fs::File) {
    use tempfile::tempfile;

    let stdout = tempfile().unwrap();
    let stderr = tempfile().unwrap();
    let io = Io::new(
        Box::new(stdout.try_clone().unwrap()),
        Box::new(stderr.try_clone().unwrap()),
    );
    (io, stdout, stderr)
}

/// Reads the entire contents of a file from start to end.
///
/// Note that this will change the current position in the file.
#[cfg(test)]
pub(crate) fn file_contents(file: &mut std::fs::File) -> String {
    use std::io::{Read, Seek};

    let mut string = String::new();
    let _ = file.rewind();
    let _ = file.read_to_string(&mut string);
    string
}
