use std::io::Write;

/// Output streams available to a built-in command.
pub struct Io {
    /// Standard output.
    pub stdout: Box<dyn Write>,

    /// Standard error.
    pub stderr: Box<dyn Write>,
}

impl Io {
    /// Constructs a new output wrapper.
    pub fn new(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self { stdout, stderr }
    }
}

/// A command implemented within the shell process itself.
pub trait Builtin: Sync {
    /// Returns the command's name.
    fn name(&self) -> &str;

    /// Runs the command and returns its exit status.
    ///
    /// The first argument is the command's own name.
    fn run(&self, args: &[String], io: &mut Io) -> i32;
}
