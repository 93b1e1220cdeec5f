/// The kind of output redirection attached to a command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    /// Output is not redirected.
    #[default]
    None,

    /// ">" - the target file is truncated before writing.
    Truncate,

    /// ">>" - output is appended to the target file.
    Append,
}

/// An output redirection for a single command.
///
/// A target is present for every mode except [`RedirectMode::None`] when constructed through the
/// parser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Redirection {
    /// How the target should be opened.
    pub mode: RedirectMode,

    /// Path to the file that receives the output.
    pub target: Option<String>,
}

impl Redirection {
    /// Constructs a redirection that does nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Constructs a truncating redirection to `target`.
    pub fn truncate<S: Into<String>>(target: S) -> Self {
        Self {
            mode: RedirectMode::Truncate,
            target: Some(target.into()),
        }
    }

    /// Constructs an appending redirection to `target`.
    pub fn append<S: Into<String>>(target: S) -> Self {
        Self {
            mode: RedirectMode::Append,
            target: Some(target.into()),
        }
    }

    /// Returns `true` if output should be redirected.
    pub fn is_active(&self) -> bool {
        self.mode != RedirectMode::None
    }
}

/// A command represents a program invocation within a pipeline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Command {
    /// List of arguments for the command. The first argument represents the
    /// name of the program to execute.
    pub arguments: Vec<String>,

    /// Output redirection for the command.
    pub redirection: Redirection,
}

impl Command {
    /// Constructs a new command without arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of an argument to the command.
    pub fn arg(&mut self, arg: &str) {
        self.arguments.push(arg.to_owned());
    }

    /// Replaces the command's redirection.
    ///
    /// Any previous target is released before the new target is stored.
    pub fn set_redirection(&mut self, mode: RedirectMode, target: Option<&str>) {
        self.redirection = Redirection {
            mode,
            target: target.map(str::to_owned),
        };
    }

    /// Returns the name of the program to execute, if any.
    pub fn program(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}
