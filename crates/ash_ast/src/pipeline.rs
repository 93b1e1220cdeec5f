use crate::Command;

/// A pipeline is a chain of commands where the output of each command is fed
/// to the input of the next one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// Commands in left-to-right pipe order.
    pub commands: Vec<Command>,
}

impl Pipeline {
    /// Constructs a new pipeline without commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to the end of the pipeline.
    pub fn command(&mut self, command: Command) {
        self.commands.push(command);
    }
}
