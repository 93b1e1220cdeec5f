use crate::{status, Builtin, Io};

/// Command name.
const NAME: &str = "exit";

/// Implementation for the "exit" built-in command.
///
/// Running the command has no effect. Terminating the shell is left to the caller, which
/// recognizes the command by its name.
#[derive(Clone)]
pub struct Exit;
impl Builtin for Exit {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, _args: &[String], _io: &mut Io) -> i32 {
        status::SUCCESS
    }
}
