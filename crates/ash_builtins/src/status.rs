//! Exit statuses shared by built-in commands and the executor.

/// The command completed successfully.
pub const SUCCESS: i32 = 0;

/// The command failed.
pub const GENERAL_ERROR: i32 = 1;

/// A built-in command was invoked with invalid arguments.
pub const BUILTIN_ERROR: i32 = 2;

/// No program with the requested name could be found.
pub const COMMAND_NOT_FOUND: i32 = 127;
