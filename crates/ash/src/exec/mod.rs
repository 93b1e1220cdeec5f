mod pipeline;

use ash_ast::{Pipeline, Sequence};
use ash_builtins::status;
use log::debug;

#[cfg(test)]
use mockall::automock;

use self::pipeline::run_pipeline;

/// Name of the built-in command that terminates the shell.
const EXIT: &str = "exit";

/// The result of executing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExecOutcome {
    /// Continue reading input. Holds the status of the last executed pipeline.
    Continue(i32),

    /// Terminate the shell with a status.
    Exit(i32),
}

/// Trait for implementing sequence execution.
#[cfg_attr(test, automock)]
pub(crate) trait Execute {
    /// Executes a sequence, consuming it.
    ///
    /// `last_status` is the status of the previously executed pipeline.
    fn execute(&self, sequence: Sequence, last_status: i32) -> ExecOutcome;
}

/// Sequence executor running built-in commands in-process and other commands as child processes.
pub(crate) struct ProgramExecutor {
    /// Stop executing a sequence after the first failing pipeline.
    exit_on_error: bool,
}

impl ProgramExecutor {
    /// Constructs a new program executor.
    pub(crate) fn new(exit_on_error: bool) -> Self {
        Self { exit_on_error }
    }
}

impl Execute for ProgramExecutor {
    fn execute(&self, sequence: Sequence, mut last_status: i32) -> ExecOutcome {
        for pipeline in &sequence.pipelines {
            if is_exit(pipeline) {
                debug!("exit requested with status {last_status}");
                return ExecOutcome::Exit(last_status);
            }

            last_status = run_pipeline(pipeline);

            if self.exit_on_error && last_status != status::SUCCESS {
                debug!("stopping sequence after status {last_status}");
                break;
            }
        }

        ExecOutcome::Continue(last_status)
    }
}

/// Returns `true` if a pipeline consists of the "exit" built-in alone.
///
/// Within a longer pipeline, "exit" runs like any other built-in and does not end the shell.
fn is_exit(pipeline: &Pipeline) -> bool {
    matches!(pipeline.commands.as_slice(), [command] if command.program() == Some(EXIT))
}

/// Prints a parsed AST to stdout.
pub(crate) struct AstPrinter;

impl Execute for AstPrinter {
    fn execute(&self, sequence: Sequence, _last_status: i32) -> ExecOutcome {
        print!("{sequence}");
        ExecOutcome::Continue(status::SUCCESS)
    }
}
