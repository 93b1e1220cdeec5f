use std::{
    fs::{File, OpenOptions},
    io::{ErrorKind, Write},
    process::{self, Child, Stdio},
};

use ash_ast::{Command, Pipeline, RedirectMode, Redirection};
use ash_builtins::{lookup, status, Io};
use log::debug;
use os_pipe::{PipeReader, PipeWriter};

/// Destination of a command's standard output.
enum Output {
    /// The shell's own standard output.
    Inherit,
    /// The write end of a pipe to the next command.
    Pipe(PipeWriter),
    /// A redirection target.
    File(File),
}

impl Output {
    fn into_stdio(self) -> Stdio {
        match self {
            Output::Inherit => Stdio::inherit(),
            Output::Pipe(writer) => Stdio::from(writer),
            Output::File(file) => Stdio::from(file),
        }
    }

    fn into_writer(self) -> Box<dyn Write> {
        match self {
            Output::Inherit => Box::new(std::io::stdout()),
            Output::Pipe(writer) => Box::new(writer),
            Output::File(file) => Box::new(file),
        }
    }
}

/// A started command.
enum Started {
    /// A command that has already completed with a status.
    Done(i32),
    /// A child process that must be waited for.
    Child(Child),
}

/// Runs every command in a pipeline, connecting the output of each command to the input of the
/// next, and returns the status of the last command.
pub(crate) fn run_pipeline(pipeline: &Pipeline) -> i32 {
    let mut started = Vec::with_capacity(pipeline.commands.len());
    let mut stdin: Option<PipeReader> = None;

    let mut commands = pipeline.commands.iter().peekable();
    while let Some(command) = commands.next() {
        let (output, next_stdin) = if commands.peek().is_some() {
            match os_pipe::pipe() {
                Ok((reader, writer)) => (Output::Pipe(writer), Some(reader)),
                Err(error) => {
                    eprintln!("ash: could not create pipe: {error}");
                    started.push(Started::Done(status::GENERAL_ERROR));
                    break;
                }
            }
        } else {
            (Output::Inherit, None)
        };

        started.push(start_command(command, stdin.take(), output));
        stdin = next_stdin;
    }

    started
        .into_iter()
        .map(wait)
        .last()
        .unwrap_or(status::SUCCESS)
}

/// Starts a single command. Built-in commands run to completion before this function returns.
fn start_command(command: &Command, stdin: Option<PipeReader>, output: Output) -> Started {
    let Some(program) = command.program() else {
        return Started::Done(status::SUCCESS);
    };

    // A redirection replaces the pipe to the next command, which then reads nothing.
    let output = match open_redirection(&command.redirection) {
        Ok(Some(file)) => Output::File(file),
        Ok(None) => output,
        Err(error) => {
            let target = command.redirection.target.as_deref().unwrap_or_default();
            eprintln!("ash: {target}: {error}");
            return Started::Done(status::GENERAL_ERROR);
        }
    };

    if let Some(builtin) = lookup(program) {
        debug!("running builtin {program}");
        let mut io = Io::new(output.into_writer(), Box::new(std::io::stderr()));
        return Started::Done(builtin.run(&command.arguments, &mut io));
    }

    let mut cmd = process::Command::new(program);
    cmd.args(&command.arguments[1..]);
    cmd.stdout(output.into_stdio());
    if let Some(reader) = stdin {
        cmd.stdin(reader);
    }

    match cmd.spawn() {
        Ok(child) => {
            debug!("spawned {program} with pid {}", child.id());
            Started::Child(child)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            eprintln!("ash: {program}: command not found");
            Started::Done(status::COMMAND_NOT_FOUND)
        }
        Err(error) => {
            eprintln!("ash: {program}: {error}");
            Started::Done(status::GENERAL_ERROR)
        }
    }
}

/// Waits for a started command to complete and returns its status.
fn wait(started: Started) -> i32 {
    match started {
        Started::Done(status) => status,
        Started::Child(mut child) => match child.wait() {
            Ok(exit_status) => exit_status.code().unwrap_or(status::GENERAL_ERROR),
            Err(error) => {
                eprintln!("ash: failed to wait for process: {error}");
                status::GENERAL_ERROR
            }
        },
    }
}

/// Opens the target of a redirection, creating it if it does not exist.
///
/// Returns [`None`] if output is not redirected.
fn open_redirection(redirection: &Redirection) -> std::io::Result<Option<File>> {
    let Some(target) = &redirection.target else {
        return Ok(None);
    };

    let mut options = OpenOptions::new();
    match redirection.mode {
        RedirectMode::None => return Ok(None),
        RedirectMode::Truncate => options.write(true).truncate(true),
        RedirectMode::Append => options.append(true),
    };

    options.create(true).open(target).map(Some)
}
