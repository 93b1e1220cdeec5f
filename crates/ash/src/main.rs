mod config;
mod error;
mod exec;
mod logger;
mod shell;

#[cfg(test)]
mod tests;

use std::{fs::File, path::PathBuf};

use ansi_term::Colour;
use ash_builtins::status;
use ash_parse::parse;
use clap::{crate_version, Parser};
use config::Config;
use error::{ErrorHandler, GuidingErrorHandler, SimpleErrorHandler};
use exec::{AstPrinter, ExecOutcome, Execute, ProgramExecutor};
use log::{debug, warn, LevelFilter};
use shell::{
    command::SingleCommandShell, input::InputShell, interactive::RustylineShell, Shell,
    ShellInput,
};

/// Command line options for the application's CLI.
#[derive(Parser)]
#[clap(
    about("A small shell for command interpretation."),
    version(crate_version!())
)]
struct Opts {
    /// Command to execute
    #[clap(short, long, conflicts_with("input"))]
    command: Option<String>,

    /// Print the syntax tree of each line instead of executing it
    #[clap(long)]
    parse: bool,

    /// Minimum log level (off, error, warn, info, debug, trace)
    #[clap(long)]
    log_level: Option<String>,

    /// Configuration file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Input file
    input: Option<PathBuf>,
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    let (config, config_error) = match Config::load_or_default(opts.config.as_deref()) {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error)),
    };

    let level = match &opts.log_level {
        Some(level) => level.parse().unwrap_or(LevelFilter::Warn),
        None => config.log_level(),
    };
    logger::init_logger(level);
    if let Some(error) = config_error {
        warn!("{error}; using the default configuration");
    }
    debug!("using configuration {:?}", config);

    let shell = select_shell(&opts, &config);

    let executor: Box<dyn Execute> = match opts.parse {
        true => Box::new(AstPrinter),
        false => Box::new(ProgramExecutor::new(config.exit_on_error)),
    };

    let error_handler: Box<dyn ErrorHandler> = match shell.is_interactive() && config.guiding_errors
    {
        true => Box::new(GuidingErrorHandler),
        false => Box::new(SimpleErrorHandler),
    };

    let history_file = config.history_path().filter(|_| shell.is_interactive());
    let prompt = Colour::Cyan.bold().paint(config.prompt.as_str()).to_string();

    let code = run_shell(
        shell,
        executor.as_ref(),
        error_handler.as_ref(),
        &prompt,
        history_file.as_deref(),
    );
    std::process::exit(code);
}

/// Selects a shell based on the command line options and the type of standard input.
fn select_shell(opts: &Opts, config: &Config) -> Box<dyn Shell> {
    if let Some(script_file) = &opts.input {
        return match File::open(script_file) {
            Ok(file) => Box::new(InputShell::new(file)),
            Err(error) => {
                eprintln!("ash: {}: {}", script_file.display(), error);
                std::process::exit(status::GENERAL_ERROR);
            }
        };
    }

    if let Some(command) = &opts.command {
        return Box::new(SingleCommandShell::new(command.clone()));
    }

    if atty::is(atty::Stream::Stdin) {
        match RustylineShell::new(config.history_path().as_deref()) {
            Ok(shell) => return Box::new(shell),
            Err(error) => eprintln!("ash: could not start interactive shell: {error}"),
        }
    }

    Box::new(InputShell::new(std::io::stdin()))
}

/// Main loop for running a [`Shell`].
///
/// Each line of input is parsed and executed. Parse errors are displayed, after which the next
/// line is read. Returns the status of the last executed pipeline.
fn run_shell(
    mut shell: Box<dyn Shell>,
    executor: &dyn Execute,
    error_handler: &dyn ErrorHandler,
    prompt: &str,
    history_file: Option<&std::path::Path>,
) -> i32 {
    let prompt = match shell.is_interactive() {
        true => prompt,
        false => "",
    };

    let mut last_status = status::SUCCESS;
    loop {
        let line = match shell.prompt_line(prompt) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::Logout | ShellInput::None => break,
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse(&line) {
            Ok(sequence) => {
                shell.add_history_entry(line.trim());
                match executor.execute(sequence, last_status) {
                    ExecOutcome::Continue(status) => last_status = status,
                    ExecOutcome::Exit(status) => {
                        last_status = status;
                        break;
                    }
                }
            }
            Err(error) => {
                error_handler.display_error(&line, &error);
                last_status = status::GENERAL_ERROR;
            }
        }
    }

    if let Some(history_file) = history_file {
        shell.save_history(history_file);
    }

    last_status
}
