use std::{ffi::OsString, path::Path};

use clap::Parser;
use log::debug;

use crate::{status, utils, Builtin, Io};

/// Command name.
const NAME: &str = "cd";

/// Change the shell's working directory.
///
/// If no directory is supplied, the HOME directory is used. Arguments such as `-h` name
/// directories rather than options.
#[derive(Parser)]
#[clap(name = NAME, disable_help_flag = true, disable_version_flag = true)]
struct CdOpts {
    /// Directory to change to.
    #[clap(allow_hyphen_values = true)]
    directory: Option<OsString>,
}

/// Implementation for the "cd" built-in command.
#[derive(Clone)]
pub struct Cd;
impl Builtin for Cd {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, args: &[String], io: &mut Io) -> i32 {
        match CdOpts::try_parse_from(args) {
            Ok(opts) => change_directory(opts.directory, std::env::var_os("HOME"), io),
            Err(error) => utils::exit_with_parse_error(io, error),
        }
    }
}

/// Changes the working directory of the shell process to `directory`, falling back to `home`.
///
/// Returns an exit code.
fn change_directory(directory: Option<OsString>, home: Option<OsString>, io: &mut Io) -> i32 {
    let Some(directory) = directory.or(home) else {
        let message = "No path and HOME not set.";
        return utils::exit_with_error(io, NAME, status::GENERAL_ERROR, message);
    };

    let path = Path::new(&directory);
    match std::env::set_current_dir(path) {
        Ok(()) => {
            debug!("changed working directory to {}", path.display());
            status::SUCCESS
        }
        Err(error) => {
            let message = format!("{}: {}", path.display(), error);
            utils::exit_with_error(io, NAME, status::GENERAL_ERROR, &message)
        }
    }
}
