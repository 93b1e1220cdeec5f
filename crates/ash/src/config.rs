use std::{
    fs,
    path::{Path, PathBuf},
};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location of the configuration file, relative to the user's home directory.
const CONFIG_FILE_NAME: &str = ".ash/config.toml";

/// A configuration file exists but could not be parsed.
#[derive(Debug, Error)]
#[error("invalid config file {}: {source}", .path.display())]
pub struct ConfigError {
    path: PathBuf,
    source: toml::de::Error,
}

/// User configuration for the shell.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt displayed before each line in interactive shells.
    pub prompt: String,

    /// History file. Relative paths are resolved from the user's home directory.
    pub history_file: PathBuf,

    /// Minimum level of log records to display.
    pub log_level: String,

    /// Display parse errors with annotated source in interactive shells.
    pub guiding_errors: bool,

    /// Stop executing a line after the first failing pipeline.
    pub exit_on_error: bool,
}

impl Config {
    /// Loads a configuration from a TOML file.
    ///
    /// Returns [`None`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Option<Config>, ConfigError> {
        let Ok(contents) = fs::read_to_string(path) else {
            return Ok(None);
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Loads the configuration from `path`, or from the user's configuration file.
    ///
    /// Falls back to the default configuration if there is no file to read.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path.map(Path::to_path_buf).or_else(default_path) {
            Some(path) => Ok(Config::load(&path)?.unwrap_or_default()),
            None => Ok(Config::default()),
        }
    }

    /// Returns the absolute location of the history file, if it can be determined.
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.history_file.is_absolute() {
            return Some(self.history_file.clone());
        }

        dirs::home_dir().map(|home| home.join(&self.history_file))
    }

    /// Returns the configured log level, or [`LevelFilter::Warn`] if it is invalid.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prompt: String::from("ash> "),
            history_file: PathBuf::from(".ash/history.txt"),
            log_level: String::from("warn"),
            guiding_errors: true,
            exit_on_error: false,
        }
    }
}

/// Returns the location of the user's configuration file.
fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn it_fills_missing_fields_with_defaults() {
        let file = config_file("prompt = \"$ \"\nexit_on_error = true\n");

        let config = Config::load(file.path()).unwrap().unwrap();

        assert_eq!(
            config,
            Config {
                prompt: "$ ".into(),
                exit_on_error: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn it_reports_invalid_files() {
        let file = config_file("prompt = [");

        let error = Config::load(file.path()).unwrap_err();
        assert!(error
            .to_string()
            .starts_with(&format!("invalid config file {}: ", file.path().display())));

        assert!(Config::load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn it_ignores_missing_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        assert!(Config::load(&missing).unwrap().is_none());
        assert_eq!(
            Config::load_or_default(Some(&missing)).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn it_parses_log_levels() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), LevelFilter::Warn);

        config.log_level = "debug".into();
        assert_eq!(config.log_level(), LevelFilter::Debug);

        config.log_level = "loud".into();
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn it_keeps_absolute_history_paths() {
        let config = Config {
            history_file: PathBuf::from("/var/tmp/ash-history"),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/var/tmp/ash-history"))
        );
    }
}
