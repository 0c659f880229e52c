//! Error types for the CLI application.

use std::fmt;

use pokerduel_runner::errors::TournamentError;

use crate::config::ConfigError;

/// Everything a subcommand can fail with. Every variant maps to exit code 2.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, result files)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(ConfigError),

    /// The tournament could not run to completion
    Tournament(TournamentError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Tournament(e) => write!(f, "Tournament error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Tournament(e) => Some(e),
            CliError::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error)
    }
}

impl From<TournamentError> for CliError {
    fn from(error: TournamentError) -> Self {
        CliError::Tournament(error)
    }
}

impl From<&str> for CliError {
    fn from(error: &str) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}
