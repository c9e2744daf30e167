//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Errors raised by the command-line layer itself
///
/// Engine failures arrive as [`kotowari_core::Error`] and are wrapped with
/// `anyhow` context instead.
#[derive(Debug)]
pub enum CliError {
    /// Input file does not exist or is not a regular file
    FileNotFound(PathBuf),
    /// Glob pattern could not be parsed or matched nothing
    InvalidPattern(String),
    /// No lexicon given on the command line or in the config file
    MissingLexicon,
    /// CLI configuration file could not be read or parsed
    ConfigError { path: PathBuf, message: String },
    /// Lookup found nothing for the requested surface form
    NoDefinitions(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::MissingLexicon => write!(
                f,
                "No lexicon given: pass --lexicon or set dictionary.lexicon in the config file"
            ),
            CliError::ConfigError { path, message } => {
                write!(f, "Configuration error in {}: {message}", path.display())
            }
            CliError::NoDefinitions(word) => write!(f, "No definitions found for '{word}'"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
