//! Configuration module
//!
//! The CLI reads an optional TOML file. Every section is optional and
//! command-line flags take precedence over file values.

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use kotowari_core::ReadingPriority;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Dictionary sources
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Where the lexicon and conjugation table come from
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    /// Lexicon JSON file
    pub lexicon: Option<PathBuf>,

    /// Conjugation table TOML file (embedded table when unset)
    pub conjugations: Option<PathBuf>,

    /// Ordering policy for entries sharing a reading
    ///
    /// `kanji-less-first` or `kanji-less-or-particle`
    pub reading_priority: ReadingPriority,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Retry unmatched katakana candidates as hiragana
    pub fold_katakana: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl CliConfig {
    /// Parse a configuration document
    ///
    /// Relative dictionary paths are kept as written.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read a configuration file
    ///
    /// Relative dictionary paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        })?;

        if let Some(base) = path.parent() {
            config.dictionary.rebase(base);
        }
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Read `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl DictionaryConfig {
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.lexicon, &mut self.conjugations]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
