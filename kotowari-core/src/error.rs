//! Error types for loading lexicons and conjugation tables
//!
//! Only construction can fail. Lookups, conjugation resolution and
//! segmentation are total over their input and never return these.

use thiserror::Error;

/// Errors raised while building the engine's inputs
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a lexicon or table file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexicon document is not valid JSON or has the wrong shape
    #[error("malformed lexicon: {0}")]
    LexiconFormat(#[from] serde_json::Error),

    /// Conjugation table is not valid TOML or has the wrong shape
    #[error("malformed conjugation table: {0}")]
    ConjugationFormat(#[from] toml::de::Error),

    /// A lexicon entry declares no kana reading
    #[error("lexicon entry {index} has no readings")]
    MissingReading {
        /// Position of the entry in the lexicon
        index: usize,
    },

    /// A lexicon entry declares no sense
    #[error("lexicon entry {index} has no senses")]
    MissingSense {
        /// Position of the entry in the lexicon
        index: usize,
    },

    /// A conjugation rule requires a part of speech the lexicon does not know
    #[error("conjugation rule '{rule}' references unknown part of speech '{pos}'")]
    UnknownPartOfSpeech {
        /// Display name of the offending rule
        rule: String,
        /// The unresolved tag or entity code
        pos: String,
    },

    /// A conjugation rule has nothing to strip
    #[error("conjugation rule '{rule}' has an empty ending")]
    EmptyEnding {
        /// Display name of the offending rule
        rule: String,
    },

    /// Configuration error with path information
    #[error("configuration error in {path}: {error}")]
    Configuration {
        /// The configuration file path
        path: String,
        /// The specific error that occurred
        error: String,
    },
}

/// Result type for construction-time operations
pub type Result<T> = std::result::Result<T, Error>;
