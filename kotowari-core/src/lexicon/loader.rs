//! Lexicon document loader
//!
//! Reads the JSON export of a dictionary: the entity table used to expand
//! part-of-speech codes, plus the entry list.

use super::LexiconEntry;
use crate::conjugation::PosVocabulary;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A loaded lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Entity code to expanded tag, e.g. `v1` -> `Ichidan verb`
    #[serde(default)]
    pub entities: BTreeMap<String, String>,
    /// Dictionary entries in source order
    #[serde(default)]
    pub entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Parse and validate a lexicon from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        log::debug!(
            "loaded lexicon: {} entries, {} entities",
            lexicon.entries.len(),
            lexicon.entities.len()
        );
        Ok(lexicon)
    }

    /// Read, parse and validate a lexicon file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|e| match e {
            Error::LexiconFormat(err) => Error::Configuration {
                path: path.display().to_string(),
                error: err.to_string(),
            },
            other => other,
        })
    }

    /// Check that every entry has at least one reading and one sense
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.readings.is_empty() {
                return Err(Error::MissingReading { index });
            }
            if entry.senses.is_empty() {
                return Err(Error::MissingSense { index });
            }
        }
        Ok(())
    }

    /// Expand an entity code; expanded tags pass through unchanged
    ///
    /// A tag is known if the entity table expands to it or any sense in
    /// the lexicon carries it. Returns `None` otherwise.
    pub fn resolve_pos(&self, code_or_tag: &str) -> Option<&str> {
        PosVocabulary::resolve_pos(&self.entities, code_or_tag).or_else(|| {
            self.entries
                .iter()
                .flat_map(|entry| &entry.senses)
                .flat_map(|sense| &sense.pos)
                .find(|tag| tag.as_str() == code_or_tag)
                .map(String::as_str)
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
