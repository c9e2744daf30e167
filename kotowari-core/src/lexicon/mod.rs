//! Lexicon entry model
//!
//! Entries are supplied by a loader and never mutated afterwards. The
//! serialized field names follow the JSON export of the source dictionary
//! (`kanji`, `readings`, `sense`, `glossary`, `pos`).

pub mod loader;

pub use loader::Lexicon;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part-of-speech tag carried by grammatical particles
pub const PARTICLE_TAG: &str = "particle";

/// One meaning of a lexicon entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sense {
    /// Glosses for this meaning
    #[serde(default)]
    pub glossary: Vec<String>,
    /// Part-of-speech tags, already expanded (e.g. "Ichidan verb")
    #[serde(default)]
    pub pos: Vec<String>,
}

impl Sense {
    /// Create a sense from glosses and part-of-speech tags
    pub fn new<G, P>(glossary: G, pos: P) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            glossary: glossary.into_iter().map(Into::into).collect(),
            pos: pos.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this sense carries the given part-of-speech tag
    pub fn has_pos(&self, tag: &str) -> bool {
        self.pos.iter().any(|p| p == tag)
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glossary.join(", "))
    }
}

/// One dictionary headword
///
/// Invariant (checked by [`Lexicon`] validation): at least one reading and
/// at least one sense.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Kanji spellings, possibly empty
    #[serde(default)]
    pub kanji: Vec<String>,
    /// Kana readings
    #[serde(default)]
    pub readings: Vec<String>,
    /// Senses in dictionary order
    #[serde(default, rename = "sense")]
    pub senses: Vec<Sense>,
}

impl LexiconEntry {
    /// Create an entry from its spellings, readings and senses
    pub fn new<K, R>(kanji: K, readings: R, senses: Vec<Sense>) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            kanji: kanji.into_iter().map(Into::into).collect(),
            readings: readings.into_iter().map(Into::into).collect(),
            senses,
        }
    }

    /// Whether any sense carries the given part-of-speech tag
    pub fn has_pos(&self, tag: &str) -> bool {
        self.senses.iter().any(|s| s.has_pos(tag))
    }

    /// Whether the entry is tagged as a grammatical particle
    pub fn is_particle(&self) -> bool {
        self.has_pos(PARTICLE_TAG)
    }

    /// Whether the entry has no kanji spelling
    pub fn is_kana_only(&self) -> bool {
        self.kanji.is_empty()
    }

    /// First gloss of the first sense, if any
    pub fn primary_gloss(&self) -> Option<&str> {
        self.senses
            .first()
            .and_then(|s| s.glossary.first())
            .map(String::as_str)
    }

    /// One-line summary: spellings, readings and the first gloss
    pub fn summary(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.kanji.join(" "),
            self.readings.join(" "),
            self.primary_gloss().unwrap_or_default()
        )
    }

    /// Multi-line description with every spelling, reading and sense
    pub fn detailed(&self) -> String {
        let mut out = String::new();
        if !self.kanji.is_empty() {
            out.push_str(&self.kanji.join(", "));
            out.push('\n');
        }
        out.push_str(&self.readings.join(", "));
        out.push('\n');
        for (i, sense) in self.senses.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, sense));
        }
        out
    }
}

impl fmt::Display for LexiconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
