//! Surface-form dictionary index
//!
//! Maps every kanji spelling and kana reading to the entries that declare
//! it. The index is built once and is read-only afterwards, so a single
//! instance can be shared between threads without locking.

use crate::lexicon::LexiconEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordering policy for entries sharing a reading key
///
/// Entries inserted under a kanji key are always appended in encounter
/// order. Under a reading key, entries matching the policy are prepended
/// ahead of earlier entries so that short grammatical words outrank
/// compounds spelled with the same kana.
///
/// Serialized as `kanji-less-first` / `kanji-less-or-particle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingPriority {
    /// Prepend only entries without any kanji spelling
    KanjiLessFirst,
    /// Prepend entries without kanji, and particles
    #[default]
    KanjiLessOrParticle,
}

impl ReadingPriority {
    fn prepends(self, entry: &LexiconEntry) -> bool {
        match self {
            ReadingPriority::KanjiLessFirst => entry.is_kana_only(),
            ReadingPriority::KanjiLessOrParticle => entry.is_kana_only() || entry.is_particle(),
        }
    }
}

/// Builder for [`DictionaryIndex`]
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    priority: ReadingPriority,
}

impl IndexBuilder {
    /// Create a builder with the default reading priority
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading priority policy
    pub fn reading_priority(mut self, priority: ReadingPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Build the index from entries in the given order
    pub fn build<I>(self, entries: I) -> DictionaryIndex
    where
        I: IntoIterator,
        I::Item: Into<Arc<LexiconEntry>>,
    {
        let mut words: HashMap<String, Vec<Arc<LexiconEntry>>> = HashMap::new();
        let mut entry_count = 0usize;
        let mut max_key_chars = 0usize;

        for entry in entries {
            let entry: Arc<LexiconEntry> = entry.into();
            entry_count += 1;

            for key in entry.kanji.iter().chain(&entry.readings) {
                max_key_chars = max_key_chars.max(key.chars().count());
            }

            for kanji in &entry.kanji {
                words
                    .entry(kanji.clone())
                    .or_default()
                    .push(Arc::clone(&entry));
            }

            let prepend = self.priority.prepends(&entry);
            for reading in &entry.readings {
                let slot = words.entry(reading.clone()).or_default();
                if prepend {
                    slot.insert(0, Arc::clone(&entry));
                } else {
                    slot.push(Arc::clone(&entry));
                }
            }
        }

        log::debug!(
            "built dictionary index: {} entries, {} surface forms ({:?})",
            entry_count,
            words.len(),
            self.priority
        );

        DictionaryIndex {
            words,
            entry_count,
            max_key_chars,
            priority: self.priority,
        }
    }
}

/// Immutable surface form to entries mapping
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: HashMap<String, Vec<Arc<LexiconEntry>>>,
    entry_count: usize,
    max_key_chars: usize,
    priority: ReadingPriority,
}

impl DictionaryIndex {
    /// Build an index with the default reading priority
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<LexiconEntry>>,
    {
        IndexBuilder::new().build(entries)
    }

    /// Entries that can produce `surface`, in priority order
    ///
    /// Absent keys yield an empty slice.
    pub fn lookup(&self, surface: &str) -> &[Arc<LexiconEntry>] {
        self.words.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any entry declares `surface`
    pub fn contains(&self, surface: &str) -> bool {
        self.words.contains_key(surface)
    }

    /// Number of distinct surface forms
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index has no surface forms
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of entries the index was built from
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Length in characters of the longest surface form
    ///
    /// No candidate longer than this can match directly.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    /// Reading priority the index was built with
    pub fn reading_priority(&self) -> ReadingPriority {
        self.priority
    }
}
