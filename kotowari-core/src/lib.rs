//! Dictionary-driven Japanese word segmentation
//!
//! This crate splits unsegmented Japanese text into words and annotates
//! each word with dictionary definitions, including definitions reached
//! by undoing a single verb or adjective inflection.
//!
//! # Architecture
//!
//! - **Lexicon**: passive entry model and a JSON loader
//! - **Dictionary index**: surface form to entries, with a deterministic
//!   priority order for shared readings
//! - **Conjugation**: TOML rule table and suffix-substitution resolver
//! - **Segmenter**: greedy longest match with one-character backtracking
//!
//! The index and the conjugation table are immutable once built and can be
//! shared across threads without locking.
//!
//! # Example
//!
//! ```rust
//! use kotowari_core::{build_index, parse_sentence, ConjugationRule, ConjugationTable};
//! use kotowari_core::lexicon::{LexiconEntry, Sense};
//!
//! let index = build_index(vec![
//!     LexiconEntry::new(Vec::<String>::new(), ["パン"], vec![Sense::new(["bread"], ["noun"])]),
//!     LexiconEntry::new(["食べる"], ["たべる"], vec![Sense::new(["to eat"], ["Ichidan verb"])]),
//! ]);
//! let table = ConjugationTable::new(vec![
//!     ConjugationRule::new("た", "る", "Ichidan verb", "Past form"),
//! ])
//! .unwrap();
//!
//! let sentence = parse_sentence(&index, &table, "パン食べた");
//! let words: Vec<_> = sentence.iter().map(|w| w.original.as_str()).collect();
//! assert_eq!(words, ["パン", "食べた"]);
//! assert_eq!(sentence.text(), "パン食べた");
//! ```

pub mod conjugation;
pub mod dictionary;
pub mod error;
pub mod kana;
pub mod lexicon;
pub mod segmenter;
pub mod sentence;

pub use conjugation::{ConjugationConfig, ConjugationRule, ConjugationTable, PosVocabulary};
pub use dictionary::{DictionaryIndex, IndexBuilder, ReadingPriority};
pub use error::{Error, Result};
pub use lexicon::{Lexicon, LexiconEntry, Sense};
pub use segmenter::{parse_sentence, Segmenter, SegmenterConfig};
pub use sentence::{MatchedDefinition, Sentence, Word};

use std::sync::Arc;

/// Build a dictionary index with the default reading priority
pub fn build_index<I>(entries: I) -> DictionaryIndex
where
    I: IntoIterator,
    I::Item: Into<Arc<LexiconEntry>>,
{
    DictionaryIndex::build(entries)
}
