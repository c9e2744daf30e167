//! Segmentation output: sentences, words and matched definitions

use crate::conjugation::ConjugationRule;
use crate::lexicon::LexiconEntry;
use serde::Serialize;
use std::sync::Arc;

/// A dictionary entry matched for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedDefinition {
    /// The matched entry, shared with the index
    pub entry: Arc<LexiconEntry>,
    /// Rule that was undone to reach the entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<Arc<ConjugationRule>>,
}

impl MatchedDefinition {
    /// A match on the surface form itself
    pub fn direct(entry: Arc<LexiconEntry>) -> Self {
        Self {
            entry,
            conjugation: None,
        }
    }

    /// A match reached by undoing `rule`
    pub fn conjugated(entry: Arc<LexiconEntry>, rule: Arc<ConjugationRule>) -> Self {
        Self {
            entry,
            conjugation: Some(rule),
        }
    }

    /// Whether an inflection had to be undone
    pub fn is_conjugated(&self) -> bool {
        self.conjugation.is_some()
    }
}

/// One output token
///
/// An empty definition list means there was no dictionary match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Exact substring of the input
    pub original: String,
    /// Ranked definitions: direct matches first, then conjugated ones
    pub definitions: Vec<MatchedDefinition>,
}

impl Word {
    /// Create a word with its definitions
    pub fn new(original: impl Into<String>, definitions: Vec<MatchedDefinition>) -> Self {
        Self {
            original: original.into(),
            definitions,
        }
    }

    /// Create a word with no dictionary match
    pub fn unmatched(original: impl Into<String>) -> Self {
        Self::new(original, Vec::new())
    }

    /// Whether the word has at least one definition
    pub fn is_matched(&self) -> bool {
        !self.definitions.is_empty()
    }
}

/// Ordered, gapless sequence of words covering an input string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sentence {
    words: Vec<Word>,
}

impl Sentence {
    /// Create an empty sentence
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Words in input order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume the sentence, returning its words
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the sentence has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with at least one definition
    pub fn matched_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_matched()).count()
    }

    /// Concatenation of every word's original text
    ///
    /// Always equal to the input the sentence was produced from.
    pub fn text(&self) -> String {
        self.words.iter().map(|w| w.original.as_str()).collect()
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for Sentence {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<Word> for Sentence {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
