//! Greedy longest-match segmentation
//!
//! The input is scanned left to right. At each position the longest span
//! up to the next delimiter is tried first; on a miss the span shrinks by
//! one character from the right until it matches or is a single
//! character, which is then emitted unmatched. Runs of delimiters become
//! their own unmatched words.
//!
//! Segmentation has no failure outcome: any string, including the empty
//! one, produces a [`Sentence`] whose words concatenate back to the input.

pub mod delimiter;
pub mod window;

pub use delimiter::{is_delimiter, DELIMITERS};
pub use window::CharIndexedText;

use crate::conjugation::{self, ConjugationTable};
use crate::dictionary::DictionaryIndex;
use crate::kana;
use crate::sentence::{MatchedDefinition, Sentence, Word};
use std::sync::Arc;

/// Segmentation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmenterConfig {
    /// Retry unmatched candidates with katakana folded to hiragana
    pub fold_katakana: bool,
}

/// Segments text against a shared dictionary and conjugation table
///
/// Holds only immutable state, so one instance can serve any number of
/// threads; every call builds its own [`Sentence`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    index: Arc<DictionaryIndex>,
    conjugations: Arc<ConjugationTable>,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a segmenter with default options
    pub fn new(index: Arc<DictionaryIndex>, conjugations: Arc<ConjugationTable>) -> Self {
        Self::with_config(index, conjugations, SegmenterConfig::default())
    }

    /// Create a segmenter with custom options
    pub fn with_config(
        index: Arc<DictionaryIndex>,
        conjugations: Arc<ConjugationTable>,
        config: SegmenterConfig,
    ) -> Self {
        Self {
            index,
            conjugations,
            config,
        }
    }

    /// The dictionary index
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// The conjugation table
    pub fn conjugations(&self) -> &ConjugationTable {
        &self.conjugations
    }

    /// The segmentation options
    pub fn config(&self) -> SegmenterConfig {
        self.config
    }

    /// Segment `text` into words
    pub fn segment(&self, text: &str) -> Sentence {
        segment_with(&self.index, &self.conjugations, self.config, text)
    }

    /// Direct and conjugated matches for a single surface form
    pub fn lookup(&self, surface: &str) -> Vec<MatchedDefinition> {
        definitions(&self.index, &self.conjugations, self.config, surface)
    }
}

/// Segment `text` with default options
pub fn parse_sentence(index: &DictionaryIndex, table: &ConjugationTable, text: &str) -> Sentence {
    segment_with(index, table, SegmenterConfig::default(), text)
}

fn segment_with(
    index: &DictionaryIndex,
    table: &ConjugationTable,
    config: SegmenterConfig,
    text: &str,
) -> Sentence {
    let input = CharIndexedText::new(text);
    let len = input.len_char();
    let mut sentence = Sentence::new();
    let mut position = 0;
    // Longest candidate that can still match, directly or through a rule
    let reach = (index.max_key_chars() + table.max_slack()).max(1);

    while position < len {
        if is_delimiter(input.char_at(position)) {
            let run_end = input.delimiter_run_end(position);
            sentence.push(Word::unmatched(input.slice(position, run_end)));
            position = run_end;
            continue;
        }

        let boundary = input.next_delimiter(position);
        let mut window_end = boundary.min(position + reach);

        loop {
            let candidate = input.slice(position, window_end);
            let found = definitions(index, table, config, candidate);

            if !found.is_empty() {
                log::trace!("matched {candidate} ({} definitions)", found.len());
                sentence.push(Word::new(candidate, found));
                position = window_end;
                break;
            }

            if window_end - position == 1 {
                log::trace!("no match for {candidate}");
                sentence.push(Word::unmatched(candidate));
                position += 1;
                break;
            }

            window_end -= 1;
        }
    }

    log::debug!(
        "segmented {} chars into {} words ({} matched)",
        len,
        sentence.len(),
        sentence.matched_count()
    );
    sentence
}

/// Direct matches first, then conjugated ones
fn definitions(
    index: &DictionaryIndex,
    table: &ConjugationTable,
    config: SegmenterConfig,
    candidate: &str,
) -> Vec<MatchedDefinition> {
    let found = lookup_surface(index, table, candidate);
    if found.is_empty() && config.fold_katakana && kana::has_katakana(candidate) {
        return lookup_surface(index, table, &kana::kata_to_hira(candidate));
    }
    found
}

fn lookup_surface(
    index: &DictionaryIndex,
    table: &ConjugationTable,
    surface: &str,
) -> Vec<MatchedDefinition> {
    let mut found: Vec<MatchedDefinition> = index
        .lookup(surface)
        .iter()
        .cloned()
        .map(MatchedDefinition::direct)
        .collect();
    found.extend(conjugation::resolve(index, table.rules(), surface));
    found
}
