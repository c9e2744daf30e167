//! Conjugation resolution
//!
//! Finds every way a candidate could be an inflected form of an indexed
//! entry. Each rule is tried; results are concatenated in table order.

use super::ConjugationRule;
use crate::dictionary::DictionaryIndex;
use crate::sentence::MatchedDefinition;
use std::sync::Arc;

/// Resolve `candidate` against every rule in `rules`
///
/// For a rule whose ending is a suffix of `candidate`, the ending is
/// replaced by the rule's base and the result is looked up. Each returned
/// entry with a sense carrying the rule's part of speech yields one match,
/// in index order. Never fails; no match is an empty vector.
pub fn resolve(
    index: &DictionaryIndex,
    rules: &[Arc<ConjugationRule>],
    candidate: &str,
) -> Vec<MatchedDefinition> {
    let mut matches = Vec::new();
    let mut base_form = String::new();

    for rule in rules {
        // `strip_suffix` on `str` only matches on character boundaries
        let Some(stem) = candidate.strip_suffix(rule.ending.as_str()) else {
            continue;
        };

        base_form.clear();
        base_form.push_str(stem);
        base_form.push_str(&rule.base);

        for entry in index.lookup(&base_form) {
            if entry.has_pos(&rule.part_of_speech) {
                matches.push(MatchedDefinition::conjugated(
                    Arc::clone(entry),
                    Arc::clone(rule),
                ));
            }
        }
    }

    if !matches.is_empty() {
        log::trace!("{candidate}: {} conjugated matches", matches.len());
    }
    matches
}
