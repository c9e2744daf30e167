//! Conjugation rules and the conjugation table
//!
//! A rule undoes one inflection by suffix substitution: strip `ending`,
//! append `base`, and accept the result only if the dictionary entry has
//! a sense tagged with `part_of_speech`. The table is loaded once and is
//! immutable afterwards.

pub mod config;
pub mod resolver;

pub use config::ConjugationConfig;
pub use resolver::resolve;

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Source of part-of-speech tags for resolving rule requirements
pub trait PosVocabulary {
    /// Map an entity code or an expanded tag to the expanded tag
    fn resolve_pos(&self, code_or_tag: &str) -> Option<&str>;
}

impl PosVocabulary for Lexicon {
    fn resolve_pos(&self, code_or_tag: &str) -> Option<&str> {
        Lexicon::resolve_pos(self, code_or_tag)
    }
}

impl PosVocabulary for BTreeMap<String, String> {
    fn resolve_pos(&self, code_or_tag: &str) -> Option<&str> {
        if let Some(tag) = self.get(code_or_tag) {
            return Some(tag.as_str());
        }
        self.values()
            .find(|tag| tag.as_str() == code_or_tag)
            .map(String::as_str)
    }
}

/// A single inflection rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationRule {
    /// Inflected suffix as it appears in text
    pub ending: String,
    /// Suffix of the dictionary form, possibly empty
    pub base: String,
    /// Expanded tag a candidate base entry must carry
    pub part_of_speech: String,
    /// Display label, e.g. "Past form"
    pub name: String,
}

impl ConjugationRule {
    /// Create a rule with an already expanded part-of-speech tag
    pub fn new(
        ending: impl Into<String>,
        base: impl Into<String>,
        part_of_speech: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            ending: ending.into(),
            base: base.into(),
            part_of_speech: part_of_speech.into(),
            name: name.into(),
        }
    }
}

/// Ordered, immutable list of conjugation rules
#[derive(Debug, Clone, Default)]
pub struct ConjugationTable {
    rules: Vec<Arc<ConjugationRule>>,
    max_slack: usize,
}

impl ConjugationTable {
    /// Create a table from pre-resolved rules
    ///
    /// Fails if any rule has an empty ending.
    pub fn new(rules: Vec<ConjugationRule>) -> Result<Self> {
        if let Some(rule) = rules.iter().find(|r| r.ending.is_empty()) {
            return Err(Error::EmptyEnding {
                rule: rule.name.clone(),
            });
        }
        let max_slack = rules
            .iter()
            .map(|r| r.ending.chars().count().saturating_sub(r.base.chars().count()))
            .max()
            .unwrap_or(0);
        Ok(Self {
            rules: rules.into_iter().map(Arc::new).collect(),
            max_slack,
        })
    }

    /// A table with no rules; only direct dictionary matches will be found
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from configuration, expanding part-of-speech codes
    ///
    /// An unknown code is fatal: a rule is never dropped or guessed.
    pub fn from_config<V: PosVocabulary + ?Sized>(
        config: &ConjugationConfig,
        vocabulary: &V,
    ) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let pos = vocabulary
                .resolve_pos(&rule.pos)
                .ok_or_else(|| Error::UnknownPartOfSpeech {
                    rule: rule.name.clone(),
                    pos: rule.pos.clone(),
                })?;
            rules.push(ConjugationRule::new(
                rule.ending.clone(),
                rule.base.clone(),
                pos,
                rule.name.clone(),
            ));
        }
        let table = Self::new(rules)?;
        log::debug!("loaded conjugation table: {} rules", table.len());
        Ok(table)
    }

    /// Parse a TOML table and resolve it against `vocabulary`
    pub fn from_toml_str<V: PosVocabulary + ?Sized>(
        toml_str: &str,
        vocabulary: &V,
    ) -> Result<Self> {
        let config = ConjugationConfig::from_toml_str(toml_str)?;
        Self::from_config(&config, vocabulary)
    }

    /// Read a TOML table file and resolve it against `vocabulary`
    pub fn from_file<V: PosVocabulary + ?Sized>(path: &Path, vocabulary: &V) -> Result<Self> {
        let toml_str = fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str, vocabulary).map_err(|e| match e {
            Error::ConjugationFormat(err) => Error::Configuration {
                path: path.display().to_string(),
                error: err.to_string(),
            },
            other => other,
        })
    }

    /// The built-in Japanese table resolved against `vocabulary`
    pub fn embedded<V: PosVocabulary + ?Sized>(vocabulary: &V) -> Result<Self> {
        Self::from_config(ConjugationConfig::embedded()?, vocabulary)
    }

    /// Rules in table order
    pub fn rules(&self) -> &[Arc<ConjugationRule>] {
        &self.rules
    }

    /// Most characters any rule's ending adds over its base
    ///
    /// A conjugated form is at most this much longer than its dictionary form.
    pub fn max_slack(&self) -> usize {
        self.max_slack
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> BTreeMap<String, String> {
        [
            ("v1", "Ichidan verb"),
            ("v5m", "Godan verb with 'mu' ending"),
            ("adj-i", "adjective (keiyoushi)"),
            ("prt", "particle"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_config_expands_codes() {
        let table = ConjugationTable::from_toml_str(
            r#"
[[rules]]
name = "Past form"
ending = "た"
base = "る"
pos = "v1"

[[rules]]
name = "Past form"
ending = "んだ"
base = "む"
pos = "Godan verb with 'mu' ending"
"#,
            &vocabulary(),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].part_of_speech, "Ichidan verb");
        assert_eq!(table.rules()[1].part_of_speech, "Godan verb with 'mu' ending");
    }

    #[test]
    fn test_unknown_pos_is_fatal() {
        let err = ConjugationTable::from_toml_str(
            r#"
[[rules]]
name = "Past form"
ending = "た"
base = "る"
pos = "v9"
"#,
            &vocabulary(),
        )
        .unwrap_err();
        match err {
            Error::UnknownPartOfSpeech { rule, pos } => {
                assert_eq!(rule, "Past form");
                assert_eq!(pos, "v9");
            }
            other => panic!("Expected UnknownPartOfSpeech, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_ending_is_fatal() {
        let rule = ConjugationRule::new("", "る", "Ichidan verb", "Bad");
        let err = ConjugationTable::new(vec![rule]).unwrap_err();
        assert!(matches!(err, Error::EmptyEnding { .. }));
    }

    #[test]
    fn test_embedded_table_needs_entities() {
        let err = ConjugationTable::embedded(&BTreeMap::<String, String>::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownPartOfSpeech { .. }));
    }

    #[test]
    fn test_max_slack() {
        let table = ConjugationTable::new(vec![
            ConjugationRule::new("た", "る", "Ichidan verb", "Past form"),
            ConjugationRule::new("かった", "い", "adjective (keiyoushi)", "Past form"),
            ConjugationRule::new("だ", "む", "Godan verb with 'mu' ending", "Short"),
        ])
        .unwrap();
        assert_eq!(table.max_slack(), 2);
        assert_eq!(ConjugationTable::empty().max_slack(), 0);
    }

    #[test]
    fn test_rule_order_preserved() {
        let table = ConjugationTable::new(vec![
            ConjugationRule::new("た", "る", "Ichidan verb", "Past form"),
            ConjugationRule::new("ない", "る", "Ichidan verb", "Negative form"),
        ])
        .unwrap();
        let names: Vec<_> = table.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Past form", "Negative form"]);
        assert!(ConjugationTable::empty().is_empty());
    }
}
