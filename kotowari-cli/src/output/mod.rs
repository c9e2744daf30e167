//! Output formatting module

use anyhow::Result;
use kotowari_core::{MatchedDefinition, Sentence};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one segmented text; `source` names the input file, if any
    fn format_sentence(&mut self, sentence: &Sentence, source: Option<&str>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One word per line with tab-separated definitions
    Text,
    /// JSON array of words with matched entries
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format with a one-line description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "one word per line, definitions separated by ' | '"),
        (OutputFormat::Json, "array of words with matched entries and rules"),
        (OutputFormat::Markdown, "numbered list of words with definitions"),
    ];

    /// Name accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Entry summary, followed by the undone rule for conjugated matches
pub fn describe(definition: &MatchedDefinition) -> String {
    match &definition.conjugation {
        Some(rule) => format!("{} ({})", definition.entry.summary(), rule.name),
        None => definition.entry.summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotowari_core::{ConjugationRule, LexiconEntry, Sense};
    use std::sync::Arc;

    #[test]
    fn test_describe_marks_conjugation() {
        let entry = Arc::new(LexiconEntry::new(
            ["食べる"],
            ["たべる"],
            vec![Sense::new(["to eat"], ["Ichidan verb"])],
        ));
        let rule = Arc::new(ConjugationRule::new("た", "る", "Ichidan verb", "Past form"));

        assert_eq!(
            describe(&MatchedDefinition::direct(Arc::clone(&entry))),
            "[食べる] [たべる] to eat"
        );
        assert_eq!(
            describe(&MatchedDefinition::conjugated(entry, rule)),
            "[食べる] [たべる] to eat (Past form)"
        );
    }

    #[test]
    fn test_format_names_round_trip_through_serde() {
        for (format, _) in OutputFormat::ALL {
            let quoted = serde_json::to_string(&format).unwrap();
            assert_eq!(quoted, format!("\"{}\"", format.name()));
        }
    }
}
