//! Markdown output formatter

use super::{describe, OutputFormatter};
use anyhow::Result;
use kotowari_core::Sentence;
use std::io::Write;

/// Markdown formatter - outputs words as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    matched_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            matched_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence, source: Option<&str>) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }

        for (i, word) in sentence.iter().enumerate() {
            if word.is_matched() {
                let definitions: Vec<String> = word.definitions.iter().map(describe).collect();
                writeln!(
                    self.writer,
                    "{}. **{}**: {}",
                    i + 1,
                    word.original,
                    definitions.join("; ")
                )?;
            } else {
                writeln!(self.writer, "{}. {}", i + 1, word.original)?;
            }
        }
        writeln!(self.writer)?;

        self.word_count += sentence.len();
        self.matched_count += sentence.matched_count();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {} ({} matched)*",
            self.word_count, self.matched_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
