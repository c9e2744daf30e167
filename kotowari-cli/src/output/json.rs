//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kotowari_core::Sentence;
use serde::Serialize;
use std::io::Write;

/// JSON formatter
///
/// A single unnamed input is written as the bare array of words. Named
/// inputs are written as an array of `{ "source", "words" }` documents.
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<Document>,
    pretty: bool,
}

/// One segmented input in JSON form
#[derive(Debug, Serialize)]
pub struct Document {
    /// Input file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Serialized words
    pub words: serde_json::Value,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter with pretty printing enabled
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
            pretty: true,
        }
    }

    /// Enable or disable pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence, source: Option<&str>) -> Result<()> {
        self.documents.push(Document {
            source: source.map(str::to_string),
            words: serde_json::to_value(sentence)?,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let documents = std::mem::take(&mut self.documents);
        match documents.as_slice() {
            [single] if single.source.is_none() => self.write_value(&single.words)?,
            _ => self.write_value(&documents)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
