//! Plain text output formatter

use super::{describe, OutputFormatter};
use anyhow::Result;
use kotowari_core::Sentence;
use std::io::Write;

/// Plain text formatter - one word per line
///
/// Matched words are followed by a tab and their definitions joined with
/// `" | "`; unmatched words stand alone on their line.
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence, source: Option<&str>) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        if let Some(source) = source {
            writeln!(self.writer, "==> {source} <==")?;
        }

        for word in sentence {
            if word.is_matched() {
                let definitions: Vec<String> = word.definitions.iter().map(describe).collect();
                writeln!(self.writer, "{}\t{}", word.original, definitions.join(" | "))?;
            } else {
                writeln!(self.writer, "{}", word.original)?;
            }
        }

        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotowari_core::{LexiconEntry, MatchedDefinition, Sense, Word};
    use std::sync::Arc;

    fn sentence() -> Sentence {
        let bread = Arc::new(LexiconEntry::new(
            Vec::<String>::new(),
            ["パン"],
            vec![Sense::new(["bread"], ["noun"])],
        ));
        [
            Word::new("パン", vec![MatchedDefinition::direct(bread)]),
            Word::unmatched("。"),
        ]
        .into_iter()
        .collect()
    }

    fn render(sources: &[Option<&str>]) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            for source in sources {
                formatter.format_sentence(&sentence(), *source).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_word_per_line() {
        assert_eq!(render(&[None]), "パン\t[] [パン] bread\n。\n");
    }

    #[test]
    fn test_sources_are_headed_and_separated() {
        let out = render(&[Some("a.txt"), Some("b.txt")]);
        assert_eq!(
            out,
            "==> a.txt <==\nパン\t[] [パン] bread\n。\n\n==> b.txt <==\nパン\t[] [パン] bread\n。\n"
        );
    }
}
