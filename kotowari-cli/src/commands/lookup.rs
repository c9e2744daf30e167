//! Lookup command implementation

use super::{DictionaryArgs, VerbosityArgs};
use crate::error::CliError;
use crate::output::{create_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use kotowari_core::{MatchedDefinition, Sentence, Word};
use std::io::{self, BufWriter, Write};

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Surface form to look up, as it appears in text
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Print every spelling, reading and sense of each entry
    #[arg(short, long, conflicts_with = "format")]
    pub detailed: bool,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        let config = self.dictionary.load_config()?;
        let dictionary = self.dictionary.load(&config)?;

        let definitions = dictionary.segmenter.lookup(&self.word);
        if definitions.is_empty() {
            return Err(CliError::NoDefinitions(self.word.clone()).into());
        }
        log::info!("{} definition(s) for {}", definitions.len(), self.word);

        if self.detailed {
            let mut out = BufWriter::new(io::stdout());
            write_detailed(&mut out, &definitions)?;
            out.flush()?;
            return Ok(());
        }

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(
            format,
            Box::new(BufWriter::new(io::stdout())),
            config.output.pretty_json,
        );
        let sentence: Sentence = [Word::new(self.word.as_str(), definitions)]
            .into_iter()
            .collect();
        formatter.format_sentence(&sentence, None)?;
        formatter.finish()
    }
}

/// Numbered definitions with the undone rule and the full entry
fn write_detailed<W: Write>(out: &mut W, definitions: &[MatchedDefinition]) -> Result<()> {
    for (i, definition) in definitions.iter().enumerate() {
        match &definition.conjugation {
            Some(rule) => writeln!(
                out,
                "#{} {} (-{} from -{})",
                i + 1,
                rule.name,
                rule.ending,
                rule.base
            )?,
            None => writeln!(out, "#{}", i + 1)?,
        }
        write!(out, "{}", definition.entry.detailed())?;
        if i + 1 < definitions.len() {
            writeln!(out)?;
        }
    }
    Ok(())
}
