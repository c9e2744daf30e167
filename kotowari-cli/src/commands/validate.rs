//! Validate command implementation

use super::{DictionaryArgs, VerbosityArgs};
use anyhow::Result;
use clap::Args;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        let config = self.dictionary.load_config()?;
        match self.dictionary.load(&config) {
            Ok(dictionary) => {
                let segmenter = &dictionary.segmenter;
                println!("✓ Dictionary is valid!");
                println!("  Lexicon: {}", dictionary.lexicon_path.display());
                println!("  Entries: {}", dictionary.entry_count);
                println!("  Entity codes: {}", dictionary.entity_count);
                println!("  Surface forms: {}", segmenter.index().len());
                match &dictionary.conjugations_path {
                    Some(path) => println!("  Conjugation table: {}", path.display()),
                    None => println!("  Conjugation table: built-in"),
                }
                println!("  Conjugation rules: {}", segmenter.conjugations().len());
                println!(
                    "  Reading priority: {:?}",
                    segmenter.index().reading_priority()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
