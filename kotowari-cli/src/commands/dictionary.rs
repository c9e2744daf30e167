//! Dictionary loading shared by every command

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use anyhow::Context;
use clap::Args;
use kotowari_core::{
    ConjugationTable, IndexBuilder, Lexicon, ReadingPriority, Segmenter, SegmenterConfig,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Dictionary and configuration options
#[derive(Debug, Clone, Default, Args)]
pub struct DictionaryArgs {
    /// Lexicon JSON file
    #[arg(long, value_name = "FILE", env = "KOTOWARI_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Conjugation table TOML file (default: built-in table)
    #[arg(long, value_name = "FILE")]
    pub conjugations: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "KOTOWARI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Rank only kana-only entries first among shared readings
    #[arg(long)]
    pub legacy_priority: bool,

    /// Retry unmatched katakana as hiragana
    #[arg(long)]
    pub fold_katakana: bool,
}

/// A loaded dictionary ready for segmentation
#[derive(Debug)]
pub struct Dictionary {
    /// Lexicon the index was built from
    pub lexicon_path: PathBuf,
    /// Conjugation table file, `None` for the built-in table
    pub conjugations_path: Option<PathBuf>,
    /// Number of lexicon entries
    pub entry_count: usize,
    /// Number of part-of-speech entity codes
    pub entity_count: usize,
    /// Segmenter over the built index and table
    pub segmenter: Segmenter,
}

impl DictionaryArgs {
    /// Read the configuration file named by `--config`, if any
    pub fn load_config(&self) -> CliResult<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Load the lexicon and conjugation table, flags overriding `config`
    pub fn load(&self, config: &CliConfig) -> CliResult<Dictionary> {
        let lexicon_path = self
            .lexicon
            .clone()
            .or_else(|| config.dictionary.lexicon.clone())
            .ok_or(CliError::MissingLexicon)?;
        let conjugations_path = self
            .conjugations
            .clone()
            .or_else(|| config.dictionary.conjugations.clone());

        let lexicon = Lexicon::from_file(&lexicon_path)
            .with_context(|| format!("Failed to load lexicon {}", lexicon_path.display()))?;

        let table = match &conjugations_path {
            Some(path) => ConjugationTable::from_file(path, &lexicon).with_context(|| {
                format!("Failed to load conjugation table {}", path.display())
            })?,
            None => ConjugationTable::embedded(&lexicon)
                .context("Failed to load built-in conjugation table")?,
        };

        let priority = if self.legacy_priority {
            ReadingPriority::KanjiLessFirst
        } else {
            config.dictionary.reading_priority
        };
        let segmenter_config = SegmenterConfig {
            fold_katakana: self.fold_katakana || config.processing.fold_katakana,
        };

        let entry_count = lexicon.len();
        let entity_count = lexicon.entities.len();
        let index = IndexBuilder::new()
            .reading_priority(priority)
            .build(lexicon.entries);

        log::info!(
            "Dictionary ready: {} entries, {} surface forms, {} conjugation rules",
            entry_count,
            index.len(),
            table.len()
        );
        log::debug!("Reading priority: {priority:?}, options: {segmenter_config:?}");

        Ok(Dictionary {
            lexicon_path,
            conjugations_path,
            entry_count,
            entity_count,
            segmenter: Segmenter::with_config(Arc::new(index), Arc::new(table), segmenter_config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lexicon-snippet.json")
    }

    fn args_with_lexicon() -> DictionaryArgs {
        DictionaryArgs {
            lexicon: Some(fixture()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_lexicon() {
        let err = DictionaryArgs::default()
            .load(&CliConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingLexicon)
        ));
    }

    #[test]
    fn test_load_with_builtin_table() {
        let dictionary = args_with_lexicon().load(&CliConfig::default()).unwrap();
        assert!(dictionary.conjugations_path.is_none());
        assert!(dictionary.entry_count > 0);
        assert!(dictionary.segmenter.conjugations().len() > 100);
        assert_eq!(
            dictionary.segmenter.index().reading_priority(),
            ReadingPriority::KanjiLessOrParticle
        );
    }

    #[test]
    fn test_lexicon_from_config() {
        let mut config = CliConfig::default();
        config.dictionary.lexicon = Some(fixture());
        config.processing.fold_katakana = true;

        let dictionary = DictionaryArgs::default().load(&config).unwrap();
        assert!(dictionary.segmenter.config().fold_katakana);
    }

    #[test]
    fn test_legacy_flag_overrides_config() {
        let args = DictionaryArgs {
            legacy_priority: true,
            ..args_with_lexicon()
        };
        let dictionary = args.load(&CliConfig::default()).unwrap();
        assert_eq!(
            dictionary.segmenter.index().reading_priority(),
            ReadingPriority::KanjiLessFirst
        );
    }

    #[test]
    fn test_custom_table_with_unknown_pos() {
        let temp_dir = TempDir::new().unwrap();
        let table = temp_dir.path().join("table.toml");
        fs::write(
            &table,
            "[[rules]]\nname = \"Odd form\"\nending = \"ぽ\"\nbase = \"る\"\npos = \"v9\"\n",
        )
        .unwrap();

        let args = DictionaryArgs {
            conjugations: Some(table),
            ..args_with_lexicon()
        };
        let err = args.load(&CliConfig::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to load conjugation table"));
        assert!(message.contains("v9"));
    }
}
