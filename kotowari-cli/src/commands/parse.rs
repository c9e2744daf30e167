//! Parse command implementation

use super::{DictionaryArgs, VerbosityArgs};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use kotowari_core::{Segmenter, Sentence};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Text to segment
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Worker threads for multiple files (0 = one per CPU)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.dictionary.load_config()?;
        let dictionary = self.dictionary.load(&config)?;
        let segmenter = &dictionary.segmenter;

        let format = self.format.unwrap_or(config.output.default_format);
        let pretty = config.output.pretty_json && !self.compact;
        let mut formatter = create_formatter(format, open_output(self.output.as_deref())?, pretty);

        if let Some(text) = &self.text {
            formatter.format_sentence(&segmenter.segment(text), None)?;
        } else if self.input.is_empty() {
            log::info!("Reading from standard input");
            let text = FileReader::read_stdin()?;
            formatter.format_sentence(&segmenter.segment(&text), None)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            let threads = self.threads.unwrap_or(config.processing.threads);
            self.segment_files(segmenter, &files, threads, formatter.as_mut())?;
        }

        formatter.finish()
    }

    /// Segment every file on a worker pool, then write results in input order
    fn segment_files(
        &self,
        segmenter: &Segmenter,
        files: &[PathBuf],
        threads: usize,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let threads = match threads {
            0 => num_cpus::get(),
            n => n,
        }
        .clamp(1, files.len().max(1));
        let total_bytes: u64 = files
            .iter()
            .filter_map(|path| FileReader::file_size(path).ok())
            .sum();
        log::info!(
            "Segmenting {} file(s), {} bytes, on {} thread(s)",
            files.len(),
            total_bytes,
            threads
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let mut progress = ProgressReporter::new(self.verbosity.quiet);
        progress.init_files(files.len() as u64);

        let sentences: Vec<Sentence> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let sentence = segmenter.segment(&text);
                    progress.file_completed(&path.display().to_string());
                    Ok(sentence)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        for (path, sentence) in files.iter().zip(&sentences) {
            formatter.format_sentence(sentence, Some(&path.display().to_string()))?;
        }
        Ok(())
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
