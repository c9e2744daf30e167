//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};

pub mod dictionary;
pub mod lookup;
pub mod parse;
pub mod validate;

pub use dictionary::{Dictionary, DictionaryArgs};

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split Japanese text into dictionary words
    Parse(parse::ParseArgs),

    /// Show direct and conjugated matches for one word
    Lookup(lookup::LookupArgs),

    /// Check that a lexicon and conjugation table load together
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Parse(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (format, description) in OutputFormat::ALL {
                    println!("  {:<10} {}", format.name(), description);
                }
            }
        }
        Ok(())
    }
}

/// Logging options
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct VerbosityArgs {
    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl VerbosityArgs {
    /// Default log filter for the verbosity level
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging; `RUST_LOG` takes precedence over `-v`
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let env = env_logger::Env::default().default_filter_or(self.log_level());
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            log::debug!("Logger already initialized: {e}");
        }
    }
}
