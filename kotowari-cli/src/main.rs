//! kotowari command-line entry point

use clap::Parser;
use kotowari_cli::commands::Commands;
use std::process::ExitCode;

/// Dictionary-driven Japanese word segmentation
#[derive(Debug, Parser)]
#[command(name = "kotowari", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
