//! Bulletin command-line entry point

use anyhow::Result;
use bulletin_cli::commands::Commands;
use clap::Parser;

/// Re-flow generated prose into terminated, well-sized bullet points
#[derive(Debug, Parser)]
#[command(name = "bulletin", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
