//! `nahuatl` command-line entry point

use anyhow::Result;
use clap::Parser;
use nahuatl_cli::commands::Commands;

/// Convert Nahuatl words between orthographies and phoneme tags
#[derive(Debug, Parser)]
#[command(name = "nahuatl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
