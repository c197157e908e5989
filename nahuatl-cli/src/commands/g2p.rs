//! g2p command implementation

use super::run::RunArgs;
use anyhow::Result;
use clap::Args;

/// Arguments for the g2p command
#[derive(Debug, Args)]
pub struct G2pArgs {
    /// Input file or glob pattern, one written word per line
    #[arg(value_name = "FILE/PATTERN")]
    pub input: String,

    #[command(flatten)]
    pub run: RunArgs,
}

impl G2pArgs {
    /// Execute the g2p command
    pub fn execute(&self) -> Result<()> {
        log::info!("Converting graphemes to phonemes");

        // Lines starting with '#' are comments in word lists
        self.run
            .run_files(&self.input, true, false, |processor, lines| {
                processor.run_g2p(lines)
            })
    }
}
