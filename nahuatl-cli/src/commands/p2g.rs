//! p2g command implementation

use super::run::RunArgs;
use anyhow::Result;
use clap::Args;
use nahuatl_core::Orthography;
use std::str::FromStr;

/// Arguments for the p2g command
#[derive(Debug, Args)]
pub struct P2gArgs {
    /// Input file or glob pattern, whitespace-separated phoneme tags per line
    #[arg(value_name = "FILE/PATTERN")]
    pub input: String,

    /// Target orthography: classical, launey or sep
    #[arg(value_name = "ORTHOGRAPHY", value_parser = Orthography::from_str)]
    pub orthography: Orthography,

    /// Copy `<punct>` tags to the output instead of failing on them
    #[arg(long)]
    pub keep_punctuation: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

impl P2gArgs {
    /// Execute the p2g command
    pub fn execute(&self) -> Result<()> {
        log::info!("Converting phonemes to {} graphemes", self.orthography);

        let orthography = self.orthography;
        self.run
            .run_files(&self.input, false, self.keep_punctuation, |processor, lines| {
                processor.run_p2g(lines, orthography)
            })
    }
}
