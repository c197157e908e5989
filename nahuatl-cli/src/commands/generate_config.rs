//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!();
        println!("Use it with:");
        println!(
            "   nahuatl g2p words.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# nahuatl engine configuration

[transducer]
# Glyph for the saltillo in phoneme tags: "glottal-stop" (?) or
# "glottal-fricative" (h)
saltillo = "glottal-stop"

# Punctuation tags in p2g input: "reject" fails the line,
# "pass-through" copies the character to the output
punctuation = "reject"

[batch]
# On a failing line: "abort" stops, "skip" leaves the line out
error_policy = "abort"

# "auto" picks by input size; "sequential" or "parallel" force a mode
execution_mode = "auto"

# Lines needed before auto mode goes parallel
parallel_threshold = 2048

# Worker threads for parallel mode (0 = all cores)
threads = 0
"#
    }
}
