//! File reading utilities

use anyhow::{Context, Result};
use nahuatl_engine::SourceLine;
use std::fs;
use std::path::Path;

/// Line-oriented UTF-8 file reader
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Split text into numbered lines
    ///
    /// With `skip_comments`, lines starting with `#` are dropped; the
    /// remaining lines keep their original line numbers.
    pub fn lines(text: &str, skip_comments: bool) -> Vec<SourceLine> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !(skip_comments && line.starts_with('#')))
            .map(|(i, line)| SourceLine::new(i + 1, line))
            .collect()
    }

    /// Read a file and split it into numbered lines
    pub fn read_lines(path: &Path, skip_comments: bool) -> Result<Vec<SourceLine>> {
        let text = Self::read_text(path)?;
        Ok(Self::lines(&text, skip_comments))
    }
}
