//! Output formatting module

use anyhow::Result;
use nahuatl_engine::Record;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single converted line
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
