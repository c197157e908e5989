//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use nahuatl_engine::Record;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs records as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<RecordData>,
}

/// Data structure for JSON output
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    /// 1-based input line number
    pub line: usize,
    /// Input line as read
    pub input: String,
    /// Conversion result
    pub output: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        self.records.push(RecordData {
            line: record.line,
            input: record.input.clone(),
            output: record.output.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_as_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_record(&Record {
                    line: 2,
                    input: "calli".to_string(),
                    output: "k a l l i".to_string(),
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<RecordData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(
            parsed,
            vec![RecordData {
                line: 2,
                input: "calli".to_string(),
                output: "k a l l i".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
