//! Engine error types

use nahuatl_core::Error as CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A single input line failed to convert
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the input
        line: usize,
        /// The transducer error for that line
        #[source]
        source: CoreError,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Thread pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_line_error_keeps_source() {
        let err = EngineError::Line {
            line: 3,
            source: CoreError::UnrecognizedGrapheme {
                grapheme: 'ẅ',
                position: 1,
            },
        };

        assert!(err.to_string().starts_with("line 3: "));
        assert!(err.source().is_some());
    }
}
