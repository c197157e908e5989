//! Batch orchestration for Nahuatl transduction
//!
//! This crate wraps [`nahuatl_core`] with a TOML-loadable configuration,
//! sequential and parallel execution strategies, and per-line error policies.

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error;
pub mod executor;

// Re-export key types
pub use batch::{BatchOutput, BatchProcessor, BatchStats, Failure, Record, SourceLine};
pub use config::{BatchConfig, EngineConfig, ErrorPolicy, ExecutionPreference};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};

// Re-export from core for convenience
pub use nahuatl_core::{
    Orthography, Phoneme, PunctuationPolicy, SaltilloGlyph, Transducer, TransducerConfig,
};
