//! Nahuatl CLI library
//!
//! This library provides the command-line interface for converting Nahuatl
//! words between written orthographies and phoneme tags.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
