//! Engine configuration, loadable from TOML

use crate::error::{EngineError, Result};
use nahuatl_core::TransducerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a line fails to convert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing line
    #[default]
    Abort,
    /// Record the failure and keep going
    Skip,
}

impl ErrorPolicy {
    /// Name used on the command line and in config files
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        }
    }
}

/// Requested execution strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionPreference {
    /// Pick by input size
    #[default]
    Auto,
    /// Always single-threaded
    Sequential,
    /// Always use the thread pool (falls back to sequential without the
    /// `parallel` feature)
    Parallel,
}

/// Batch-processing settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Failure handling
    pub error_policy: ErrorPolicy,
    /// Execution strategy
    pub execution_mode: ExecutionPreference,
    /// Minimum number of lines before auto mode goes parallel
    pub parallel_threshold: usize,
    /// Worker threads (0 = all cores)
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Abort,
            execution_mode: ExecutionPreference::Auto,
            parallel_threshold: 2048,
            threads: 0,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Transducer settings
    #[serde(default)]
    pub transducer: TransducerConfig,

    /// Batch settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|e| match e {
            EngineError::Config(msg) => EngineError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.batch.parallel_threshold == 0 {
            return Err(EngineError::Config(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        if self.batch.threads > 1024 {
            return Err(EngineError::Config(format!(
                "threads must be at most 1024, got {}",
                self.batch.threads
            )));
        }

        Ok(())
    }

    /// Transducer settings
    pub fn transducer_config(&self) -> TransducerConfig {
        self.transducer
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nahuatl_core::{PunctuationPolicy, SaltilloGlyph};

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.batch.parallel_threshold, 2048);
        assert_eq!(config.batch.threads, 0);
        assert_eq!(config.batch.error_policy, ErrorPolicy::Abort);
        assert_eq!(config.transducer, TransducerConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = EngineConfig::from_toml_str(
            r#"
            [transducer]
            saltillo = "glottal-fricative"
            punctuation = "pass-through"

            [batch]
            error_policy = "skip"
            execution_mode = "sequential"
            parallel_threshold = 10
            threads = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.transducer.saltillo, SaltilloGlyph::GlottalFricative);
        assert_eq!(config.transducer.punctuation, PunctuationPolicy::PassThrough);
        assert_eq!(config.batch.error_policy, ErrorPolicy::Skip);
        assert_eq!(config.batch.execution_mode, ExecutionPreference::Sequential);
        assert_eq!(config.batch.parallel_threshold, 10);
        assert_eq!(config.batch.threads, 2);
    }

    #[test]
    fn test_invalid_values() {
        let err = EngineConfig::from_toml_str("[batch]\nparallel_threshold = 0\n").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = EngineConfig::from_toml_str("[transducer]\nsaltillo = \"x\"\n").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.batch.error_policy = ErrorPolicy::Skip;

        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
