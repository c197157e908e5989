//! Options and plumbing shared by the conversion commands

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use nahuatl_engine::{
    BatchOutput, BatchProcessor, EngineConfig, ErrorPolicy, ExecutionPreference,
    PunctuationPolicy, Record, SaltilloGlyph, SourceLine,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;

/// Arguments shared by `g2p` and `p2g`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Saltillo glyph used in phoneme tags
    #[arg(long, value_name = "GLYPH", value_parser = SaltilloGlyph::from_str)]
    pub saltillo: Option<SaltilloGlyph>,

    /// What to do with lines that fail to convert
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<OnError>,

    /// Force parallel processing even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (0 = all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Engine configuration file (TOML); flags override its values
    #[arg(short, long, value_name = "FILE", env = "NAHUATL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array of {line, input, output} records
    Json,
}

/// Failure handling selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OnError {
    /// Stop at the first failing line
    Abort,
    /// Leave failing lines out of the output and continue
    Skip,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => ErrorPolicy::Abort,
            OnError::Skip => ErrorPolicy::Skip,
        }
    }
}

impl RunArgs {
    /// Engine configuration from `--config` with flag overrides applied
    pub fn engine_config(&self, keep_punctuation: bool) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
            None => EngineConfig::default(),
        };

        if let Some(glyph) = self.saltillo {
            config.transducer.saltillo = glyph;
        }
        if keep_punctuation {
            config.transducer.punctuation = PunctuationPolicy::PassThrough;
        }
        if let Some(policy) = self.on_error {
            config.batch.error_policy = policy.into();
        }
        if self.parallel {
            config.batch.execution_mode = ExecutionPreference::Parallel;
        }
        if let Some(threads) = self.threads {
            config.batch.threads = threads;
        }

        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Convert every file matched by `input` and write all records
    pub fn run_files<F>(
        &self,
        input: &str,
        skip_comments: bool,
        keep_punctuation: bool,
        convert: F,
    ) -> Result<()>
    where
        F: Fn(&BatchProcessor, &[SourceLine]) -> nahuatl_engine::Result<BatchOutput>,
    {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.engine_config(keep_punctuation)?;
        let processor =
            BatchProcessor::new(config).context("Failed to initialize batch processor")?;

        let files = resolve_patterns(&[input.to_string()])?;
        log::info!("Found {} file(s) to convert", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut records: Vec<Record> = Vec::new();
        for path in &files {
            let lines = FileReader::read_lines(path, skip_comments)?;
            let output = convert(&processor, &lines).map_err(|e| CliError::ConversionFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            if !output.failures.is_empty() {
                log::warn!(
                    "{}: skipped {} of {} lines",
                    path.display(),
                    output.stats.failed,
                    output.stats.lines
                );
            }

            records.extend(output.records);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();

        self.write_records(&records)
    }

    fn write_records(&self, records: &[Record]) -> Result<()> {
        let mut formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.formatter(BufWriter::new(file))
            }
            None => self.formatter(io::stdout().lock()),
        };

        for record in records {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }

    fn formatter<'a, W: io::Write + 'a>(&self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            output: None,
            format: OutputFormat::Text,
            saltillo: None,
            on_error: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_config() {
        let config = args().engine_config(false).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = args();
        args.saltillo = Some(SaltilloGlyph::GlottalFricative);
        args.on_error = Some(OnError::Skip);
        args.parallel = true;
        args.threads = Some(3);

        let config = args.engine_config(true).unwrap();
        assert_eq!(config.transducer.saltillo, SaltilloGlyph::GlottalFricative);
        assert_eq!(config.transducer.punctuation, PunctuationPolicy::PassThrough);
        assert_eq!(config.batch.error_policy, ErrorPolicy::Skip);
        assert_eq!(config.batch.execution_mode, ExecutionPreference::Parallel);
        assert_eq!(config.batch.threads, 3);
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        let mut args = args();
        args.quiet = false;
        args.verbose = 2;

        args.init_logging();
        args.init_logging();
        log::debug!("logger installed");
    }

    #[test]
    fn test_missing_config_file() {
        let mut args = args();
        args.config = Some(PathBuf::from("/nonexistent/nahuatl.toml"));

        let err = args.engine_config(false).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
