//! Line-oriented batch conversion
//!
//! Every input line is an independent word, so lines can be converted in any
//! order and on any thread. Results are always reported in input order.

use crate::config::{EngineConfig, ErrorPolicy, ExecutionPreference};
use crate::error::{EngineError, Result};
#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;
use crate::executor::{auto_select, ExecutionMode, Executor, SequentialExecutor};
use nahuatl_core::{Error as CoreError, Orthography, Transducer};
#[cfg(feature = "parallel")]
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// One input line with its 1-based line number in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number
    pub number: usize,
    /// Line contents
    pub text: String,
}

impl SourceLine {
    /// Create a source line
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number lines consecutively from 1
    pub fn numbered<I, S>(lines: I) -> Vec<SourceLine>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| SourceLine::new(i + 1, text))
            .collect()
    }
}

/// A successfully converted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number
    pub line: usize,
    /// Input as read
    pub input: String,
    /// Conversion result
    pub output: String,
}

/// A line skipped under [`ErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// 1-based line number
    pub line: usize,
    /// Input as read
    pub input: String,
    /// Why the line failed
    pub error: CoreError,
}

/// Batch statistics
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Lines seen
    pub lines: usize,
    /// Lines converted
    pub succeeded: usize,
    /// Lines skipped
    pub failed: usize,
    /// Execution mode that was actually used
    pub mode: ExecutionMode,
    /// Wall-clock time
    pub elapsed: Duration,
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Converted lines, in input order
    pub records: Vec<Record>,
    /// Skipped lines, in input order
    pub failures: Vec<Failure>,
    /// Run statistics
    pub stats: BatchStats,
}

impl BatchOutput {
    /// Converted strings only
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.output.as_str())
    }
}

/// Converts batches of lines with a shared [`Transducer`]
#[derive(Debug)]
pub struct BatchProcessor {
    config: EngineConfig,
    transducer: Transducer,
    #[cfg(feature = "parallel")]
    parallel: OnceLock<ParallelExecutor>,
}

impl BatchProcessor {
    /// Create a processor
    ///
    /// The thread pool is built on the first batch that runs in parallel.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            transducer: Transducer::with_config(config.transducer_config()),
            config,
            #[cfg(feature = "parallel")]
            parallel: OnceLock::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Underlying transducer
    pub fn transducer(&self) -> &Transducer {
        &self.transducer
    }

    /// Convert each line, one written word per line, to phoneme tags
    pub fn run_g2p(&self, lines: &[SourceLine]) -> Result<BatchOutput> {
        let transducer = self.transducer;
        self.run(lines, move |text| {
            transducer
                .grapheme_to_phoneme(text.trim())
                .map(|t| t.to_string())
        })
    }

    /// Convert each line of whitespace-separated phoneme tags to a word
    pub fn run_p2g(&self, lines: &[SourceLine], orthography: Orthography) -> Result<BatchOutput> {
        let transducer = self.transducer;
        self.run(lines, move |text| {
            let tokens: Vec<&str> = text.split_whitespace().collect();
            transducer.phoneme_to_grapheme(&tokens, orthography)
        })
    }

    /// Execution mode for a batch of `line_count` lines
    pub fn select_mode(&self, line_count: usize) -> ExecutionMode {
        let mode = match self.config.batch.execution_mode {
            ExecutionPreference::Auto => {
                auto_select(line_count, self.config.batch.parallel_threshold)
            }
            ExecutionPreference::Sequential => ExecutionMode::Sequential,
            ExecutionPreference::Parallel => ExecutionMode::Parallel,
        };

        if mode == ExecutionMode::Parallel && !cfg!(feature = "parallel") {
            log::warn!("Parallel execution unavailable; built without the `parallel` feature");
            return ExecutionMode::Sequential;
        }
        mode
    }

    fn run<F>(&self, lines: &[SourceLine], convert: F) -> Result<BatchOutput>
    where
        F: Fn(&str) -> std::result::Result<String, CoreError> + Send + Sync,
    {
        let start = Instant::now();
        let mode = self.select_mode(lines.len());
        log::info!("Converting {} lines ({} mode)", lines.len(), mode.as_str());

        let outcomes = self.map_lines(mode, lines, |line| convert(&line.text))?;

        let mut records = Vec::with_capacity(lines.len());
        let mut failures = Vec::new();

        for (line, outcome) in lines.iter().zip(outcomes) {
            match outcome {
                Ok(output) => records.push(Record {
                    line: line.number,
                    input: line.text.clone(),
                    output,
                }),
                Err(source) => match self.config.batch.error_policy {
                    ErrorPolicy::Abort => {
                        return Err(EngineError::Line {
                            line: line.number,
                            source,
                        });
                    }
                    ErrorPolicy::Skip => {
                        log::warn!("Skipping line {}: {source}", line.number);
                        failures.push(Failure {
                            line: line.number,
                            input: line.text.clone(),
                            error: source,
                        });
                    }
                },
            }
        }

        let stats = BatchStats {
            lines: lines.len(),
            succeeded: records.len(),
            failed: failures.len(),
            mode,
            elapsed: start.elapsed(),
        };
        log::debug!(
            "Converted {} of {} lines in {:?}",
            stats.succeeded,
            stats.lines,
            stats.elapsed
        );

        Ok(BatchOutput {
            records,
            failures,
            stats,
        })
    }

    fn map_lines<T, F>(&self, mode: ExecutionMode, lines: &[SourceLine], f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&SourceLine) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        if mode == ExecutionMode::Parallel {
            return Ok(self.parallel_executor()?.map(lines, f));
        }

        #[cfg(not(feature = "parallel"))]
        let _ = mode;

        Ok(SequentialExecutor.map(lines, f))
    }

    #[cfg(feature = "parallel")]
    fn parallel_executor(&self) -> Result<&ParallelExecutor> {
        if let Some(executor) = self.parallel.get() {
            return Ok(executor);
        }

        // Concurrent first calls may each build a pool; only one is kept
        let executor = ParallelExecutor::new(self.config.batch.threads)?;
        Ok(self.parallel.get_or_init(|| executor))
    }
}
