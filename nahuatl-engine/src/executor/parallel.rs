//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Parallel multi-threaded executor backed by a dedicated rayon pool
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: ThreadPool,
}

impl ParallelExecutor {
    /// Create an executor with `threads` workers (0 = all cores)
    pub fn new(threads: usize) -> Result<Self> {
        let threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("nahuatl-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        log::debug!("Built thread pool with {threads} workers");
        Ok(Self { pool })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn map<I, T, F>(&self, items: &[I], f: F) -> Vec<T>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> T + Send + Sync,
    {
        // Indexed collect keeps input order
        self.pool.install(|| items.par_iter().map(f).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
