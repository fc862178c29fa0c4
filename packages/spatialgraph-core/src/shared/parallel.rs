//! Worker pool for batch pathfinding
//!
//! Batch queries are embarrassingly parallel: every item reads the same
//! immutable snapshot and writes its own output slot. The pool only decides
//! how many threads do that work; results never depend on it.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::ParallelConfig;
use crate::shared::constants::WORKER_THREAD_PREFIX;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

/// A dedicated rayon pool plus the batch-size threshold for using it
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
    min_parallel_batch: usize,
}

impl WorkerPool {
    /// Build a pool from validated settings
    pub fn from_config(config: &ParallelConfig) -> ConfigResult<Self> {
        let workers = config.resolved_workers();

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .stack_size(config.stack_size_mb * 1024 * 1024)
            .thread_name(|i| format!("{}-{}", WORKER_THREAD_PREFIX, i))
            .build()
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;

        debug!(
            "Worker pool ready: {} workers, parallel from batch size {}",
            workers, config.min_parallel_batch
        );

        Ok(Self {
            pool,
            workers,
            min_parallel_batch: config.min_parallel_batch,
        })
    }

    /// Pool sized to every available core
    pub fn with_all_cores() -> ConfigResult<Self> {
        Self::from_config(&ParallelConfig::default())
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn min_parallel_batch(&self) -> usize {
        self.min_parallel_batch
    }

    /// Run `op` inside the pool so its rayon iterators use these workers
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers)
            .field("min_parallel_batch", &self.min_parallel_batch)
            .finish()
    }
}
