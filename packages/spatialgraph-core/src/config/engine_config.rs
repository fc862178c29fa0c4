//! Engine configuration types

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;
use crate::shared::parallel::WorkerPool;
use serde::{Deserialize, Serialize};

/// Batch pathfinding parallelism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,

    /// Thread stack size in MB (1..=64)
    pub stack_size_mb: usize,

    /// Batches smaller than this run on the calling thread (>= 1)
    pub min_parallel_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: 0,
            stack_size_mb: 8,
            min_parallel_batch: 8,
        }
    }
}

impl ParallelConfig {
    /// Builder-style worker count override
    pub fn num_workers(mut self, workers: usize) -> Self {
        self.num_workers = workers;
        self
    }

    pub fn min_parallel_batch(mut self, batch: usize) -> Self {
        self.min_parallel_batch = batch;
        self
    }

    /// Worker count with "auto" resolved against the machine
    pub fn resolved_workers(&self) -> usize {
        if self.num_workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.num_workers
        }
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > 256 {
            return Err(ConfigError::out_of_range(
                self.config_name(),
                "num_workers",
                self.num_workers,
                0,
                256,
                "0 starts one worker per core",
            ));
        }

        if self.stack_size_mb < 1 || self.stack_size_mb > 64 {
            return Err(ConfigError::out_of_range(
                self.config_name(),
                "stack_size_mb",
                self.stack_size_mb,
                1,
                64,
                "megabytes per batch worker stack",
            ));
        }

        if self.min_parallel_batch < 1 {
            return Err(ConfigError::out_of_range(
                self.config_name(),
                "min_parallel_batch",
                self.min_parallel_batch,
                1,
                usize::MAX,
                "1 sends every batch to the pool",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "parallel"
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub parallel: ParallelConfig,
}

impl EngineConfig {
    /// Override parallel settings
    pub fn parallel(mut self, f: impl FnOnce(ParallelConfig) -> ParallelConfig) -> Self {
        self.parallel = f(self.parallel);
        self
    }

    /// Validate, then build the worker pool described by this configuration
    pub fn worker_pool(&self) -> ConfigResult<WorkerPool> {
        self.validate()?;
        WorkerPool::from_config(&self.parallel)
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.parallel.validate()
    }

    fn config_name(&self) -> &'static str {
        "engine"
    }
}
