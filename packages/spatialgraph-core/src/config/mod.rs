//! Engine configuration
//!
//! The engine has a single tunable concern: how batch pathfinding distributes
//! work. Configuration is built in code (`EngineConfig::default()` plus field
//! overrides) or loaded from a versioned YAML file.
//!
//! ```rust,ignore
//! use spatialgraph_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml("engine.yaml")?;
//! let pool = config.worker_pool()?;
//! ```
//!
//! ```yaml
//! version: 1
//! parallel:
//!   num_workers: 8
//!   stack_size_mb: 8
//!   min_parallel_batch: 16
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod validation;

pub use engine_config::{EngineConfig, ParallelConfig};
pub use error::{ConfigError, ConfigResult};
pub use validation::Validatable;
