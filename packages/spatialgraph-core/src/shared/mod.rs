//! Shared models, constants and the worker pool

pub mod constants;
pub mod models;
pub mod parallel;

pub use constants::*;
pub use models::{Coordinate, Node, NodeId};
pub use parallel::WorkerPool;
