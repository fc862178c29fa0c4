//! PathEngine - Dijkstra over CSR snapshots
//!
//! ## Queries
//! - `shortest_path`: single pair, early exit once the target settles
//! - `shortest_path_multi`: independent pairs, parallel, order-preserving
//! - `all_to_all`: every ordered pair, flattened source-major
//! - `distance_and_predecessor_matrices`: dense all-pairs result
//!
//! Unreachable targets are `None`, never errors. Every query reads one
//! immutable snapshot and writes its own output slot, so results are the same
//! for any worker count.
//!
//! Edge costs must be non-negative. Negative costs are not rejected, but the
//! results are unspecified.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{shortest_path_between, shortest_paths_between};
pub use domain::{Path, PathMember};
pub use infrastructure::{DistancePredecessorMatrices, PathEngine, ShortestPathTree};
