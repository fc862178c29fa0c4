//! CostGraph - multi-channel directed graph with CSR snapshots
//!
//! ## Model
//! - One node universe (owned `NodeStore`) shared by every cost channel
//! - The default channel (name `""`) defines the edge set; it is created
//!   implicitly by the first edge insertion
//! - Alternate channels assign different costs to default-channel edges only
//! - `compress` produces an immutable, versioned `CsrSnapshot` per channel;
//!   any later mutation of that channel makes earlier snapshots stale
//!
//! ## Concurrency
//! Mutation takes `&mut self`, so the single-writer discipline is enforced by
//! the borrow checker. Snapshots are `Arc`-shared and freely readable from
//! any thread.

pub mod domain;
pub mod infrastructure;

pub use domain::{Aggregation, CsrSnapshot, Edge};
pub use infrastructure::CostGraph;
