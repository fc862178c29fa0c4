//! Feature modules, leaves first
//!
//! - node_store: coordinate → ID with tolerance-based deduplication
//! - attributes: per-node named string values
//! - cost_graph: multi-channel adjacency and CSR snapshots
//! - cost_algorithms: derived cost channels
//! - pathfinding: Dijkstra variants over snapshots

pub mod attributes;
pub mod cost_algorithms;
pub mod cost_graph;
pub mod node_store;
pub mod pathfinding;
