//! spatialgraph-core - spatial graph engine
//!
//! Stores a directed graph whose nodes are 3D points, keeps several named
//! cost channels over one edge set, and answers shortest-path queries over
//! immutable CSR snapshots.
//!
//! ## Architecture
//!
//! 1. **NodeStore**: coordinate → ID with tolerance-based deduplication
//! 2. **CostGraph**: default + alternate cost channels, per-channel snapshots
//! 3. **AttributeStore**: string-valued per-node attributes
//! 4. **Cost algorithms**: derive channels from attributes or geometry
//! 5. **PathEngine**: Dijkstra (single pair, batch, all pairs, matrices)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spatialgraph_core::{Coordinate, CostGraph, PathEngine};
//!
//! let mut graph = CostGraph::new();
//! graph.add_edge(Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(1.0, 0.0, 0.0), 1.0, "")?;
//! let snapshot = graph.compress("")?;
//!
//! let path = PathEngine::new(&snapshot).shortest_path(0, 1)?;
//! ```

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{ConfigError, EngineConfig, ParallelConfig, Validatable};
pub use errors::{GraphError, Result};
pub use shared::constants::{DEFAULT_CHANNEL, NODE_TOLERANCE};
pub use shared::{Coordinate, Node, NodeId, WorkerPool};

pub use features::attributes::AttributeStore;
pub use features::cost_algorithms::{
    apply_cost_function, attrs_to_costs, calculate_and_store_cross_slope,
    calculate_and_store_energy_expenditure, CostFunction, Direction, EnergyExpenditure,
};
pub use features::cost_graph::{Aggregation, CostGraph, CsrSnapshot, Edge};
pub use features::node_store::NodeStore;
pub use features::pathfinding::{
    shortest_path_between, shortest_paths_between, DistancePredecessorMatrices, Path, PathEngine,
    PathMember, ShortestPathTree,
};
