mod dijkstra;
mod engine;
mod matrices;

pub use dijkstra::ShortestPathTree;
pub use engine::PathEngine;
pub use matrices::DistancePredecessorMatrices;
