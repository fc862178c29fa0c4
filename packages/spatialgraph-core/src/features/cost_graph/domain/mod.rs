//! Pure cost-graph models

mod snapshot;

pub use snapshot::CsrSnapshot;

use crate::shared::models::NodeId;
use serde::{Deserialize, Serialize};

/// Directed edge within one cost channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
    pub cost: f32,
}

impl Edge {
    pub fn new(parent: NodeId, child: NodeId, cost: f32) -> Self {
        Self {
            parent,
            child,
            cost,
        }
    }
}

/// How `aggregate_edge_costs` combines the edges touching a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Add the cost of all edges
    Sum,
    /// Average the cost of all edges (0 for nodes with none)
    Average,
    /// Count the number of edges
    Count,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Average => "average",
            Self::Count => "count",
        }
    }

    /// Fold an accumulated (sum, count) pair into the reported score
    pub fn finish(&self, sum: f64, count: usize) -> f32 {
        match self {
            Self::Sum => sum as f32,
            Self::Count => count as f32,
            Self::Average if count == 0 => 0.0,
            Self::Average => (sum / count as f64) as f32,
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
