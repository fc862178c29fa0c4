use serde::{Deserialize, Serialize};

use crate::shared::models::NodeId;

/// One step of a path
///
/// `cost` is the cost of the edge leaving `node` toward the next member; the
/// last member always carries 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathMember {
    pub node: NodeId,
    pub cost: f32,
}

impl PathMember {
    pub fn new(node: NodeId, cost: f32) -> Self {
        Self { node, cost }
    }
}

/// Ordered node/cost sequence from a start node to an end node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    members: Vec<PathMember>,
}

impl Path {
    /// Build from visited nodes and the costs of the edges between them
    ///
    /// `edge_costs[i]` is the cost of `nodes[i] -> nodes[i + 1]`.
    pub(crate) fn from_nodes(nodes: &[NodeId], edge_costs: &[f32]) -> Self {
        debug_assert_eq!(edge_costs.len() + 1, nodes.len());
        let members = nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| PathMember::new(node, edge_costs.get(i).copied().unwrap_or(0.0)))
            .collect();
        Self { members }
    }

    /// Zero-cost path that starts and ends at `node`
    pub fn single(node: NodeId) -> Self {
        Self {
            members: vec![PathMember::new(node, 0.0)],
        }
    }

    pub fn members(&self) -> &[PathMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.members.first().map(|m| m.node)
    }

    pub fn end(&self) -> Option<NodeId> {
        self.members.last().map(|m| m.node)
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.members.iter().map(|m| m.node).collect()
    }

    /// Sum of every member's cost
    pub fn total_cost(&self) -> f64 {
        self.members.iter().map(|m| m.cost as f64).sum()
    }
}
