use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::Result;
use crate::features::cost_graph::{CostGraph, Edge};
use crate::shared::constants::DEFAULT_CHANNEL;
use crate::shared::models::Coordinate;

/// Which endpoint's attribute becomes an edge's cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Use the child node's attribute
    Incoming,
    /// Use the parent node's attribute
    Outgoing,
    /// Add the parent's and child's attributes
    Both,
}

/// A replaceable per-edge cost strategy
///
/// `cost` sees both endpoint positions and the edge's default-channel cost.
/// Returning `None` leaves the edge out of the derived channel.
pub trait CostFunction: Send + Sync {
    /// Channel the results are stored under
    fn channel(&self) -> &str;

    fn cost(&self, parent: &Coordinate, child: &Coordinate, default_cost: f32) -> Option<f32>;
}

/// Evaluate `function` over every default-channel edge and store the results
///
/// Edges touching a coordinate-less node are skipped. The target channel is
/// rebuilt from scratch on every call. Returns the number of edges written.
pub fn apply_cost_function(graph: &mut CostGraph, function: &dyn CostFunction) -> Result<usize> {
    let snapshot = graph.compress(DEFAULT_CHANNEL)?;
    let positions = graph.node_store().positions();

    let default_edges: Vec<Edge> = snapshot.edges().collect();
    let derived: Vec<Edge> = default_edges
        .par_iter()
        .filter_map(|edge| {
            let parent = positions.get(edge.parent).copied().flatten()?;
            let child = positions.get(edge.child).copied().flatten()?;
            function
                .cost(&parent, &child, edge.cost)
                .map(|cost| Edge::new(edge.parent, edge.child, cost))
        })
        .collect();

    info!(
        "Cost type '{}': {} of {} edges derived",
        function.channel(),
        derived.len(),
        default_edges.len()
    );

    graph.replace_edges(&derived, function.channel())?;
    Ok(derived.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubled;

    impl CostFunction for Doubled {
        fn channel(&self) -> &str {
            "Doubled"
        }

        fn cost(&self, _parent: &Coordinate, _child: &Coordinate, default_cost: f32) -> Option<f32> {
            Some(default_cost * 2.0)
        }
    }

    #[test]
    fn test_strategy_writes_every_positioned_edge() {
        let mut g = CostGraph::new();
        let a = Coordinate::new(0.0, 0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0, 0.0);
        g.add_edge(a, b, 1.5, "").unwrap();
        g.add_edge(b, a, 2.5, "").unwrap();
        // Coordinate-less endpoint, skipped
        g.add_edge_by_id(1, 5, 1.0, "").unwrap();

        let written = apply_cost_function(&mut g, &Doubled).unwrap();
        assert_eq!(written, 2);
        assert_eq!(g.get_cost(0, 1, "Doubled").unwrap(), Some(3.0));
        assert_eq!(g.get_cost(1, 0, "Doubled").unwrap(), Some(5.0));
        assert_eq!(g.get_cost(1, 5, "Doubled").unwrap(), None);
    }
}
