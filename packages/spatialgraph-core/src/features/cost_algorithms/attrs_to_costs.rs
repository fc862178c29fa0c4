use tracing::{debug, info};

use super::domain::Direction;
use crate::errors::{GraphError, Result};
use crate::features::cost_graph::{CostGraph, Edge};
use crate::shared::constants::DEFAULT_CHANNEL;

/// Create or rebuild channel `cost_key` from the numeric values of `attribute_key`
///
/// For each default-channel edge the cost is the child's value (`Incoming`),
/// the parent's value (`Outgoing`) or their sum (`Both`). Edges whose source
/// value is missing or not a finite number are skipped. The channel's previous
/// contents are replaced, so a skipped edge has no cost afterwards. Returns
/// the number of edges written.
pub fn attrs_to_costs(
    graph: &mut CostGraph,
    attribute_key: &str,
    cost_key: &str,
    direction: Direction,
) -> Result<usize> {
    if !graph.attributes().contains(attribute_key) {
        return Err(GraphError::key_not_found(format!(
            "Attribute '{}' does not exist",
            attribute_key
        )));
    }

    let snapshot = graph.compress(DEFAULT_CHANNEL)?;
    let values: Vec<Option<f32>> = (0..graph.num_nodes())
        .map(|id| {
            graph
                .attributes()
                .score(attribute_key, id)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite())
        })
        .collect();

    let edges: Vec<Edge> = snapshot
        .edges()
        .filter_map(|edge| {
            let cost = match direction {
                Direction::Incoming => values[edge.child]?,
                Direction::Outgoing => values[edge.parent]?,
                Direction::Both => values[edge.parent]? + values[edge.child]?,
            };
            Some(Edge::new(edge.parent, edge.child, cost))
        })
        .collect();

    let skipped = snapshot.nnz() - edges.len();
    if skipped > 0 {
        debug!(
            "Attribute '{}': {} edges skipped (no numeric score)",
            attribute_key, skipped
        );
    }

    graph.replace_edges(&edges, cost_key)?;
    info!(
        "Cost type '{}' generated from attribute '{}' ({:?}): {} edges",
        cost_key,
        attribute_key,
        direction,
        edges.len()
    );
    Ok(edges.len())
}
