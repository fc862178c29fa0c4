//! Coordinate-addressed pathfinding
//!
//! Resolves coordinates through the graph's node store, compresses the
//! requested channel (reusing the cached snapshot when it is current) and
//! delegates to `PathEngine`.

use tracing::debug;

use super::domain::Path;
use super::infrastructure::PathEngine;
use crate::errors::{GraphError, Result};
use crate::features::cost_graph::CostGraph;
use crate::shared::models::{Coordinate, NodeId};
use crate::shared::parallel::WorkerPool;

/// Cheapest path between two coordinates over `channel`
///
/// A coordinate that matches no node yields `Ok(None)`, as does an
/// unreachable target.
pub fn shortest_path_between(
    graph: &mut CostGraph,
    start: Coordinate,
    end: Coordinate,
    channel: &str,
) -> Result<Option<Path>> {
    let snapshot = graph.compress(channel)?;
    let (Some(start_id), Some(end_id)) = (graph.get_id(&start), graph.get_id(&end)) else {
        debug!("No node at {:?} or {:?}", start, end);
        return Ok(None);
    };
    PathEngine::new(&snapshot).shortest_path(start_id, end_id)
}

/// Batch form of [`shortest_path_between`], one slot per coordinate pair
pub fn shortest_paths_between(
    graph: &mut CostGraph,
    starts: &[Coordinate],
    ends: &[Coordinate],
    channel: &str,
    pool: Option<&WorkerPool>,
) -> Result<Vec<Option<Path>>> {
    if starts.len() != ends.len() {
        return Err(GraphError::argument(format!(
            "start and end lists differ in length ({} vs {})",
            starts.len(),
            ends.len()
        )));
    }

    let snapshot = graph.compress(channel)?;
    let resolved: Vec<Option<(NodeId, NodeId)>> = starts
        .iter()
        .zip(ends)
        .map(|(s, e)| Some((graph.get_id(s)?, graph.get_id(e)?)))
        .collect();

    let (pair_starts, pair_ends): (Vec<NodeId>, Vec<NodeId>) = resolved.iter().flatten().copied().unzip();
    debug!(
        "Resolved {} of {} coordinate pairs",
        pair_starts.len(),
        resolved.len()
    );

    let mut engine = PathEngine::new(&snapshot);
    if let Some(pool) = pool {
        engine = engine.with_pool(pool);
    }
    let mut found = engine.shortest_path_multi(&pair_starts, &pair_ends)?.into_iter();

    Ok(resolved
        .iter()
        .map(|pair| pair.and_then(|_| found.next().flatten()))
        .collect())
}
