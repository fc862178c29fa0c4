//! Cross slope: how steeply the ground falls away across an edge
//!
//! For `parent -> child`, the parent's other neighbours whose horizontal
//! heading is perpendicular to the edge describe the terrain to either side.
//! The edge's cross slope is the steepest unsigned elevation angle (degrees)
//! from the parent to one of them, or 0 when the parent has no perpendicular
//! neighbour. Vertical edges have no heading and get no cross slope.

use rayon::prelude::*;
use tracing::info;

use super::names;
use crate::errors::Result;
use crate::features::cost_graph::{CostGraph, Edge};
use crate::shared::constants::DEFAULT_CHANNEL;
use crate::shared::models::Coordinate;

/// Largest |cos| between two headings still counted as perpendicular (about 0.6 degrees)
const PERPENDICULAR_TOLERANCE: f32 = 0.01;

/// Horizontal unit direction from `from` to `to`
fn heading(from: &Coordinate, to: &Coordinate) -> Option<(f32, f32)> {
    let run = from.horizontal_distance_to(to);
    if run <= f32::EPSILON {
        return None;
    }
    Some(((to.x - from.x) / run, (to.y - from.y) / run))
}

fn elevation_angle(from: &Coordinate, to: &Coordinate) -> f32 {
    from.rise_to(to)
        .abs()
        .atan2(from.horizontal_distance_to(to))
        .to_degrees()
}

/// Cross slope of `parent -> child` given every neighbour of `parent`
///
/// `neighbours` may include `child` itself; it is never perpendicular to its
/// own heading.
pub fn cross_slope(parent: &Coordinate, child: &Coordinate, neighbours: &[Coordinate]) -> Option<f32> {
    let (dx, dy) = heading(parent, child)?;
    let steepest = neighbours
        .iter()
        .filter(|n| {
            heading(parent, n)
                .map_or(false, |(nx, ny)| (dx * nx + dy * ny).abs() <= PERPENDICULAR_TOLERANCE)
        })
        .map(|n| elevation_angle(parent, n))
        .fold(0.0, f32::max);
    Some(steepest)
}

/// Compute the cross slope of every default-channel edge and store it under
/// `names::CROSS_SLOPE`
///
/// Rows are processed in parallel. Edges touching a coordinate-less node and
/// vertical edges are skipped; the channel is rebuilt on every call. Returns
/// the number of edges written.
pub fn calculate_and_store_cross_slope(graph: &mut CostGraph) -> Result<usize> {
    let snapshot = graph.compress(DEFAULT_CHANNEL)?;
    let positions = graph.node_store().positions();
    let position = |id: usize| positions.get(id).copied().flatten();

    let derived: Vec<Edge> = (0..snapshot.num_rows())
        .into_par_iter()
        .flat_map_iter(|parent| {
            let (children, _) = snapshot.row(parent);
            let Some(origin) = position(parent) else {
                return Vec::new();
            };
            let neighbours: Vec<Coordinate> =
                children.iter().filter_map(|&child| position(child)).collect();
            children
                .iter()
                .filter_map(|&child| {
                    let slope = cross_slope(&origin, &position(child)?, &neighbours)?;
                    Some(Edge::new(parent, child, slope))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    info!(
        "Cost type '{}': {} of {} edges derived",
        names::CROSS_SLOPE,
        derived.len(),
        snapshot.nnz()
    );

    graph.replace_edges(&derived, names::CROSS_SLOPE)?;
    Ok(derived.len())
}
