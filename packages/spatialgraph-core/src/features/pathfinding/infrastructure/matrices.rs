use serde::Serialize;

use crate::shared::constants::{NO_PREDECESSOR, UNREACHABLE};
use crate::shared::models::NodeId;

/// Dense all-pairs distances and predecessors, row-major
///
/// Entry `(i, j)` is at `i * size + j`. Unreachable pairs hold
/// `f32::INFINITY` / `-1`; so does the predecessor of `(i, i)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistancePredecessorMatrices {
    size: usize,
    distances: Vec<f32>,
    predecessors: Vec<i64>,
}

impl DistancePredecessorMatrices {
    pub(crate) fn from_rows(size: usize, rows: Vec<(Vec<f32>, Vec<i64>)>) -> Self {
        let mut distances = Vec::with_capacity(size * size);
        let mut predecessors = Vec::with_capacity(size * size);
        for (d, p) in rows {
            distances.extend(d);
            predecessors.extend(p);
        }
        Self {
            size,
            distances,
            predecessors,
        }
    }

    /// Number of nodes (each matrix is `size * size`)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[i64] {
        &self.predecessors
    }

    /// Shortest distance `i -> j`, `None` when unreachable or out of range
    pub fn distance(&self, i: NodeId, j: NodeId) -> Option<f32> {
        self.index(i, j)
            .map(|idx| self.distances[idx])
            .filter(|d| *d != UNREACHABLE)
    }

    /// Node preceding `j` on the shortest path from `i`
    pub fn predecessor(&self, i: NodeId, j: NodeId) -> Option<NodeId> {
        self.index(i, j)
            .map(|idx| self.predecessors[idx])
            .filter(|p| *p != NO_PREDECESSOR)
            .map(|p| p as NodeId)
    }

    /// Distance row for source `i`
    pub fn row(&self, i: NodeId) -> Option<&[f32]> {
        if i >= self.size {
            return None;
        }
        Some(&self.distances[i * self.size..(i + 1) * self.size])
    }

    fn index(&self, i: NodeId, j: NodeId) -> Option<usize> {
        (i < self.size && j < self.size).then(|| i * self.size + j)
    }
}
