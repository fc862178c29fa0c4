//! Immutable compressed sparse-row view of one cost channel
//!
//! ```text
//! row r (parent r) spans values[row_offsets[r] .. row_offsets[r + 1]]
//! column_indices holds the child IDs, ascending within each row
//! ```

use serde::Serialize;

use super::Edge;
use crate::shared::models::NodeId;

/// CSR snapshot of a channel at one point in time
///
/// Tagged with the channel name and the channel version it was built from.
/// A snapshot never changes; once its channel is mutated it is stale but
/// still valid data (see `CostGraph::is_current`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsrSnapshot {
    channel: String,
    version: u64,
    nnz: usize,
    num_rows: usize,
    num_cols: usize,
    values: Vec<f32>,
    column_indices: Vec<NodeId>,
    row_offsets: Vec<usize>,
}

impl CsrSnapshot {
    pub(crate) fn from_parts(
        channel: String,
        version: u64,
        num_nodes: usize,
        values: Vec<f32>,
        column_indices: Vec<NodeId>,
        row_offsets: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(values.len(), column_indices.len());
        debug_assert_eq!(row_offsets.len(), num_nodes + 1);
        Self {
            channel,
            version,
            nnz: values.len(),
            num_rows: num_nodes,
            num_cols: num_nodes,
            values,
            column_indices,
            row_offsets,
        }
    }

    /// Name of the source channel (`""` for the default channel)
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Channel version at compression time
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn nnz(&self) -> usize {
        self.nnz
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn column_indices(&self) -> &[NodeId] {
        &self.column_indices
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Children and costs of `row`, ascending by child. Empty for out-of-range rows.
    #[inline]
    pub fn row(&self, row: NodeId) -> (&[NodeId], &[f32]) {
        if row >= self.num_rows {
            return (&self.column_indices[..0], &self.values[..0]);
        }
        let start = self.row_offsets[row];
        let end = self.row_offsets[row + 1];
        (&self.column_indices[start..end], &self.values[start..end])
    }

    /// Point lookup by binary search within the row
    pub fn cost(&self, parent: NodeId, child: NodeId) -> Option<f32> {
        let (children, costs) = self.row(parent);
        children.binary_search(&child).ok().map(|i| costs[i])
    }

    /// Every edge in row-major order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_rows).flat_map(move |parent| {
            let (children, costs) = self.row(parent);
            children
                .iter()
                .zip(costs)
                .map(move |(&child, &cost)| Edge::new(parent, child, cost))
        })
    }

    pub fn out_degree(&self, row: NodeId) -> usize {
        self.row(row).0.len()
    }

    /// JSON view of the export layout
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
