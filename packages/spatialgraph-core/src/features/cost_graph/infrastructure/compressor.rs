//! Adjacency rows → CSR
//!
//! Rows are sorted in parallel (one task per row), then concatenated in row
//! order, so the output is identical regardless of worker count.

use ahash::AHashMap;
use rayon::prelude::*;

use crate::features::cost_graph::domain::CsrSnapshot;
use crate::shared::models::NodeId;

pub(super) fn compress_rows(
    channel: &str,
    version: u64,
    rows: &[AHashMap<NodeId, f32>],
    num_nodes: usize,
) -> CsrSnapshot {
    let sorted_rows: Vec<Vec<(NodeId, f32)>> = rows
        .par_iter()
        .map(|row| {
            let mut entries: Vec<(NodeId, f32)> = row.iter().map(|(&c, &w)| (c, w)).collect();
            entries.sort_unstable_by_key(|&(child, _)| child);
            entries
        })
        .collect();

    let nnz: usize = sorted_rows.iter().map(Vec::len).sum();
    let mut values = Vec::with_capacity(nnz);
    let mut column_indices = Vec::with_capacity(nnz);
    let mut row_offsets = Vec::with_capacity(num_nodes + 1);
    row_offsets.push(0);

    for r in 0..num_nodes {
        if let Some(row) = sorted_rows.get(r) {
            for &(child, cost) in row {
                column_indices.push(child);
                values.push(cost);
            }
        }
        row_offsets.push(values.len());
    }

    CsrSnapshot::from_parts(
        channel.to_string(),
        version,
        num_nodes,
        values,
        column_indices,
        row_offsets,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sorted_and_padded() {
        let mut r0 = AHashMap::new();
        r0.insert(3, 1.0);
        r0.insert(1, 2.0);
        let rows = vec![r0, AHashMap::new()];

        // Four nodes but only two stored rows
        let csr = compress_rows("", 7, &rows, 4);
        assert_eq!(csr.version(), 7);
        assert_eq!(csr.column_indices(), &[1, 3]);
        assert_eq!(csr.values(), &[2.0, 1.0]);
        assert_eq!(csr.row_offsets(), &[0, 2, 2, 2, 2]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = compress_rows("", 0, &[], 0);
        assert_eq!(csr.nnz(), 0);
        assert_eq!(csr.row_offsets(), &[0]);
    }
}
