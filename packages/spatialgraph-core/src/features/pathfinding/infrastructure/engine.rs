//! PathEngine - query surface over one CSR snapshot

use rayon::prelude::*;
use tracing::debug;

use super::dijkstra::{search, ShortestPathTree};
use super::matrices::DistancePredecessorMatrices;
use crate::config::ParallelConfig;
use crate::errors::{GraphError, Result};
use crate::features::cost_graph::CsrSnapshot;
use crate::features::pathfinding::domain::Path;
use crate::shared::constants::{NO_PREDECESSOR, UNREACHABLE};
use crate::shared::models::NodeId;
use crate::shared::parallel::WorkerPool;

/// Shortest-path queries against an immutable snapshot
///
/// Without a pool, batches run on rayon's global pool.
#[derive(Debug, Clone, Copy)]
pub struct PathEngine<'a> {
    snapshot: &'a CsrSnapshot,
    pool: Option<&'a WorkerPool>,
    min_parallel_batch: usize,
}

impl<'a> PathEngine<'a> {
    pub fn new(snapshot: &'a CsrSnapshot) -> Self {
        Self {
            snapshot,
            pool: None,
            min_parallel_batch: ParallelConfig::default().min_parallel_batch,
        }
    }

    /// Run batch queries on a dedicated pool
    pub fn with_pool(mut self, pool: &'a WorkerPool) -> Self {
        self.pool = Some(pool);
        self.min_parallel_batch = pool.min_parallel_batch();
        self
    }

    pub fn snapshot(&self) -> &CsrSnapshot {
        self.snapshot
    }

    pub fn num_nodes(&self) -> usize {
        self.snapshot.num_rows()
    }

    // ============================================================
    // Single-source queries
    // ============================================================

    /// Cheapest path `start -> end`, `Ok(None)` when unreachable
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<Path>> {
        self.check_id(start)?;
        self.check_id(end)?;
        Ok(self.path_unchecked(start, end))
    }

    /// Full shortest-path tree rooted at `source`
    pub fn shortest_path_tree(&self, source: NodeId) -> Result<ShortestPathTree> {
        self.check_id(source)?;
        Ok(search(self.snapshot, source, None))
    }

    // ============================================================
    // Batch queries
    // ============================================================

    /// One path per `(starts[i], ends[i])` pair, in input order
    ///
    /// Every ID is validated before any search runs.
    pub fn shortest_path_multi(
        &self,
        starts: &[NodeId],
        ends: &[NodeId],
    ) -> Result<Vec<Option<Path>>> {
        if starts.len() != ends.len() {
            return Err(GraphError::argument(format!(
                "start and end lists differ in length ({} vs {})",
                starts.len(),
                ends.len()
            )));
        }
        for &id in starts.iter().chain(ends) {
            self.check_id(id)?;
        }

        let pairs: Vec<(NodeId, NodeId)> = starts.iter().copied().zip(ends.iter().copied()).collect();
        Ok(self.run_batch(&pairs, |&(start, end)| self.path_unchecked(start, end)))
    }

    /// Path for every ordered pair, flattened source-major
    ///
    /// Slot `i * n + j` holds the path `i -> j`; the diagonal holds
    /// single-node paths.
    pub fn all_to_all(&self) -> Vec<Option<Path>> {
        let n = self.num_nodes();
        let sources: Vec<NodeId> = (0..n).collect();
        let rows = self.run_batch(&sources, |&source| {
            let tree = search(self.snapshot, source, None);
            (0..n).map(|target| tree.path_to(target)).collect::<Vec<_>>()
        });
        rows.into_iter().flatten().collect()
    }

    /// Dense distance and predecessor matrices for every ordered pair
    pub fn distance_and_predecessor_matrices(&self) -> DistancePredecessorMatrices {
        let n = self.num_nodes();
        let sources: Vec<NodeId> = (0..n).collect();
        let rows = self.run_batch(&sources, |&source| {
            let tree = search(self.snapshot, source, None);
            let distances = (0..n)
                .map(|t| tree.distance(t).map(|d| d as f32).unwrap_or(UNREACHABLE))
                .collect::<Vec<_>>();
            let predecessors = (0..n)
                .map(|t| tree.predecessor(t).map(|p| p as i64).unwrap_or(NO_PREDECESSOR))
                .collect::<Vec<_>>();
            (distances, predecessors)
        });
        DistancePredecessorMatrices::from_rows(n, rows)
    }

    // ============================================================
    // Internals
    // ============================================================

    fn path_unchecked(&self, start: NodeId, end: NodeId) -> Option<Path> {
        if start == end {
            return Some(Path::single(start));
        }
        search(self.snapshot, start, Some(end)).path_to(end)
    }

    fn check_id(&self, id: NodeId) -> Result<()> {
        if id >= self.num_nodes() {
            return Err(GraphError::argument(format!(
                "node ID {} is out of range for a graph of {} nodes",
                id,
                self.num_nodes()
            )));
        }
        Ok(())
    }

    /// Map `items` through `op`, preserving order; parallel above the threshold
    fn run_batch<T, R, F>(&self, items: &[T], op: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if items.len() < self.min_parallel_batch {
            debug!("Running {} queries sequentially", items.len());
            return items.iter().map(op).collect();
        }

        match self.pool {
            Some(pool) => {
                debug!(
                    "Running {} queries on {} workers",
                    items.len(),
                    pool.workers()
                );
                pool.install(|| items.par_iter().map(&op).collect())
            }
            None => {
                debug!(
                    "Running {} queries on the global pool ({} threads)",
                    items.len(),
                    rayon::current_num_threads()
                );
                items.par_iter().map(&op).collect()
            }
        }
    }
}
