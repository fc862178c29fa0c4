//! Mutable storage for one cost channel

use ahash::AHashMap;
use std::sync::Arc;

use super::compressor::compress_rows;
use crate::features::cost_graph::domain::{CsrSnapshot, Edge};
use crate::shared::models::NodeId;

/// Adjacency rows plus the last snapshot built from them
#[derive(Debug, Clone)]
pub(super) struct CostChannel {
    name: String,
    rows: Vec<AHashMap<NodeId, f32>>,
    edge_count: usize,
    version: u64,
    snapshot: Option<Arc<CsrSnapshot>>,
}

impl CostChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            edge_count: 0,
            version: 0,
            snapshot: None,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Insert or overwrite, then drop the cached snapshot
    pub fn upsert(&mut self, parent: NodeId, child: NodeId, cost: f32) {
        if parent >= self.rows.len() {
            self.rows.resize_with(parent + 1, AHashMap::new);
        }
        if self.rows[parent].insert(child, cost).is_none() {
            self.edge_count += 1;
        }
        self.touch();
    }

    /// Drop every edge; the version still advances
    pub fn clear(&mut self) {
        self.rows.clear();
        self.edge_count = 0;
        self.touch();
    }

    /// Bump the version and discard the snapshot
    pub fn touch(&mut self) {
        self.version += 1;
        self.snapshot = None;
    }

    pub fn contains(&self, parent: NodeId, child: NodeId) -> bool {
        self.cost(parent, child).is_some()
    }

    pub fn cost(&self, parent: NodeId, child: NodeId) -> Option<f32> {
        self.rows.get(parent).and_then(|row| row.get(&child)).copied()
    }

    /// Outgoing edges of `parent`, ascending by child
    pub fn edges_of(&self, parent: NodeId) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .rows
            .get(parent)
            .map(|row| row.iter().map(|(&c, &w)| Edge::new(parent, c, w)).collect())
            .unwrap_or_default();
        edges.sort_unstable_by_key(|e| e.child);
        edges
    }

    /// Cached snapshot if it matches the current version and node count
    pub fn cached_snapshot(&self, num_nodes: usize) -> Option<Arc<CsrSnapshot>> {
        self.snapshot
            .as_ref()
            .filter(|s| s.num_rows() == num_nodes)
            .cloned()
    }

    /// Always builds a fresh snapshot and caches it
    pub fn rebuild(&mut self, num_nodes: usize) -> Arc<CsrSnapshot> {
        let snapshot = Arc::new(compress_rows(
            &self.name,
            self.version,
            &self.rows,
            num_nodes,
        ));
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }
}
