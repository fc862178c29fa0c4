// CostGraph - owning handle for one spatial graph
//
// Owns the NodeStore, the default channel, every alternate channel and the
// AttributeStore. Edge insertion resolves coordinates through the NodeStore;
// `compress` hands out immutable Arc<CsrSnapshot> values that pathfinding
// consumes without further locking.

use ahash::AHashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::channel::CostChannel;
use crate::errors::{GraphError, Result};
use crate::features::attributes::AttributeStore;
use crate::features::cost_graph::domain::{Aggregation, CsrSnapshot, Edge};
use crate::features::node_store::NodeStore;
use crate::shared::constants::{is_default_channel, DEFAULT_CHANNEL};
use crate::shared::models::{Coordinate, Node, NodeId};

/// Directed graph of 3D points with named cost channels
///
/// ## Usage
/// ```text
/// let mut graph = CostGraph::new();
/// graph.add_edge(a, b, 1.0, "")?;
/// let snapshot = graph.compress("")?;
/// let path = PathEngine::new(&snapshot).shortest_path(0, 1)?;
/// ```
#[derive(Debug, Clone)]
pub struct CostGraph {
    nodes: NodeStore,
    default_channel: CostChannel,
    alternates: AHashMap<String, CostChannel>,
    attributes: AttributeStore,
    /// Set the first time the default channel is compressed
    compressed: bool,
}

impl Default for CostGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CostGraph {
    pub fn new() -> Self {
        Self {
            nodes: NodeStore::new(),
            default_channel: CostChannel::new(DEFAULT_CHANNEL),
            alternates: AHashMap::new(),
            attributes: AttributeStore::new(),
            compressed: false,
        }
    }

    // ============================================================
    // Nodes
    // ============================================================

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Every node ordered by ID
    pub fn nodes(&self) -> Vec<Node> {
        self.nodes.nodes()
    }

    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.nodes.node(id)
    }

    /// ID of the node within tolerance of `coordinate`, if any
    pub fn get_id(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.nodes.get_id(coordinate)
    }

    pub fn node_store(&self) -> &NodeStore {
        &self.nodes
    }

    // ============================================================
    // Channel lookup
    // ============================================================

    fn channel(&self, name: &str) -> Result<&CostChannel> {
        if is_default_channel(name) {
            return Ok(&self.default_channel);
        }
        self.alternates
            .get(name)
            .ok_or_else(|| GraphError::key_not_found(format!("Cost type '{}' does not exist", name)))
    }

    fn channel_mut(&mut self, name: &str) -> Result<&mut CostChannel> {
        if is_default_channel(name) {
            return Ok(&mut self.default_channel);
        }
        self.alternates
            .get_mut(name)
            .ok_or_else(|| GraphError::key_not_found(format!("Cost type '{}' does not exist", name)))
    }

    pub fn has_channel(&self, name: &str) -> bool {
        is_default_channel(name) || self.alternates.contains_key(name)
    }

    /// Every channel name, default (`""`) first, then alternates sorted
    pub fn channel_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alternates.keys().cloned().collect();
        names.sort();
        names.insert(0, DEFAULT_CHANNEL.to_string());
        names
    }

    /// Number of distinct edges stored in a channel
    pub fn edge_count(&self, channel: &str) -> Result<usize> {
        Ok(self.channel(channel)?.edge_count())
    }

    /// Whether the default channel has ever been compressed
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    fn require_compressed(&self, channel: &str) -> Result<()> {
        if self.compressed {
            Ok(())
        } else {
            Err(GraphError::logic(format!(
                "Cost type '{}' requires the graph to be compressed first",
                channel
            )))
        }
    }

    // ============================================================
    // Edge insertion
    // ============================================================

    /// Add or overwrite the edge `parent -> child` in `channel`
    ///
    /// On the default channel unseen coordinates get new IDs. On an alternate
    /// channel both endpoints and the default-channel edge must already exist.
    pub fn add_edge(
        &mut self,
        parent: Coordinate,
        child: Coordinate,
        cost: f32,
        channel: &str,
    ) -> Result<()> {
        if is_default_channel(channel) {
            let parent_id = self.nodes.get_or_assign_id(parent);
            let child_id = self.nodes.get_or_assign_id(child);
            self.default_channel.upsert(parent_id, child_id, cost);
            return Ok(());
        }

        self.require_compressed(channel)?;
        match (self.nodes.get_id(&parent), self.nodes.get_id(&child)) {
            (Some(parent_id), Some(child_id)) => {
                self.insert_alternate(parent_id, child_id, cost, channel)
            }
            _ => Err(GraphError::InvalidCostOperation(format!(
                "edge {:?}->{:?} has an endpoint that is not in the graph (target cost type '{}')",
                parent, child, channel
            ))),
        }
    }

    /// `add_edge` with integer endpoints
    ///
    /// On the default channel IDs past the current node count extend the node
    /// universe with coordinate-less nodes.
    pub fn add_edge_by_id(
        &mut self,
        parent: NodeId,
        child: NodeId,
        cost: f32,
        channel: &str,
    ) -> Result<()> {
        if is_default_channel(channel) {
            self.nodes.ensure_id(parent.max(child))?;
            self.default_channel.upsert(parent, child, cost);
            return Ok(());
        }

        self.require_compressed(channel)?;
        self.insert_alternate(parent, child, cost, channel)
    }

    /// Insert a batch of ID-addressed edges
    ///
    /// The whole batch is validated before any edge is written. An alternate
    /// channel is created even when the batch is empty.
    pub fn add_edges(&mut self, edges: &[Edge], channel: &str) -> Result<()> {
        if is_default_channel(channel) {
            for edge in edges {
                NodeStore::required_len(edge.parent.max(edge.child))?;
            }
            for edge in edges {
                self.add_edge_by_id(edge.parent, edge.child, edge.cost, channel)?;
            }
            return Ok(());
        }

        self.write_alternate(edges, channel, false)
    }

    /// Replace the whole edge set of an alternate channel with `edges`
    ///
    /// Edges absent from `edges` are dropped from the channel. Validation is
    /// the same as `add_edges`. The default channel defines the edge set and
    /// cannot be replaced.
    pub fn replace_edges(&mut self, edges: &[Edge], channel: &str) -> Result<()> {
        if is_default_channel(channel) {
            return Err(GraphError::logic(
                "The default cost type defines the edge set and cannot be replaced",
            ));
        }
        self.write_alternate(edges, channel, true)
    }

    fn write_alternate(&mut self, edges: &[Edge], channel: &str, replace: bool) -> Result<()> {
        self.require_compressed(channel)?;
        if let Some(bad) = edges
            .iter()
            .find(|e| !self.default_channel.contains(e.parent, e.child))
        {
            return Err(GraphError::invalid_cost(bad.parent, bad.child, channel));
        }

        let target = self.alternate_entry(channel);
        if replace {
            target.clear();
        }
        for edge in edges {
            target.upsert(edge.parent, edge.child, edge.cost);
        }
        if edges.is_empty() {
            target.touch();
        }

        debug!(
            "Cost type '{}': wrote {} edges (replace: {})",
            channel,
            edges.len(),
            replace
        );
        Ok(())
    }

    fn insert_alternate(
        &mut self,
        parent: NodeId,
        child: NodeId,
        cost: f32,
        channel: &str,
    ) -> Result<()> {
        if !self.default_channel.contains(parent, child) {
            return Err(GraphError::invalid_cost(parent, child, channel));
        }
        self.alternate_entry(channel).upsert(parent, child, cost);
        Ok(())
    }

    fn alternate_entry(&mut self, channel: &str) -> &mut CostChannel {
        if !self.alternates.contains_key(channel) {
            info!("Creating cost type '{}'", channel);
        }
        self.alternates
            .entry(channel.to_string())
            .or_insert_with(|| CostChannel::new(channel))
    }

    // ============================================================
    // Compression
    // ============================================================

    /// Snapshot of `channel`'s current edge set
    ///
    /// Returns the cached snapshot when nothing changed since the last call.
    pub fn compress(&mut self, channel: &str) -> Result<Arc<CsrSnapshot>> {
        let num_nodes = self.nodes.len();
        let target = self.channel_mut(channel)?;

        let snapshot = match target.cached_snapshot(num_nodes) {
            Some(snapshot) => snapshot,
            None => {
                let snapshot = target.rebuild(num_nodes);
                debug!(
                    "Compressed cost type '{}' (version {}): {} nodes, {} edges",
                    channel,
                    snapshot.version(),
                    num_nodes,
                    snapshot.nnz()
                );
                snapshot
            }
        };

        if is_default_channel(channel) {
            self.compressed = true;
        }
        Ok(snapshot)
    }

    /// True when `snapshot` still reflects its channel's edge set
    pub fn is_current(&self, snapshot: &CsrSnapshot) -> bool {
        self.channel(snapshot.channel())
            .map(|c| c.version() == snapshot.version() && snapshot.num_rows() == self.num_nodes())
            .unwrap_or(false)
    }

    /// Per-node summary of edge costs, indexed by ID
    ///
    /// Always recompresses `channel` first. `directed` restricts each node to
    /// its incoming edges; otherwise incoming and outgoing edges are combined.
    pub fn aggregate_edge_costs(
        &mut self,
        aggregation: Aggregation,
        directed: bool,
        channel: &str,
    ) -> Result<Vec<f32>> {
        let num_nodes = self.nodes.len();
        let snapshot = self.channel_mut(channel)?.rebuild(num_nodes);
        if is_default_channel(channel) {
            self.compressed = true;
        }

        let mut sums = vec![0.0f64; num_nodes];
        let mut counts = vec![0usize; num_nodes];
        for edge in snapshot.edges() {
            sums[edge.child] += edge.cost as f64;
            counts[edge.child] += 1;
            if !directed {
                sums[edge.parent] += edge.cost as f64;
                counts[edge.parent] += 1;
            }
        }

        Ok(sums
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| aggregation.finish(sum, count))
            .collect())
    }

    // ============================================================
    // Edge queries
    // ============================================================

    /// Cost of `parent -> child` in `channel`'s snapshot, `None` if there is no such edge
    ///
    /// Reads the cached snapshot; a channel mutated since its last compression
    /// is recompressed first, so the value always matches `compress(channel)`.
    pub fn get_cost(&mut self, parent: NodeId, child: NodeId, channel: &str) -> Result<Option<f32>> {
        if !self.compressed {
            return Err(GraphError::logic(
                "The graph must be compressed before costs can be read",
            ));
        }
        Ok(self.compress(channel)?.cost(parent, child))
    }

    /// Outgoing edges of `parent` in `channel`, ascending by child
    pub fn edges_of(&self, parent: NodeId, channel: &str) -> Result<Vec<Edge>> {
        Ok(self.channel(channel)?.edges_of(parent))
    }

    // ============================================================
    // Node attributes
    // ============================================================

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn set_attribute<S: AsRef<str>>(
        &mut self,
        key: &str,
        ids: &[NodeId],
        scores: &[S],
    ) -> Result<()> {
        let node_count = self.nodes.len();
        self.attributes.set_attribute(key, ids, scores, node_count)
    }

    pub fn set_attribute_for_all<T: ToString>(&mut self, key: &str, scores: &[T]) -> Result<()> {
        let node_count = self.nodes.len();
        self.attributes.set_attribute_for_all(key, scores, node_count)
    }

    pub fn get_attribute(&self, key: &str) -> Vec<String> {
        self.attributes.get_attribute(key, self.nodes.len())
    }

    pub fn clear_attribute(&mut self, key: &str) -> bool {
        self.attributes.clear(key)
    }
}
