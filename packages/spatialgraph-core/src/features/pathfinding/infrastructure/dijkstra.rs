//! Single-source Dijkstra over a CSR snapshot
//!
//! Node states move UNVISITED → FRONTIER → SETTLED. The frontier is a binary
//! heap ordered by tentative distance, ties broken by push order, so repeated
//! runs on the same snapshot visit nodes in exactly the same order.
//! Relaxation is strict (`<`): on equal distances the first-found predecessor
//! is kept.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::features::cost_graph::CsrSnapshot;
use crate::features::pathfinding::domain::Path;
use crate::shared::models::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unvisited,
    Frontier,
    Settled,
}

/// Heap entry; `Ord` is reversed so `BinaryHeap` pops the smallest distance
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    distance: f64,
    sequence: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Distances and predecessors from one source
///
/// Built by a full search (every reachable node settled) or a search that
/// stopped once its target settled; in the latter case only settled nodes
/// are final.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
    /// Cost of the edge predecessor → node
    arrival_costs: Vec<f32>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to `target`, `None` if unreachable
    pub fn distance(&self, target: NodeId) -> Option<f64> {
        self.distances
            .get(target)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Node preceding `target` on its path; `None` for the source and unreachable nodes
    pub fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        self.predecessors.get(target).copied().flatten()
    }

    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.distance(target).is_some()
    }

    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Reconstruct the path to `target`
    pub fn path_to(&self, target: NodeId) -> Option<Path> {
        if target == self.source {
            return Some(Path::single(self.source));
        }
        self.predecessor(target)?;

        let mut nodes = vec![target];
        let mut costs = Vec::new();
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            costs.push(self.arrival_costs[current]);
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        costs.reverse();
        Some(Path::from_nodes(&nodes, &costs))
    }
}

/// Run Dijkstra from `source`; stop early once `target` settles
///
/// `source` (and `target`, if given) must be `< snapshot.num_rows()`.
pub(crate) fn search(
    snapshot: &CsrSnapshot,
    source: NodeId,
    target: Option<NodeId>,
) -> ShortestPathTree {
    let n = snapshot.num_rows();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut arrival_costs = vec![0.0f32; n];
    let mut state = vec![NodeState::Unvisited; n];

    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[source] = 0.0;
    state[source] = NodeState::Frontier;
    frontier.push(FrontierEntry {
        distance: 0.0,
        sequence,
        node: source,
    });

    while let Some(entry) = frontier.pop() {
        // Superseded entry for an already-settled node
        if state[entry.node] == NodeState::Settled {
            continue;
        }
        state[entry.node] = NodeState::Settled;

        if target == Some(entry.node) {
            break;
        }

        let (children, costs) = snapshot.row(entry.node);
        for (&child, &cost) in children.iter().zip(costs) {
            if state[child] == NodeState::Settled {
                continue;
            }
            let candidate = entry.distance + cost as f64;
            if candidate < distances[child] {
                distances[child] = candidate;
                predecessors[child] = Some(entry.node);
                arrival_costs[child] = cost;
                state[child] = NodeState::Frontier;
                sequence += 1;
                frontier.push(FrontierEntry {
                    distance: candidate,
                    sequence,
                    node: child,
                });
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        predecessors,
        arrival_costs,
    }
}
