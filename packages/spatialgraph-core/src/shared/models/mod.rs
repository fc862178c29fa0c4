//! Core value types shared by every feature

mod coordinate;

pub use coordinate::Coordinate;

use serde::{Deserialize, Serialize};

/// Dense node identifier, assigned sequentially in first-seen order
pub type NodeId = usize;

/// A node of the graph
///
/// Nodes created from integer IDs alone carry no position and are never
/// matched by coordinate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Option<Coordinate>,
}

impl Node {
    pub fn new(id: NodeId, position: Option<Coordinate>) -> Self {
        Self { id, position }
    }
}
