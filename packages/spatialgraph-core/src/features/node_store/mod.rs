//! NodeStore - spatial identity for graph nodes
//!
//! Maps 3D coordinates to dense integer IDs. Coordinates within
//! `NODE_TOLERANCE` of an existing node (per axis) resolve to that node's ID.
//! IDs are assigned sequentially in first-seen order and never change.
//!
//! Lookups go through a uniform grid whose cell edge equals the tolerance, so
//! any match lies in the query's cell or one of its 26 neighbours.

mod store;

pub use store::NodeStore;
