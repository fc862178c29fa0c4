use ahash::AHashMap;

use crate::errors::{GraphError, Result};
use crate::shared::constants::NODE_TOLERANCE;
use crate::shared::models::{Coordinate, Node, NodeId};

type Cell = (i64, i64, i64);

/// Coordinate → ID map with tolerance-based deduplication
///
/// Insertion needs `&mut self`; lookups take `&self` and may run concurrently
/// with other lookups.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    /// Indexed by ID. `None` for nodes created from an integer ID alone.
    positions: Vec<Option<Coordinate>>,
    cells: AHashMap<Cell, Vec<NodeId>>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes, including coordinate-less ones
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Grid cell of `c`, kept one step inside the i64 range so the
    /// neighbour search never overflows
    #[inline]
    fn cell_of(c: &Coordinate) -> Cell {
        let t = NODE_TOLERANCE as f64;
        let axis = |v: f32| ((v as f64 / t).floor() as i64).clamp(i64::MIN + 1, i64::MAX - 1);
        (axis(c.x), axis(c.y), axis(c.z))
    }

    /// Pure lookup. When several nodes are within tolerance the lowest ID wins.
    pub fn get_id(&self, coordinate: &Coordinate) -> Option<NodeId> {
        let (cx, cy, cz) = Self::cell_of(coordinate);
        let mut best: Option<NodeId> = None;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    for &id in ids {
                        let matches = self.positions[id]
                            .map_or(false, |p| p.within(coordinate, NODE_TOLERANCE));
                        if matches && best.map_or(true, |b| id < b) {
                            best = Some(id);
                        }
                    }
                }
            }
        }

        best
    }

    /// Return the existing ID for `coordinate`, or assign the next one
    pub fn get_or_assign_id(&mut self, coordinate: Coordinate) -> NodeId {
        if let Some(id) = self.get_id(&coordinate) {
            return id;
        }

        let id = self.positions.len();
        self.positions.push(Some(coordinate));
        self.cells
            .entry(Self::cell_of(&coordinate))
            .or_default()
            .push(id);
        id
    }

    /// Grow the ID universe so that `id` exists, padding with coordinate-less nodes
    pub fn ensure_id(&mut self, id: NodeId) -> Result<()> {
        let len = Self::required_len(id)?;
        if len > self.positions.len() {
            self.positions.resize(len, None);
        }
        Ok(())
    }

    /// Node count needed for `id` to exist
    pub fn required_len(id: NodeId) -> Result<usize> {
        id.checked_add(1)
            .ok_or_else(|| GraphError::argument(format!("Node ID {} cannot be represented", id)))
    }

    pub fn contains_id(&self, id: NodeId) -> bool {
        id < self.positions.len()
    }

    pub fn position(&self, id: NodeId) -> Option<Coordinate> {
        self.positions.get(id).copied().flatten()
    }

    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.positions.get(id).map(|p| Node::new(id, *p))
    }

    /// Every node ordered by ID
    pub fn nodes(&self) -> Vec<Node> {
        self.positions
            .iter()
            .enumerate()
            .map(|(id, p)| Node::new(id, *p))
            .collect()
    }

    /// Positions indexed by ID
    pub fn positions(&self) -> &[Option<Coordinate>] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ids_are_sequential_in_first_seen_order() {
        let mut store = NodeStore::new();
        assert_eq!(store.get_or_assign_id(Coordinate::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(store.get_or_assign_id(Coordinate::new(4.0, 5.0, 6.0)), 1);
        assert_eq!(store.get_or_assign_id(Coordinate::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(store.get_or_assign_id(Coordinate::new(7.0, 8.0, 9.0)), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_id_is_pure() {
        let mut store = NodeStore::new();
        store.get_or_assign_id(Coordinate::new(0.0, 0.0, 0.0));
        assert_eq!(store.get_id(&Coordinate::new(9.0, 9.0, 9.0)), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_match_across_cell_boundary() {
        let mut store = NodeStore::new();
        // Straddles the grid line at x = 0
        let id = store.get_or_assign_id(Coordinate::new(-0.00004, 1.0, 1.0));
        assert_eq!(store.get_id(&Coordinate::new(0.00004, 1.0, 1.0)), Some(id));
    }

    #[test]
    fn test_lowest_id_wins_on_overlap() {
        let mut store = NodeStore::new();
        let a = store.get_or_assign_id(Coordinate::new(0.0, 0.0, 0.0));
        let b = store.get_or_assign_id(Coordinate::new(0.00015, 0.0, 0.0));
        assert_ne!(a, b);
        // Within tolerance of both
        assert_eq!(store.get_id(&Coordinate::new(0.00008, 0.0, 0.0)), Some(a));
    }

    #[test]
    fn test_coordinate_less_nodes_are_never_matched() {
        let mut store = NodeStore::new();
        store.ensure_id(2).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.position(1), None);
        assert_eq!(store.node(1), Some(Node::new(1, None)));
        assert_eq!(store.get_or_assign_id(Coordinate::new(0.0, 0.0, 0.0)), 3);
    }

    #[test]
    fn test_unrepresentable_id_is_argument_error() {
        let mut store = NodeStore::new();
        assert!(matches!(store.ensure_id(usize::MAX), Err(GraphError::Argument(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow_the_grid() {
        let mut store = NodeStore::new();
        let far = Coordinate::new(1.0e15, -3.0e38, 0.0);
        let inf = Coordinate::new(f32::INFINITY, f32::NEG_INFINITY, 0.0);

        let a = store.get_or_assign_id(far);
        let b = store.get_or_assign_id(inf);
        assert_ne!(a, b);
        assert_eq!(store.get_id(&far), Some(a));
        assert_eq!(store.get_id(&Coordinate::new(-1.0e15, 0.0, 0.0)), None);
    }

    proptest! {
        #[test]
        fn prop_within_tolerance_maps_to_same_id(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            z in -100.0f32..100.0,
            dx in -0.00009f32..0.00009,
            dy in -0.00009f32..0.00009,
            dz in -0.00009f32..0.00009,
        ) {
            let mut store = NodeStore::new();
            let base = Coordinate::new(x, y, z);
            let near = Coordinate::new(x + dx, y + dy, z + dz);
            prop_assume!(base.within(&near, NODE_TOLERANCE));
            let id = store.get_or_assign_id(base);
            prop_assert_eq!(store.get_or_assign_id(near), id);
        }

        #[test]
        fn prop_beyond_tolerance_maps_to_distinct_ids(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            z in -100.0f32..100.0,
            offset in 0.001f32..10.0,
            axis in 0usize..3,
        ) {
            let mut store = NodeStore::new();
            let base = Coordinate::new(x, y, z);
            let mut far = base;
            match axis {
                0 => far.x += offset,
                1 => far.y += offset,
                _ => far.z += offset,
            }
            let a = store.get_or_assign_id(base);
            let b = store.get_or_assign_id(far);
            prop_assert_ne!(a, b);
        }
    }
}
