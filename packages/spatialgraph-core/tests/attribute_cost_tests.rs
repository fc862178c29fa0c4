//! Attribute store and derived cost channel integration tests

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use spatialgraph_core::features::cost_algorithms::names;
use spatialgraph_core::{
    apply_cost_function, attrs_to_costs, calculate_and_store_cross_slope,
    calculate_and_store_energy_expenditure, Coordinate, CostFunction, CostGraph, Direction, EnergyExpenditure,
    GraphError, PathEngine,
};

fn c(x: f32, y: f32, z: f32) -> Coordinate {
    Coordinate::new(x, y, z)
}

/// 0 -> 1 -> 2 plus a shortcut 0 -> 2
fn small_graph() -> CostGraph {
    let mut g = CostGraph::new();
    g.add_edge_by_id(0, 1, 1.0, "").unwrap();
    g.add_edge_by_id(1, 2, 1.0, "").unwrap();
    g.add_edge_by_id(0, 2, 5.0, "").unwrap();
    g
}

// ============================================================================
// AttributeStore
// ============================================================================

#[test]
fn test_set_then_get_attribute() {
    let mut g = small_graph();
    g.set_attribute("Crowding", &[2, 0], &["0.5", "3"]).unwrap();
    assert_eq!(
        g.get_attribute("Crowding"),
        vec!["3".to_string(), String::new(), "0.5".to_string()]
    );
}

#[test]
fn test_set_attribute_length_mismatch() {
    let mut g = small_graph();
    let err = g.set_attribute("Crowding", &[0, 1], &["1"]).unwrap_err();
    assert!(matches!(err, GraphError::Argument(_)));
    assert!(g.get_attribute("Crowding").is_empty());
}

#[test]
fn test_set_attribute_out_of_range_writes_nothing() {
    let mut g = small_graph();
    let err = g.set_attribute("Crowding", &[0, 9], &["1", "2"]).unwrap_err();
    assert!(matches!(err, GraphError::Argument(_)));
    assert!(g.get_attribute("Crowding").is_empty());
}

#[test]
fn test_set_attribute_for_all() {
    let mut g = small_graph();
    assert!(matches!(
        g.set_attribute_for_all("Height", &[1.0, 2.0]),
        Err(GraphError::Argument(_))
    ));

    g.set_attribute_for_all("Height", &[1.5, 2.0, 3.0, 99.0]).unwrap();
    assert_eq!(g.get_attribute("Height"), vec!["1.5", "2", "3"]);
}

#[test]
fn test_export_grows_with_node_count() {
    let mut g = small_graph();
    g.set_attribute("Tag", &[1], &["x"]).unwrap();
    g.add_edge_by_id(2, 4, 1.0, "").unwrap();
    assert_eq!(g.get_attribute("Tag"), vec!["", "x", "", "", ""]);
}

#[test]
fn test_clear_attribute() {
    let mut g = small_graph();
    g.set_attribute("Tag", &[1], &["x"]).unwrap();
    assert!(g.clear_attribute("Tag"));
    assert!(!g.clear_attribute("Tag"));
    assert!(g.get_attribute("Tag").is_empty());
}

proptest! {
    #[test]
    fn prop_get_returns_what_was_set(
        entries in prop::collection::btree_map(0usize..6, "[a-z0-9]{1,4}", 0..6)
    ) {
        let mut g = CostGraph::new();
        g.add_edge_by_id(0, 5, 1.0, "").unwrap();

        let ids: Vec<usize> = entries.keys().copied().collect();
        let scores: Vec<&str> = entries.values().map(String::as_str).collect();
        g.set_attribute("Key", &ids, &scores).unwrap();

        let exported = g.get_attribute("Key");
        prop_assert_eq!(exported.len(), 6);
        for (id, value) in exported.iter().enumerate() {
            let expected = entries.get(&id).cloned().unwrap_or_default();
            prop_assert_eq!(value, &expected);
        }
    }
}

// ============================================================================
// AttrsToCosts
// ============================================================================

#[test]
fn test_attrs_to_costs_directions() {
    let mut g = small_graph();
    g.set_attribute_for_all("Score", &[1.0, 10.0, 100.0]).unwrap();

    attrs_to_costs(&mut g, "Score", "In", Direction::Incoming).unwrap();
    attrs_to_costs(&mut g, "Score", "Out", Direction::Outgoing).unwrap();
    attrs_to_costs(&mut g, "Score", "Both", Direction::Both).unwrap();

    assert_eq!(g.get_cost(0, 2, "In").unwrap(), Some(100.0));
    assert_eq!(g.get_cost(0, 2, "Out").unwrap(), Some(1.0));
    assert_eq!(g.get_cost(0, 2, "Both").unwrap(), Some(101.0));
    assert_eq!(g.get_cost(1, 2, "Both").unwrap(), Some(110.0));
}

#[test]
fn test_attrs_to_costs_skips_non_numeric() {
    let mut g = small_graph();
    g.set_attribute("Score", &[1, 2], &["4", "n/a"]).unwrap();

    let written = attrs_to_costs(&mut g, "Score", "In", Direction::Incoming).unwrap();
    assert_eq!(written, 1);
    assert_eq!(g.get_cost(0, 1, "In").unwrap(), Some(4.0));
    assert_eq!(g.get_cost(0, 2, "In").unwrap(), None);
}

#[test]
fn test_attrs_to_costs_unknown_attribute() {
    let mut g = small_graph();
    let err = attrs_to_costs(&mut g, "Missing", "In", Direction::Incoming).unwrap_err();
    assert!(err.is_key_not_found());
    assert!(!g.has_channel("In"));
}

#[test]
fn test_attrs_to_costs_rerun_drops_stale_costs() {
    let mut g = small_graph();
    g.set_attribute("Score", &[0, 1], &["1", "5"]).unwrap();
    attrs_to_costs(&mut g, "Score", "In", Direction::Incoming).unwrap();
    assert_eq!(g.get_cost(0, 1, "In").unwrap(), Some(5.0));

    g.set_attribute("Score", &[1], &["n/a"]).unwrap();
    let written = attrs_to_costs(&mut g, "Score", "In", Direction::Incoming).unwrap();
    assert_eq!(written, 0);
    assert_eq!(g.get_cost(0, 1, "In").unwrap(), None);
}

#[test]
fn test_derived_channel_changes_route() {
    let mut g = small_graph();
    // Node 1 is expensive to enter
    g.set_attribute_for_all("Penalty", &[0.0, 50.0, 1.0]).unwrap();
    attrs_to_costs(&mut g, "Penalty", "Avoid", Direction::Incoming).unwrap();

    let default = g.compress("").unwrap();
    let avoid = g.compress("Avoid").unwrap();

    let via_default = PathEngine::new(&default).shortest_path(0, 2).unwrap().unwrap();
    let via_avoid = PathEngine::new(&avoid).shortest_path(0, 2).unwrap().unwrap();
    assert_eq!(via_default.node_ids(), vec![0, 1, 2]);
    assert_eq!(via_avoid.node_ids(), vec![0, 2]);
}

// ============================================================================
// Geometric strategies
// ============================================================================

#[test]
fn test_energy_expenditure_on_flat_ground() {
    let mut g = CostGraph::new();
    g.add_edge(c(0.0, 0.0, 0.0), c(2.0, 0.0, 0.0), 2.0, "").unwrap();

    let written = calculate_and_store_energy_expenditure(&mut g).unwrap();
    assert_eq!(written, 1);
    let cost = g.get_cost(0, 1, names::ENERGY_EXPENDITURE).unwrap().unwrap();
    assert!((cost - 2.5 * 2.0).abs() < 1e-5);
}

#[test]
fn test_energy_expenditure_uphill_costs_more() {
    let up = EnergyExpenditure.cost(&c(0.0, 0.0, 0.0), &c(1.0, 0.0, 0.2), 1.0).unwrap();
    let flat = EnergyExpenditure.cost(&c(0.0, 0.0, 0.0), &c(1.0, 0.0, 0.0), 1.0).unwrap();
    assert!(up > flat);
}

#[test]
fn test_cross_slope_follows_the_terrain_beside_the_edge() {
    // A corridor heading east whose left side is raised by 1 over a run of 1
    let mut g = CostGraph::new();
    let start = c(0.0, 0.0, 0.0);
    g.add_edge(start, c(1.0, 0.0, 0.0), 1.0, "").unwrap();
    g.add_edge(start, c(0.0, 1.0, 1.0), 1.0, "").unwrap();
    g.add_edge(start, c(0.0, -1.0, 0.0), 1.0, "").unwrap();
    g.add_edge(start, c(1.0, 1.0, 0.0), 1.0, "").unwrap();

    assert_eq!(calculate_and_store_cross_slope(&mut g).unwrap(), 4);
    let east = g.get_cost(0, 1, names::CROSS_SLOPE).unwrap().unwrap();
    assert!((east - 45.0).abs() < 1e-4);
    // The diagonal neighbour has no perpendicular partner
    assert_eq!(g.get_cost(0, 4, names::CROSS_SLOPE).unwrap(), Some(0.0));

    // Levelling the raised side flattens the rebuilt channel
    let mut flat = CostGraph::new();
    flat.add_edge(start, c(1.0, 0.0, 0.0), 1.0, "").unwrap();
    flat.add_edge(start, c(0.0, 1.0, 0.0), 1.0, "").unwrap();
    calculate_and_store_cross_slope(&mut flat).unwrap();
    assert_eq!(flat.get_cost(0, 1, names::CROSS_SLOPE).unwrap(), Some(0.0));
}

struct Constant(f32);

impl CostFunction for Constant {
    fn channel(&self) -> &str {
        "Constant"
    }

    fn cost(&self, _parent: &Coordinate, _child: &Coordinate, _default_cost: f32) -> Option<f32> {
        Some(self.0)
    }
}

#[test]
fn test_custom_strategy_registers_channel() {
    let mut g = CostGraph::new();
    g.add_edge(c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), 1.0, "").unwrap();
    g.add_edge(c(1.0, 0.0, 0.0), c(2.0, 0.0, 0.0), 1.0, "").unwrap();

    assert_eq!(apply_cost_function(&mut g, &Constant(7.0)).unwrap(), 2);
    assert!(g.channel_names().contains(&"Constant".to_string()));
    assert_eq!(g.get_cost(1, 2, "Constant").unwrap(), Some(7.0));
}
