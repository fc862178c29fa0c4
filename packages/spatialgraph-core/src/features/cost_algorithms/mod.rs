//! CostAlgorithms - derived cost channels
//!
//! Every algorithm here reads the default channel, computes a new cost per
//! edge and stores the result as an alternate channel of the same graph.
//!
//! - `attrs_to_costs`: costs from numeric node attributes
//! - `apply_cost_function`: costs from any `CostFunction` strategy
//! - `EnergyExpenditure`: built-in per-edge strategy
//! - `calculate_and_store_cross_slope`: built-in pass over each node's
//!   neighbourhood
//!
//! Built-ins store their results under the well-known names in `names`.

mod attrs_to_costs;
mod cross_slope;
mod domain;
mod energy;

pub use attrs_to_costs::attrs_to_costs;
pub use domain::{apply_cost_function, CostFunction, Direction};
pub use cross_slope::{calculate_and_store_cross_slope, cross_slope};
pub use energy::{calculate_and_store_energy_expenditure, EnergyExpenditure};

/// Channel names written by the built-in strategies
pub mod names {
    pub const ENERGY_EXPENDITURE: &str = "EnergyExpenditure";
    pub const CROSS_SLOPE: &str = "CrossSlope";
}
