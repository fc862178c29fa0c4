//! Energy expenditure cost strategy
//!
//! Follows the metabolic cost-of-walking polynomial over
//! grade (Minetti et al., 2002):
//!
//! ```text
//! g = clamp(rise / run, -0.4, 0.4)
//! e = 280.5 g^5 - 58.7 g^4 - 76.8 g^3 + 51.9 g^2 + 19.6 g + 2.5
//! cost = e * default_cost
//! ```

use super::domain::{apply_cost_function, CostFunction};
use super::names;
use crate::errors::Result;
use crate::features::cost_graph::CostGraph;
use crate::shared::models::Coordinate;

const MAX_GRADE: f32 = 0.4;

/// Grade (rise over run) between two points, clamped to the walkable range
fn clamped_grade(parent: &Coordinate, child: &Coordinate) -> f32 {
    let run = parent.horizontal_distance_to(child);
    let rise = parent.rise_to(child);
    if run <= f32::EPSILON {
        // Vertical (or degenerate) edge
        return if rise == 0.0 {
            0.0
        } else {
            MAX_GRADE.copysign(rise)
        };
    }
    (rise / run).clamp(-MAX_GRADE, MAX_GRADE)
}

/// Metabolic energy cost of walking an edge
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyExpenditure;

impl EnergyExpenditure {
    pub fn per_unit(grade: f32) -> f32 {
        let g = grade.clamp(-MAX_GRADE, MAX_GRADE);
        280.5 * g.powi(5) - 58.7 * g.powi(4) - 76.8 * g.powi(3) + 51.9 * g.powi(2) + 19.6 * g + 2.5
    }
}

impl CostFunction for EnergyExpenditure {
    fn channel(&self) -> &str {
        names::ENERGY_EXPENDITURE
    }

    fn cost(&self, parent: &Coordinate, child: &Coordinate, default_cost: f32) -> Option<f32> {
        Some(Self::per_unit(clamped_grade(parent, child)) * default_cost)
    }
}

/// Store `EnergyExpenditure` under its well-known channel
pub fn calculate_and_store_energy_expenditure(graph: &mut CostGraph) -> Result<usize> {
    apply_cost_function(graph, &EnergyExpenditure)
}
