//! AttributeStore - named per-node string values
//!
//! Attributes are orthogonal to cost channels. They are the raw input for
//! derived-cost generation (`cost_algorithms::attrs_to_costs`).

mod store;

pub use store::AttributeStore;
