//! Error types for spatialgraph-core
//!
//! Every fallible operation in the crate surfaces one of these synchronously to
//! its caller. "No path" is not an error: pathfinding returns `Option<Path>`.

use crate::config::error::ConfigError;
use crate::shared::models::NodeId;
use thiserror::Error;

/// Main error type for graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Malformed input (length mismatches, out-of-range IDs), detected before any work starts
    #[error("Argument error: {0}")]
    Argument(String),

    /// Reference to an undefined cost channel or attribute key
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// A compression/ordering precondition is not yet satisfied
    #[error("Logic error: {0}")]
    Logic(String),

    /// Alternate-channel edge with no default-channel counterpart
    #[error("Invalid cost operation: {0}")]
    InvalidCostOperation(String),

    /// Engine configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GraphError {
    /// Create an argument error
    pub fn argument(msg: impl Into<String>) -> Self {
        GraphError::Argument(msg.into())
    }

    /// Create a key-not-found error
    pub fn key_not_found(msg: impl Into<String>) -> Self {
        GraphError::KeyNotFound(msg.into())
    }

    /// Create a logic error
    pub fn logic(msg: impl Into<String>) -> Self {
        GraphError::Logic(msg.into())
    }

    /// Create an invalid cost operation error
    pub fn invalid_cost(parent: NodeId, child: NodeId, channel: &str) -> Self {
        GraphError::InvalidCostOperation(format!(
            "edge {}->{} does not exist in the default cost type (target cost type '{}')",
            parent, child, channel
        ))
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, GraphError::KeyNotFound(_))
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cost_message_names_the_edge() {
        let err = GraphError::invalid_cost(3, 7, "EnergyExpenditure");
        let msg = err.to_string();
        assert!(msg.contains("3->7"));
        assert!(msg.contains("EnergyExpenditure"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: GraphError = ConfigError::MissingVersion.into();
        assert!(matches!(err, GraphError::Config(ConfigError::MissingVersion)));
    }
}
