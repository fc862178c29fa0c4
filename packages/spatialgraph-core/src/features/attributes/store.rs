use ahash::AHashMap;
use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::shared::models::NodeId;

/// Named node attributes
///
/// The store does not know the node count; callers pass it so exports are
/// always sized to the current graph.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    attributes: AHashMap<String, AHashMap<NodeId, String>>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert `scores[i]` for node `ids[i]`, leaving other nodes untouched
    ///
    /// Every ID is validated before anything is written.
    pub fn set_attribute<S: AsRef<str>>(
        &mut self,
        key: &str,
        ids: &[NodeId],
        scores: &[S],
        node_count: usize,
    ) -> Result<()> {
        if ids.len() != scores.len() {
            return Err(GraphError::argument(format!(
                "The length of ids ({}) did not match the length of scores ({})",
                ids.len(),
                scores.len()
            )));
        }

        if let Some(&bad) = ids.iter().find(|&&id| id >= node_count) {
            return Err(GraphError::argument(format!(
                "Node {} does not exist (graph has {} nodes)",
                bad, node_count
            )));
        }

        let entries = self.attributes.entry(key.to_string()).or_default();
        for (&id, score) in ids.iter().zip(scores) {
            entries.insert(id, score.as_ref().to_string());
        }

        debug!("Attribute '{}': set {} scores", key, ids.len());
        Ok(())
    }

    /// Assign `scores[i]` to node `i` for every current node
    ///
    /// Extra trailing scores are ignored.
    pub fn set_attribute_for_all<T: ToString>(
        &mut self,
        key: &str,
        scores: &[T],
        node_count: usize,
    ) -> Result<()> {
        if scores.len() < node_count {
            return Err(GraphError::argument(format!(
                "Didn't provide a score for every node in the graph ({} scores for {} nodes)",
                scores.len(),
                node_count
            )));
        }

        let entries = self.attributes.entry(key.to_string()).or_default();
        for (id, score) in scores.iter().take(node_count).enumerate() {
            entries.insert(id, score.to_string());
        }

        debug!("Attribute '{}': set scores for all {} nodes", key, node_count);
        Ok(())
    }

    /// One entry per node, empty string where unset; empty if `key` is undefined
    pub fn get_attribute(&self, key: &str, node_count: usize) -> Vec<String> {
        let Some(entries) = self.attributes.get(key) else {
            return Vec::new();
        };

        (0..node_count)
            .map(|id| entries.get(&id).cloned().unwrap_or_default())
            .collect()
    }

    /// Score of a single node
    pub fn score(&self, key: &str, id: NodeId) -> Option<&str> {
        self.attributes
            .get(key)
            .and_then(|entries| entries.get(&id))
            .map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Remove the whole attribute. Returns whether it existed.
    pub fn clear(&mut self, key: &str) -> bool {
        let removed = self.attributes.remove(key).is_some();
        if removed {
            debug!("Attribute '{}' cleared", key);
        }
        removed
    }

    /// Defined attribute names, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.attributes.keys().cloned().collect();
        keys.sort();
        keys
    }
}
