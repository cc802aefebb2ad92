//! Export styling configuration

use crate::graph::Attributes;
use serde::{Deserialize, Serialize};

/// Default attributes applied to every node and edge in Dot output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Emitted on the `node [...]` line
    pub node_attributes: Attributes,
    /// Emitted on the `edge [...]` line
    pub edge_attributes: Attributes,
}

impl Default for DotConfig {
    fn default() -> Self {
        let node_attributes = [
            ("color", "lightblue"),
            ("fillcolor", "lightblue"),
            ("fontcolor", "black"),
            ("shape", "record"),
            ("style", "filled, rounded"),
        ];
        let edge_attributes = [("color", "black")];

        Self {
            node_attributes: node_attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            edge_attributes: edge_attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl DotConfig {
    /// Load a configuration from JSON; missing tables keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_node_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.node_attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_edge_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.edge_attributes.insert(key.into(), value.into());
        self
    }
}
