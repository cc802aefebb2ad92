//! Edge implementation
//!
//! An edge joins two vertex keys and carries a weight (default 0) and an
//! attribute bag. For undirected graphs one record stands for both
//! directions; matching is done through [`Edge::matches`].

use super::types::{Attributes, EdgeId, GraphKind};

/// An edge in the graph
#[derive(Debug, Clone)]
pub struct Edge<K> {
    id: EdgeId,
    from: K,
    to: K,
    weight: f64,
    attributes: Attributes,
}

impl<K: PartialEq> Edge<K> {
    pub(crate) fn new(id: EdgeId, from: K, to: K) -> Self {
        Edge {
            id,
            from,
            to,
            weight: 0.0,
            attributes: Attributes::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoint the edge was inserted from
    pub fn from(&self) -> &K {
        &self.from
    }

    /// Endpoint the edge was inserted to
    pub fn to(&self) -> &K {
        &self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Set an attribute, returning the previous value
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if this edge goes FROM `from` TO `to`
    pub fn joins(&self, from: &K, to: &K) -> bool {
        self.from == *from && self.to == *to
    }

    /// Check if this edge connects two keys in either direction
    pub fn connects(&self, a: &K, b: &K) -> bool {
        self.joins(a, b) || self.joins(b, a)
    }

    /// Check if this edge touches `key` at either end
    pub fn touches(&self, key: &K) -> bool {
        self.from == *key || self.to == *key
    }

    /// Edge matching under the semantics of `kind`
    pub fn matches(&self, kind: GraphKind, from: &K, to: &K) -> bool {
        match kind {
            GraphKind::Directed => self.joins(from, to),
            GraphKind::Undirected => self.connects(from, to),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
