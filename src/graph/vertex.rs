//! Vertex implementation
//!
//! A vertex carries a key, a stable id, its degree, an attribute bag for
//! export, and the scratch state written by the walkers (color, distance,
//! parent). The scratch state belongs to the last walk only and is reset at
//! the start of every walk.

use super::types::{Attributes, Color, Degree, VertexId};

/// A vertex in the graph
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    key: K,
    id: VertexId,
    pub(crate) color: Color,
    pub(crate) distance: f64,
    /// Key of the parent vertex in the same graph, resolved through the
    /// graph's vertex map
    pub(crate) parent: Option<K>,
    pub(crate) degree: Degree,
    attributes: Attributes,
}

impl<K> Vertex<K> {
    pub(crate) fn new(key: K, id: VertexId) -> Self {
        Vertex {
            key,
            id,
            color: Color::White,
            distance: 0.0,
            parent: None,
            degree: Degree::default(),
            attributes: Attributes::new(),
        }
    }

    /// The key (value) identifying this vertex
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Distance from the source of the last walk.
    ///
    /// Hop count for BFS/DFS, cumulative edge weight for Dijkstra.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Key of the parent in the last walk's search tree
    pub fn parent(&self) -> Option<&K> {
        self.parent.as_ref()
    }

    pub fn degree(&self) -> Degree {
        self.degree
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

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    /// Clear the walk scratch state
    pub(crate) fn reset(&mut self) {
        self.color = Color::White;
        self.distance = 0.0;
        self.parent = None;
    }
}
