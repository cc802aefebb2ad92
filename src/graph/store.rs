//! In-memory graph storage
//!
//! Layout:
//! - vertices: key -> Vertex (insertion ordered)
//! - edges: flat list of edge records, one per edge (one per pair for
//!   undirected graphs)
//! - adjacency: key -> ordered list of neighbor keys
//!
//! Vertex lookups and adjacency lookups are O(1); edge lookups scan the edge
//! list, which is O(E).

use super::edge::Edge;
use super::types::{EdgeId, GraphKind, VertexId};
use super::vertex::Vertex;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// Bounds required of a vertex key
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexKey for T {}

/// A directed or undirected graph keyed by `K`
///
/// Cloning a graph copies vertices, edges, adjacency lists and attribute
/// bags into independent storage. Parent links are keys, so in the clone
/// they resolve to the clone's own vertices.
#[derive(Debug, Clone)]
pub struct Graph<K: VertexKey> {
    kind: GraphKind,

    vertices: IndexMap<K, Vertex<K>>,

    edges: Vec<Edge<K>>,

    adjacency: IndexMap<K, Vec<K>>,

    next_vertex_id: u64,

    next_edge_id: u64,
}

impl<K: VertexKey> Graph<K> {
    /// Create a new empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            vertices: IndexMap::new(),
            edges: Vec::new(),
            adjacency: IndexMap::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Add a vertex, or return the existing one with the same key
    pub fn add_vertex(&mut self, key: K) -> &mut Vertex<K> {
        match self.vertices.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let id = VertexId::new(self.next_vertex_id);
                self.next_vertex_id += 1;
                self.adjacency.insert(entry.key().clone(), Vec::new());
                trace!("Added vertex {:?} with id {}", entry.key(), id);
                let vertex = Vertex::new(entry.key().clone(), id);
                entry.insert(vertex)
            }
        }
    }

    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertices.get(key)
    }

    pub fn vertex_mut(&mut self, key: &K) -> Option<&mut Vertex<K>> {
        self.vertices.get_mut(key)
    }

    pub fn vertex_exists(&self, key: &K) -> bool {
        self.vertices.contains_key(key)
    }

    /// Delete a vertex together with every edge touching it
    pub fn delete_vertex(&mut self, key: &K) {
        if !self.vertex_exists(key) {
            return;
        }

        let incident: Vec<(K, K)> = self
            .edges
            .iter()
            .filter(|e| e.touches(key))
            .map(|e| (e.from().clone(), e.to().clone()))
            .collect();

        for (from, to) in incident {
            self.delete_edge(&from, &to);
        }

        self.vertices.shift_remove(key);
        self.adjacency.shift_remove(key);

        // Parent links are resolved by key; drop the ones left dangling
        for vertex in self.vertices.values_mut() {
            if vertex.parent.as_ref() == Some(key) {
                vertex.parent = None;
            }
        }

        trace!("Deleted vertex {:?}", key);
    }

    /// Add an edge between `from` and `to`, creating missing endpoints.
    ///
    /// Adding an edge that already exists returns the existing edge
    /// unchanged.
    pub fn add_edge(&mut self, from: K, to: K) -> &mut Edge<K> {
        if let Some(idx) = self.edge_position(&from, &to) {
            return &mut self.edges[idx];
        }

        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        self.link(&from, &to);

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        trace!("Added edge {:?} -> {:?} with id {}", from, to, id);

        let idx = self.edges.len();
        self.edges.push(Edge::new(id, from, to));
        &mut self.edges[idx]
    }

    /// Add an edge with the given weight.
    ///
    /// The weight only applies to a newly created edge; an existing edge is
    /// returned unchanged.
    pub fn add_weighted_edge(&mut self, from: K, to: K, weight: f64) -> &mut Edge<K> {
        if let Some(idx) = self.edge_position(&from, &to) {
            return &mut self.edges[idx];
        }

        let edge = self.add_edge(from, to);
        edge.set_weight(weight);
        edge
    }

    pub fn get_edge(&self, from: &K, to: &K) -> Option<&Edge<K>> {
        self.edge_position(from, to).map(|idx| &self.edges[idx])
    }

    pub fn edge_mut(&mut self, from: &K, to: &K) -> Option<&mut Edge<K>> {
        self.edge_position(from, to).map(move |idx| &mut self.edges[idx])
    }

    pub fn edge_exists(&self, from: &K, to: &K) -> bool {
        self.edge_position(from, to).is_some()
    }

    /// Delete the edge between `from` and `to`, reversing its adjacency and
    /// degree updates
    pub fn delete_edge(&mut self, from: &K, to: &K) {
        let Some(idx) = self.edge_position(from, to) else {
            return;
        };

        let edge = self.edges.remove(idx);
        self.unlink(edge.from(), edge.to());
        trace!("Deleted edge {:?} -> {:?}", edge.from(), edge.to());
    }

    /// Keys of the direct neighbors of `key`, in insertion order
    pub fn neighbors(&self, key: &K) -> &[K] {
        self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neighbor_vertices(&self, key: &K) -> Vec<&Vertex<K>> {
        self.neighbors(key)
            .iter()
            .filter_map(|k| self.vertices.get(k))
            .collect()
    }

    /// Resolve the parent link of `key` to the parent vertex
    pub fn parent_of(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertices
            .get(key)
            .and_then(|v| v.parent())
            .and_then(|p| self.vertices.get(p))
    }

    /// Reset color, distance and parent of every vertex
    pub fn reset_attributes(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset();
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K>> {
        self.vertices.values()
    }

    pub fn vertex_keys(&self) -> impl Iterator<Item = &K> {
        self.vertices.keys()
    }

    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn vertex_state(&self, key: &K) -> &Vertex<K> {
        self.vertices
            .get(key)
            .unwrap_or_else(|| panic!("vertex {:?} missing from adjacency index", key))
    }

    pub(crate) fn vertex_state_mut(&mut self, key: &K) -> &mut Vertex<K> {
        self.vertices
            .get_mut(key)
            .unwrap_or_else(|| panic!("vertex {:?} missing from adjacency index", key))
    }

    fn edge_position(&self, from: &K, to: &K) -> Option<usize> {
        self.edges.iter().position(|e| e.matches(self.kind, from, to))
    }

    fn link(&mut self, from: &K, to: &K) {
        let self_loop = from == to;

        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to.clone());
        }
        if !self.is_directed() && !self_loop {
            if let Some(list) = self.adjacency.get_mut(to) {
                list.push(from.clone());
            }
        }

        match self.kind {
            GraphKind::Directed => {
                self.vertex_state_mut(from).degree.outgoing += 1;
                self.vertex_state_mut(to).degree.incoming += 1;
            }
            GraphKind::Undirected => {
                let degree = &mut self.vertex_state_mut(from).degree;
                degree.incoming += 1;
                degree.outgoing += 1;
                if !self_loop {
                    let degree = &mut self.vertex_state_mut(to).degree;
                    degree.incoming += 1;
                    degree.outgoing += 1;
                }
            }
        }
    }

    fn unlink(&mut self, from: &K, to: &K) {
        let self_loop = from == to;

        remove_first(self.adjacency.get_mut(from), to);
        if !self.is_directed() && !self_loop {
            remove_first(self.adjacency.get_mut(to), from);
        }

        match self.kind {
            GraphKind::Directed => {
                let degree = &mut self.vertex_state_mut(from).degree;
                degree.outgoing = degree.outgoing.saturating_sub(1);
                let degree = &mut self.vertex_state_mut(to).degree;
                degree.incoming = degree.incoming.saturating_sub(1);
            }
            GraphKind::Undirected => {
                let degree = &mut self.vertex_state_mut(from).degree;
                degree.incoming = degree.incoming.saturating_sub(1);
                degree.outgoing = degree.outgoing.saturating_sub(1);
                if !self_loop {
                    let degree = &mut self.vertex_state_mut(to).degree;
                    degree.incoming = degree.incoming.saturating_sub(1);
                    degree.outgoing = degree.outgoing.saturating_sub(1);
                }
            }
        }
    }
}

fn remove_first<K: PartialEq>(list: Option<&mut Vec<K>>, key: &K) {
    if let Some(list) = list {
        if let Some(pos) = list.iter().position(|k| k == key) {
            list.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Color, Degree};

    fn degree(incoming: usize, outgoing: usize) -> Degree {
        Degree { incoming, outgoing }
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g: Graph<i32> = Graph::undirected();
        let id = g.add_vertex(1).id();
        g.add_vertex(1).set_attribute("label", "one");

        assert_eq!(g.add_vertex(1).id(), id);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.get_vertex(&1).unwrap().get_attribute("label"), Some("one"));
    }

    #[test]
    fn test_vertex_ids_are_monotonic() {
        let mut g: Graph<&str> = Graph::directed();
        let a = g.add_vertex("a").id();
        let b = g.add_vertex("b").id();
        g.delete_vertex(&"a");
        let c = g.add_vertex("c").id();

        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut g: Graph<i32> = Graph::directed();
        g.add_edge(1, 2);

        assert!(g.vertex_exists(&1));
        assert!(g.vertex_exists(&2));
        assert_eq!(g.neighbors(&1), &[2]);
        assert!(g.neighbors(&2).is_empty());
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut g: Graph<i32> = Graph::undirected();
        let id = {
            let edge = g.add_weighted_edge(1, 2, 3.0);
            edge.set_attribute("color", "red");
            edge.id()
        };

        let again = g.add_edge(2, 1);
        assert_eq!(again.id(), id);
        assert_eq!(again.weight(), 3.0);
        assert_eq!(again.get_attribute("color"), Some("red"));

        let weighted = g.add_weighted_edge(1, 2, 10.0);
        assert_eq!(weighted.weight(), 3.0);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.get_vertex(&1).unwrap().degree(), degree(1, 1));
        assert_eq!(g.neighbors(&1), &[2]);
    }

    #[test]
    fn test_directed_degree_and_matching() {
        let mut g: Graph<i32> = Graph::directed();
        g.add_edge(1, 2);
        g.add_edge(2, 1);

        assert_eq!(g.edge_count(), 2);
        assert!(g.edge_exists(&1, &2));
        assert!(g.edge_exists(&2, &1));
        assert_eq!(g.get_vertex(&1).unwrap().degree(), degree(1, 1));

        g.delete_edge(&2, &1);
        assert!(!g.edge_exists(&2, &1));
        assert!(g.edge_exists(&1, &2));
        assert_eq!(g.get_vertex(&1).unwrap().degree(), degree(0, 1));
        assert_eq!(g.get_vertex(&2).unwrap().degree(), degree(1, 0));
    }

    #[test]
    fn test_undirected_symmetry() {
        let mut g: Graph<i32> = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(2, 3);

        for (a, b) in [(1, 2), (2, 3), (1, 3)] {
            assert_eq!(g.edge_exists(&a, &b), g.edge_exists(&b, &a));
        }
        assert_eq!(g.neighbors(&2), &[1, 3]);
        assert_eq!(g.get_vertex(&2).unwrap().degree(), degree(2, 2));

        g.delete_edge(&2, &1);
        assert!(!g.edge_exists(&1, &2));
        assert_eq!(g.neighbors(&2), &[3]);
        assert!(g.neighbors(&1).is_empty());
        assert_eq!(g.get_vertex(&1).unwrap().degree(), degree(0, 0));
        assert_eq!(g.get_vertex(&2).unwrap().degree(), degree(1, 1));
    }

    #[test]
    fn test_delete_vertex_removes_incident_edges() {
        let mut g: Graph<i32> = Graph::directed();
        g.add_edge(1, 2);
        g.add_edge(3, 1);
        g.add_edge(2, 3);

        g.delete_vertex(&1);

        assert!(!g.vertex_exists(&1));
        assert_eq!(g.edge_count(), 1);
        assert!(g.edge_exists(&2, &3));
        assert!(g.neighbors(&3).is_empty());
        assert_eq!(g.get_vertex(&2).unwrap().degree(), degree(0, 1));
        assert_eq!(g.get_vertex(&3).unwrap().degree(), degree(1, 0));
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut g: Graph<i32> = Graph::undirected();
        g.add_edge(1, 2);

        g.delete_vertex(&42);
        g.delete_edge(&1, &42);
        g.delete_edge(&40, &41);

        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.get_vertex(&42).is_none());
        assert!(g.get_edge(&1, &42).is_none());
    }

    #[test]
    fn test_self_loop_policy() {
        let mut directed: Graph<i32> = Graph::directed();
        directed.add_edge(1, 1);
        assert_eq!(directed.neighbors(&1), &[1]);
        assert_eq!(directed.get_vertex(&1).unwrap().degree(), degree(1, 1));
        directed.delete_edge(&1, &1);
        assert!(directed.neighbors(&1).is_empty());
        assert_eq!(directed.get_vertex(&1).unwrap().degree(), degree(0, 0));

        let mut undirected: Graph<i32> = Graph::undirected();
        undirected.add_edge(1, 1);
        assert_eq!(undirected.neighbors(&1), &[1]);
        assert_eq!(undirected.get_vertex(&1).unwrap().degree(), degree(1, 1));
        undirected.delete_vertex(&1);
        assert_eq!(undirected.edge_count(), 0);
    }

    #[test]
    fn test_neighbor_vertices() {
        let mut g: Graph<&str> = Graph::directed();
        g.add_edge("a", "b");
        g.add_edge("a", "c");

        let keys: Vec<&str> = g.neighbor_vertices(&"a").iter().map(|v| *v.key()).collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert!(g.neighbor_vertices(&"zzz").is_empty());
    }

    #[test]
    fn test_reset_attributes() {
        let mut g: Graph<i32> = Graph::directed();
        g.add_edge(1, 2);
        {
            let v = g.vertex_state_mut(&2);
            v.color = Color::Black;
            v.distance = 1.0;
            v.parent = Some(1);
        }
        assert_eq!(*g.parent_of(&2).unwrap().key(), 1);

        g.reset_attributes();

        let v = g.get_vertex(&2).unwrap();
        assert_eq!(v.color(), Color::White);
        assert_eq!(v.distance(), 0.0);
        assert!(g.parent_of(&2).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut g: Graph<i32> = Graph::undirected();
        g.add_edge(1, 2).set_attribute("color", "red");
        g.vertex_state_mut(&2).parent = Some(1);

        let mut cloned = g.clone();
        assert_eq!(*cloned.parent_of(&2).unwrap().key(), 1);

        cloned.vertex_mut(&1).unwrap().set_attribute("shape", "box");
        cloned.edge_mut(&1, &2).unwrap().set_attribute("color", "blue");
        cloned.vertex_state_mut(&2).parent = None;
        cloned.add_edge(2, 3);

        assert!(g.get_vertex(&1).unwrap().get_attribute("shape").is_none());
        assert_eq!(g.get_edge(&1, &2).unwrap().get_attribute("color"), Some("red"));
        assert_eq!(*g.parent_of(&2).unwrap().key(), 1);
        assert!(!g.vertex_exists(&3));
        assert_eq!(g.neighbors(&2), &[1]);

        g.vertex_state_mut(&1).parent = Some(2);
        assert!(cloned.parent_of(&1).is_none());
    }

    #[test]
    fn test_delete_vertex_clears_dangling_parents() {
        let mut g: Graph<i32> = Graph::directed();
        g.add_edge(1, 2);
        g.add_vertex(3);
        g.vertex_state_mut(&3).parent = Some(1);

        g.delete_vertex(&1);

        assert!(g.get_vertex(&3).unwrap().parent().is_none());
    }
}
