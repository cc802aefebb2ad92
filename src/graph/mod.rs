//! Core graph store
//!
//! This module implements the graph data model:
//! - Vertices identified by a generic key, with degree, attributes and walk
//!   scratch state (color, distance, parent)
//! - Weighted edges, directed or undirected depending on the graph kind
//! - An adjacency index for O(1) neighbor lookups

pub mod edge;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use store::{Graph, VertexKey};
pub use types::{Attributes, Color, Degree, EdgeId, GraphKind, VertexId};
pub use vertex::Vertex;
