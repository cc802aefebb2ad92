//! Graphwalk
//!
//! A generic directed/undirected graph plus a family of walkers sharing one
//! visitor protocol.
//!
//! # Components
//!
//! - `graph`: vertex/edge store with adjacency index, degrees and attribute
//!   bags
//! - `algo`: breadth-first, pre-order and post-order depth-first walks, an
//!   unreachable-vertex walk, Dijkstra and shortest path, topological sort
//! - `export`: Graphviz Dot output
//!
//! Each walker resets the per-vertex scratch state (color, distance,
//! parent) before it runs, then hands vertices to the visitor. The visitor
//! returns [`Visit::Continue`], [`Visit::Stop`] (successful early exit) or
//! [`Visit::Fail`] (the error is returned to the caller as-is).
//!
//! ## Example Usage
//!
//! ```rust
//! use graphwalk::{walk_shortest_path, Graph, Visit};
//!
//! let mut graph = Graph::undirected();
//! graph.add_weighted_edge(1, 2, 2.0);
//! graph.add_weighted_edge(2, 3, 3.0);
//! graph.add_weighted_edge(1, 3, 10.0);
//!
//! let mut path = Vec::new();
//! walk_shortest_path(&mut graph, &1, &3, |v| {
//!     path.push((*v.key(), v.distance()));
//!     Visit::Continue
//! })
//! .unwrap();
//!
//! assert_eq!(path, vec![(1, 0.0), (2, 2.0), (3, 5.0)]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod export;
pub mod graph;

// Re-export main types for convenience
pub use algo::{
    walk_bfs, walk_dijkstra, walk_post_order_dfs, walk_pre_order_dfs, walk_shortest_path,
    walk_topo_order, walk_unreachable, MinQueue, Visit,
};
pub use error::{GraphError, GraphResult};
pub use export::{to_dot, write_dot, DotConfig};
pub use graph::{
    Attributes, Color, Degree, Edge, EdgeId, Graph, GraphKind, Vertex, VertexId, VertexKey,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
