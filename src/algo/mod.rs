//! Graph walkers
//!
//! Every walker takes the graph mutably, resets the per-vertex scratch
//! state (color, distance, parent) and then calls the visitor once per
//! vertex in an algorithm-defined order. The visitor decides whether to
//! continue, stop successfully, or fail the walk with its own error.
//!
//! Walkers must not run concurrently on the same graph, and must not be
//! re-entered from inside a visitor; clone the graph instead.

pub mod common;
pub mod pathfinding;
pub mod topology;
pub mod traversal;

pub use common::{MinQueue, Visit};
pub use pathfinding::{walk_dijkstra, walk_shortest_path};
pub use topology::walk_topo_order;
pub use traversal::{walk_bfs, walk_post_order_dfs, walk_pre_order_dfs, walk_unreachable};
