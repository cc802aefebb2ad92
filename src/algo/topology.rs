//! Topological sort
//!
//! Runs a post-order DFS from every vertex not yet finished and visits
//! vertices in finishing order, so sinks come first: the chain
//! `A -> B -> C -> D` yields `D, C, B, A`.

use super::common::{visit, Visit};
use super::traversal::discover_next;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Color, Graph, Vertex, VertexKey};
use tracing::debug;

/// Post-order DFS from `source` without resetting scratch state.
///
/// Returns the vertices finished by this sub-walk in finishing order. A
/// Gray neighbor is an ancestor on the active path, which means a cycle;
/// the vertices left Gray form the cyclic path.
fn finish_from<K: VertexKey>(graph: &mut Graph<K>, source: &K) -> GraphResult<Vec<K>> {
    let mut finished = Vec::new();
    if graph.vertex_state(source).color == Color::Black {
        return Ok(finished);
    }

    graph.vertex_state_mut(source).color = Color::Gray;
    let mut stack = vec![source.clone()];

    while let Some(key) = stack.last().cloned() {
        let on_path = graph
            .neighbors(&key)
            .iter()
            .any(|n| graph.vertex_state(n).color == Color::Gray);
        if on_path {
            debug!("Cycle detected while finishing {:?}", key);
            return Err(GraphError::CycleDetected);
        }

        if let Some(next) = discover_next(graph, &key) {
            stack.push(next);
            continue;
        }

        stack.pop();
        graph.vertex_state_mut(&key).color = Color::Black;
        finished.push(key);
    }

    Ok(finished)
}

/// Walk the vertices of a directed acyclic graph in topological (finishing)
/// order.
///
/// Sub-walks start from each vertex in insertion order; every vertex is
/// visited exactly once. Fails with `NotDirectedGraph` on undirected graphs
/// (without touching vertex state) and with `CycleDetected` if a cycle is
/// found.
pub fn walk_topo_order<K, F>(graph: &mut Graph<K>, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    if !graph.is_directed() {
        return Err(GraphError::NotDirectedGraph);
    }

    debug!("Starting topological walk over {} vertices", graph.vertex_count());
    graph.reset_attributes();

    let sources: Vec<K> = graph.vertex_keys().cloned().collect();
    for source in &sources {
        for key in finish_from(graph, source)? {
            if visit(&mut visitor, graph.vertex_state(&key))?.is_break() {
                debug!("Topological walk stopped at {:?}", key);
                return Ok(());
            }
        }
    }

    Ok(())
}
