//! Reachability walks
//!
//! Breadth-first, pre-order depth-first and post-order depth-first walks,
//! plus a walk over the vertices unreachable from a source. Every walk
//! resets the vertex scratch state first and then paints vertices
//! White -> Gray -> Black, recording hop distance and parent as it goes.

use super::common::{visit, Visit};
use crate::error::{GraphError, GraphResult};
use crate::graph::{Color, Graph, Vertex, VertexKey};
use std::collections::VecDeque;
use tracing::debug;

/// Paint every White neighbor of `key` Gray, one hop further than `key`,
/// and return them in adjacency order
fn discover_all<K: VertexKey>(graph: &mut Graph<K>, key: &K) -> Vec<K> {
    let distance = graph.vertex_state(key).distance;
    let neighbors = graph.neighbors(key).to_vec();

    let mut discovered = Vec::new();
    for neighbor in neighbors {
        let vertex = graph.vertex_state_mut(&neighbor);
        if vertex.color == Color::White {
            vertex.color = Color::Gray;
            vertex.distance = distance + 1.0;
            vertex.parent = Some(key.clone());
            discovered.push(neighbor);
        }
    }
    discovered
}

/// Paint the last White neighbor of `key` Gray and return it.
///
/// Descending into the last neighbor mirrors the order in which a stack
/// seeded with every neighbor would be drained.
pub(crate) fn discover_next<K: VertexKey>(graph: &mut Graph<K>, key: &K) -> Option<K> {
    let next = graph
        .neighbors(key)
        .iter()
        .rev()
        .find(|n| graph.vertex_state(n).color == Color::White)
        .cloned()?;

    let distance = graph.vertex_state(key).distance;
    let vertex = graph.vertex_state_mut(&next);
    vertex.color = Color::Gray;
    vertex.distance = distance + 1.0;
    vertex.parent = Some(key.clone());
    Some(next)
}

fn prepare<K: VertexKey>(graph: &mut Graph<K>, source: &K, walk: &str) -> GraphResult<()> {
    if !graph.vertex_exists(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    debug!("Starting {} walk from {:?}", walk, source);
    graph.reset_attributes();
    graph.vertex_state_mut(source).color = Color::Gray;
    Ok(())
}

/// Breadth-first walk from `source`.
///
/// Vertices are visited in level order (non-decreasing hop distance), ties
/// broken by adjacency order. A vertex is visited after its White neighbors
/// have been queued.
pub fn walk_bfs<K, F>(graph: &mut Graph<K>, source: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    prepare(graph, source, "BFS")?;

    let mut queue = VecDeque::from([source.clone()]);
    while let Some(key) = queue.pop_front() {
        queue.extend(discover_all(graph, &key));

        if visit(&mut visitor, graph.vertex_state(&key))?.is_break() {
            debug!("BFS walk stopped at {:?}", key);
            return Ok(());
        }

        graph.vertex_state_mut(&key).color = Color::Black;
    }

    Ok(())
}

/// Pre-order depth-first walk from `source`.
///
/// A vertex is visited when it is popped, after its White neighbors have
/// been pushed; the most recently discovered branch is descended first.
pub fn walk_pre_order_dfs<K, F>(graph: &mut Graph<K>, source: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    prepare(graph, source, "pre-order DFS")?;

    let mut stack = vec![source.clone()];
    while let Some(key) = stack.pop() {
        stack.extend(discover_all(graph, &key));

        if visit(&mut visitor, graph.vertex_state(&key))?.is_break() {
            debug!("Pre-order DFS walk stopped at {:?}", key);
            return Ok(());
        }

        graph.vertex_state_mut(&key).color = Color::Black;
    }

    Ok(())
}

/// Post-order depth-first walk from `source`.
///
/// The top of the stack is only popped and visited once it has no White
/// neighbor left, so every vertex is visited after all of its descendants.
pub fn walk_post_order_dfs<K, F>(graph: &mut Graph<K>, source: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    prepare(graph, source, "post-order DFS")?;

    let mut stack = vec![source.clone()];
    while let Some(key) = stack.last().cloned() {
        if let Some(next) = discover_next(graph, &key) {
            stack.push(next);
            continue;
        }

        stack.pop();
        if visit(&mut visitor, graph.vertex_state(&key))?.is_break() {
            debug!("Post-order DFS walk stopped at {:?}", key);
            return Ok(());
        }

        graph.vertex_state_mut(&key).color = Color::Black;
    }

    Ok(())
}

/// Walk over every vertex that is not reachable from `source`.
///
/// Runs a silent pre-order DFS from `source` and then visits each vertex
/// still painted White, in vertex insertion order.
pub fn walk_unreachable<K, F>(graph: &mut Graph<K>, source: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    walk_pre_order_dfs(graph, source, |_| Visit::Continue)?;

    for vertex in graph.vertices().filter(|v| v.color() == Color::White) {
        if visit(&mut visitor, vertex)?.is_break() {
            debug!("Unreachable walk stopped at {:?}", vertex.key());
            return Ok(());
        }
    }

    Ok(())
}
