//! Pathfinding algorithms
//!
//! Dijkstra's single-source shortest paths and source -> destination path
//! reconstruction over the resulting shortest-path tree. Edge weights must
//! be non-negative.

use super::common::{visit, MinQueue, Visit};
use crate::error::{GraphError, GraphResult};
use crate::graph::{Color, Graph, Vertex, VertexKey};
use tracing::debug;

/// Reset scratch state and set every tentative distance to infinity,
/// except the source's
fn initialize_source<K: VertexKey>(graph: &mut Graph<K>, source: &K) -> GraphResult<()> {
    if !graph.vertex_exists(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    graph.reset_attributes();
    let keys: Vec<K> = graph.vertex_keys().cloned().collect();
    for key in &keys {
        graph.vertex_state_mut(key).distance = f64::INFINITY;
    }
    graph.vertex_state_mut(source).distance = 0.0;
    Ok(())
}

/// Relax the edge `from -> to`. Returns true if `to` got a shorter
/// distance.
fn relax_edge<K: VertexKey>(graph: &mut Graph<K>, from: &K, to: &K) -> GraphResult<bool> {
    let weight = graph
        .get_edge(from, to)
        .map(|e| e.weight())
        .ok_or_else(|| GraphError::missing_edge(from, to))?;

    let alt = graph.vertex_state(from).distance + weight;
    let target = graph.vertex_state_mut(to);
    if alt < target.distance {
        target.distance = alt;
        target.parent = Some(from.clone());
        return Ok(true);
    }
    Ok(false)
}

/// Dijkstra's algorithm from `source` to every other vertex.
///
/// Each vertex is visited once its distance is settled, after the edges to
/// its neighbors have been relaxed. Vertices unreachable from `source` are
/// still visited, with an infinite distance and no parent. Settled vertices
/// are painted Black.
pub fn walk_dijkstra<K, F>(graph: &mut Graph<K>, source: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    initialize_source(graph, source)?;
    debug!("Starting Dijkstra walk from {:?}", source);

    let mut queue = MinQueue::new();
    for vertex in graph.vertices() {
        queue.put(vertex.key().clone(), vertex.distance());
    }

    while let Some((key, _)) = queue.get() {
        let neighbors = graph.neighbors(&key).to_vec();
        for neighbor in &neighbors {
            if relax_edge(graph, &key, neighbor)? {
                queue.update(neighbor, graph.vertex_state(neighbor).distance);
            }
        }

        if visit(&mut visitor, graph.vertex_state(&key))?.is_break() {
            debug!("Dijkstra walk stopped at {:?}", key);
            return Ok(());
        }

        graph.vertex_state_mut(&key).color = Color::Black;
    }

    Ok(())
}

/// Walk the vertices of the shortest path from `source` to `dest`, source
/// first.
///
/// Runs Dijkstra until `dest` is settled, then follows parent links back
/// to `source`. Fails with `NoPathExists` if `dest` is absent or
/// unreachable, and with `VertexNotFound` if `source` is absent.
pub fn walk_shortest_path<K, F>(graph: &mut Graph<K>, source: &K, dest: &K, mut visitor: F) -> GraphResult<()>
where
    K: VertexKey,
    F: FnMut(&Vertex<K>) -> Visit,
{
    if !graph.vertex_exists(source) {
        return Err(GraphError::vertex_not_found(source));
    }
    if !graph.vertex_exists(dest) {
        debug!("Destination {:?} is not in the graph", dest);
        return Err(GraphError::no_path(source, dest));
    }

    walk_dijkstra(graph, source, |v| {
        if v.key() == dest {
            Visit::Stop
        } else {
            Visit::Continue
        }
    })?;

    let mut path = vec![dest.clone()];
    let mut current = dest.clone();
    while current != *source {
        let Some(parent) = graph.vertex_state(&current).parent().cloned() else {
            debug!("No path exists between {:?} and {:?}", source, dest);
            return Err(GraphError::no_path(source, dest));
        };
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    for key in &path {
        if visit(&mut visitor, graph.vertex_state(key))?.is_break() {
            return Ok(());
        }
    }

    Ok(())
}
