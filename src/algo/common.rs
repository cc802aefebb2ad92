//! Shared utilities for the walkers
//!
//! - [`Visit`]: the outcome a visitor returns for each vertex
//! - [`MinQueue`]: minimum priority queue with key updates, used by Dijkstra

use crate::error::{GraphError, GraphResult};
use crate::graph::Vertex;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::ops::ControlFlow;

/// Outcome of visiting a single vertex
#[derive(Debug)]
pub enum Visit {
    /// Keep walking
    Continue,
    /// End the walk successfully, right now
    Stop,
    /// End the walk and hand the error back to the caller unchanged
    Fail(anyhow::Error),
}

impl Visit {
    pub fn fail<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Visit::Fail(error.into())
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Visit::Stop)
    }
}

impl From<anyhow::Result<()>> for Visit {
    fn from(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Visit::Continue,
            Err(e) => Visit::Fail(e),
        }
    }
}

/// Run the visitor on a vertex, translating its outcome into walk control
/// flow. `Fail` becomes `GraphError::Visitor`.
pub(crate) fn visit<K, F>(visitor: &mut F, vertex: &Vertex<K>) -> GraphResult<ControlFlow<()>>
where
    F: FnMut(&Vertex<K>) -> Visit,
{
    match visitor(vertex) {
        Visit::Continue => Ok(ControlFlow::Continue(())),
        Visit::Stop => Ok(ControlFlow::Break(())),
        Visit::Fail(e) => Err(GraphError::Visitor(e)),
    }
}

/// Heap entry, ordered so that `BinaryHeap` pops the smallest key first and
/// the earliest insertion among equal keys
struct Entry<T> {
    key: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum priority queue with key updates.
///
/// Updates push a fresh heap entry and leave the old one behind; stale
/// entries are skipped on extraction, so repeated key decreases are cheap
/// and each item comes out exactly once.
pub struct MinQueue<T: Clone + Eq + Hash> {
    heap: BinaryHeap<Entry<T>>,
    live: HashMap<T, u64>,
    seq: u64,
}

impl<T: Clone + Eq + Hash> MinQueue<T> {
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            seq: 0,
        }
    }

    /// Insert an item, replacing its key if it is already queued
    pub fn put(&mut self, item: T, key: f64) {
        self.seq += 1;
        self.live.insert(item.clone(), self.seq);
        self.heap.push(Entry {
            key,
            seq: self.seq,
            item,
        });
    }

    /// Change the key of a queued item. Returns false if the item is not
    /// in the queue.
    pub fn update(&mut self, item: &T, key: f64) -> bool {
        if !self.live.contains_key(item) {
            return false;
        }
        self.put(item.clone(), key);
        true
    }

    /// Remove and return the item with the smallest key
    pub fn get(&mut self) -> Option<(T, f64)> {
        while let Some(entry) = self.heap.pop() {
            if self.live.get(&entry.item) == Some(&entry.seq) {
                self.live.remove(&entry.item);
                return Some((entry.item, entry.key));
            }
        }
        None
    }

    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
