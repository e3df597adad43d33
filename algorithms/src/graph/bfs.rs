//! Breadth-first traversal: FIFO frontier, vertices marked on discovery.

use std::collections::{BTreeSet, VecDeque};

use super::undirected::UndirectedGraph;

/// Lazy breadth-first walk. Yields every vertex reachable from the start
/// exactly once; neighbours are discovered in ascending order.
pub struct Bfs<'a, V: Ord, W> {
    graph: &'a UndirectedGraph<V, W>,
    queue: VecDeque<&'a V>,
    visited: BTreeSet<&'a V>,
}

impl<'a, V: Ord, W> Iterator for Bfs<'a, V, W> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let node = self.queue.pop_front()?;
        let graph = self.graph;
        for n in graph.neighbors(node) {
            if self.visited.insert(n) {
                self.queue.push_back(n);
            }
        }
        Some(node)
    }
}

impl<V: Ord, W> UndirectedGraph<V, W> {
    /// Breadth-first order from `start`. A start vertex absent from the
    /// graph is yielded alone.
    pub fn bfs<'a>(&'a self, start: &'a V) -> Bfs<'a, V, W> {
        Bfs {
            graph: self,
            queue: VecDeque::from([start]),
            visited: BTreeSet::from([start]),
        }
    }
}
