//! Depth-first traversal: LIFO frontier, vertices marked when popped.

use std::collections::BTreeSet;

use super::undirected::UndirectedGraph;

/// Lazy depth-first walk. Yields every vertex reachable from the start
/// exactly once, always descending into the smallest unvisited neighbour
/// first.
pub struct Dfs<'a, V: Ord, W> {
    graph: &'a UndirectedGraph<V, W>,
    stack: Vec<&'a V>,
    visited: BTreeSet<&'a V>,
}

impl<'a, V: Ord, W> Iterator for Dfs<'a, V, W> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node) {
                continue;
            }
            let graph = self.graph;
            // reversed so the smallest neighbour is popped next
            let unvisited: Vec<&'a V> = graph.neighbors(node).filter(|n| !self.visited.contains(*n)).collect();
            self.stack.extend(unvisited.into_iter().rev());
            return Some(node);
        }
        None
    }
}

impl<V: Ord, W> UndirectedGraph<V, W> {
    /// Depth-first order from `start`. A start vertex absent from the
    /// graph is yielded alone.
    pub fn dfs<'a>(&'a self, start: &'a V) -> Dfs<'a, V, W> {
        Dfs { graph: self, stack: vec![start], visited: BTreeSet::new() }
    }
}
