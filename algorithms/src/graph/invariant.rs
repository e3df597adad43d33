use super::undirected::UndirectedGraph;

/// Invariant trait for graph algorithm checks
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Spanning-tree invariant: the checked graph covers exactly the vertices
/// of the source, has `|V| - 1` edges, is connected, and every edge exists
/// in the source with the same weight.
pub struct SpansGraph<'a, V: Ord, W>(pub &'a UndirectedGraph<V, W>);

impl<V: Ord + Clone, W: PartialEq> Invariant<UndirectedGraph<V, W>> for SpansGraph<'_, V, W> {
    fn check(&self, tree: &UndirectedGraph<V, W>) -> bool {
        let source = self.0;
        tree.vertices().eq(source.vertices())
            && tree.edge_count() == source.vertex_count().saturating_sub(1)
            && tree.is_connected()
            && tree
                .weighted_edges()
                .all(|((u, v), w)| source.contains_edge(u, v) && source.weight(u, v) == w)
    }
}

#[cfg(test)]
mod tests {
    use super::{Invariant, SpansGraph};
    use crate::graph::UndirectedGraph;

    #[test]
    fn accepts_a_spanning_tree() {
        let g = UndirectedGraph::with_weights([(0, 1), (1, 2), (0, 2)], [1, 2, 3]).unwrap();
        let tree = UndirectedGraph::with_weights([(0, 1), (1, 2)], [1, 2]).unwrap();
        assert!(SpansGraph(&g).check(&tree));
    }

    #[test]
    fn rejects_missing_vertices_cycles_and_foreign_edges() {
        let g = UndirectedGraph::with_weights([(0, 1), (1, 2), (0, 2), (2, 3)], [1, 2, 3, 4]).unwrap();
        let partial = UndirectedGraph::with_weights([(0, 1), (1, 2)], [1, 2]).unwrap();
        let cyclic = g.clone();
        let reweighted = UndirectedGraph::with_weights([(0, 1), (1, 2), (2, 3)], [1, 2, 9]).unwrap();
        let foreign = UndirectedGraph::with_weights([(0, 1), (1, 3), (2, 3)], [1, 2, 4]).unwrap();
        for candidate in [partial, cyclic, reweighted, foreign] {
            assert!(!SpansGraph(&g).check(&candidate));
        }
    }
}
