//! Kruskal's minimum spanning tree (forest).
//!
//! Variables:
//!   Q    : MinHeap<(Option<W>, EdgeKey<V>)>  — every edge, lightest first
//!   S    : DisjointSet<V>                     — components of the partial forest
//!   T    : set of accepted edges
//!
//! Equations:
//!   pop (w, {u,v}) from Q:
//!     find(u) == find(v) → reject (cycle)
//!     otherwise          → union(u, v), T ∪= {u,v}
//!   stop when |T| = |V| - 1  or  Q = ∅
//!
//!   Ties on weight are broken by the canonical endpoint pair; unweighted
//!   edges (None) sort before weighted ones.   O(E log E)

use std::hash::Hash;

use tracing::instrument;

use super::undirected::{EdgeKey, UndirectedGraph};
use crate::data_structures::disjoint_set::DisjointSet;
use crate::data_structures::heap::MinHeap;
use crate::error::Result;

impl<V: Ord + Hash + Clone, W: Ord + Clone> UndirectedGraph<V, W> {
    /// Minimum spanning tree of a connected graph. On a disconnected graph
    /// the result is a minimum spanning forest; check `is_connected` first
    /// when a single tree is required. The source graph is left untouched.
    ///
    /// Weights need a total order, so `f64` and other floats must be wrapped
    /// in a totally ordered newtype before calling this.
    #[instrument(level = "trace", skip_all)]
    pub fn kruskal(&self) -> Result<Self> {
        let target = self.vertex_count().saturating_sub(1);
        let mut components = DisjointSet::new(self.vertices().cloned());
        let mut queue: MinHeap<(Option<W>, EdgeKey<V>)> = self
            .weighted_edges()
            .map(|((u, v), w)| (w.cloned(), EdgeKey::new(u.clone(), v.clone())))
            .collect();
        tracing::debug!(
            vertices = self.vertex_count(),
            edges = queue.len(),
            "kruskal started"
        );

        let mut tree = Self::default();
        let mut taken = 0;
        while taken < target {
            let Some((weight, edge)) = queue.pop_min() else {
                break;
            };
            let (u, v) = edge.endpoints();
            if components.in_same_set(u, v)? {
                tracing::trace!(taken, "edge rejected: endpoints already connected");
                continue;
            }
            components.union(u, v)?;
            let (u, v) = edge.into_endpoints();
            tree.add_edge(u, v, weight);
            taken += 1;
            tracing::trace!(taken, "edge accepted");
        }

        tracing::debug!(
            taken,
            components = components.set_count(),
            spanning = taken == target,
            "kruskal finished"
        );
        Ok(tree)
    }
}
