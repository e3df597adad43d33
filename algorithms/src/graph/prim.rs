//! Prim's minimum spanning tree, grown from a start vertex.
//!
//! Variables:
//!   Q      : MinHeap<(Option<W>, V, V)>  — frontier edges (w, from, to), lightest first
//!   taken  : BTreeSet<V>                  — vertices already in the tree
//!
//! Equations:
//!   taken = {s},  Q = { (w(s,v), s, v) | v ∈ adj[s] }
//!   pop (w, u, v):
//!     v ∈ taken → discard
//!     otherwise → taken ∪= {v}, T ∪= {u,v}, Q ∪= { (w(v,x), v, x) | x ∈ adj[v] \ taken }
//!   stop when taken = V                       O(E log E)
//!   Q = ∅ before that → Disconnected

use std::collections::BTreeSet;

use tracing::instrument;

use super::undirected::UndirectedGraph;
use crate::data_structures::heap::MinHeap;
use crate::error::{AlgorithmError, Result};

impl<V: Ord + Clone, W: Ord + Clone> UndirectedGraph<V, W> {
    /// Minimum spanning tree grown from `start`. Fails with `NotFound` for
    /// an unknown start and `Disconnected` when some vertex cannot be
    /// reached from it. The source graph is left untouched.
    ///
    /// Weights need a total order, so `f64` and other floats must be wrapped
    /// in a totally ordered newtype before calling this.
    #[instrument(level = "trace", skip_all)]
    pub fn prim(&self, start: &V) -> Result<Self> {
        if !self.contains_vertex(start) {
            return Err(AlgorithmError::NotFound);
        }
        let total = self.vertex_count();
        let mut taken = BTreeSet::from([start.clone()]);
        let mut queue: MinHeap<(Option<W>, V, V)> = self
            .weighted_neighbors(start)
            .map(|(v, w)| (w.cloned(), start.clone(), v.clone()))
            .collect();
        tracing::debug!(vertices = total, frontier = queue.len(), "prim started");

        let mut tree = Self::default();
        while taken.len() < total {
            let Some((weight, u, v)) = queue.pop_min() else {
                tracing::debug!(reached = taken.len(), total, "prim ran out of edges");
                return Err(AlgorithmError::Disconnected { reached: taken.len(), total });
            };
            if taken.contains(&v) {
                tracing::trace!(taken = taken.len(), "edge discarded: closes a cycle");
                continue;
            }
            taken.insert(v.clone());
            queue.extend(
                self.weighted_neighbors(&v)
                    .filter(|(n, _)| !taken.contains(*n))
                    .map(|(n, w)| (w.cloned(), v.clone(), n.clone())),
            );
            tree.add_edge(u, v, weight);
            tracing::trace!(taken = taken.len(), "vertex taken");
        }

        tracing::debug!(edges = tree.edge_count(), "prim finished");
        Ok(tree)
    }
}
