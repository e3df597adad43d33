//! Weighted undirected graph keyed by ordered vertex identifiers.
//!
//! Variables:
//!   adj[u]     : BTreeSet<V>  — neighbours of u
//!   w[{u,v}]   : W            — optional weight, keyed by EdgeKey(min(u,v), max(u,v))
//!
//! Equations:
//!   v ∈ adj[u]  ⇔  u ∈ adj[v]                        (symmetry)
//!   add_edge(u, u, _) = no-op                        (no self-loops)
//!   add_edge(u, v, Some(x)) twice → w[{u,v}] = last x
//!   |E| = Σ_u |adj[u]| / 2
//!   G == H  ⇔  adj_G == adj_H  ∧  w_G == w_H

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::iter::Sum;
use std::ops::Bound::{Excluded, Unbounded};

use crate::error::{AlgorithmError, Result};

/// An unordered edge `{u, v}` stored with its smaller endpoint first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey<V> {
    lo: V,
    hi: V,
}

impl<V: Ord> EdgeKey<V> {
    pub fn new(u: V, v: V) -> Self {
        if v < u {
            Self { lo: v, hi: u }
        } else {
            Self { lo: u, hi: v }
        }
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.lo, &self.hi)
    }

    pub fn into_endpoints(self) -> (V, V) {
        (self.lo, self.hi)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGraph<V, W>",
        bound(
            serialize = "V: serde::Serialize, W: serde::Serialize",
            deserialize = "V: serde::Deserialize<'de>, W: serde::Deserialize<'de>"
        )
    )
)]
pub struct UndirectedGraph<V: Ord, W> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
    #[cfg_attr(feature = "serde", serde(with = "weight_list"))]
    weights: BTreeMap<EdgeKey<V>, W>,
}

impl<V: Ord, W> Default for UndirectedGraph<V, W> {
    fn default() -> Self {
        Self { adjacency: BTreeMap::new(), weights: BTreeMap::new() }
    }
}

impl<V: Ord + Clone, W> UndirectedGraph<V, W> {
    /// Unweighted graph from an edge list. Self-loops are dropped.
    pub fn new(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::default();
        for (u, v) in edges {
            graph.add_edge(u, v, None);
        }
        graph
    }

    /// Weighted graph from parallel edge and weight lists of equal length.
    pub fn with_weights(
        edges: impl IntoIterator<Item = (V, V)>,
        weights: impl IntoIterator<Item = W>,
    ) -> Result<Self> {
        let edges: Vec<(V, V)> = edges.into_iter().collect();
        let weights: Vec<W> = weights.into_iter().collect();
        if edges.len() != weights.len() {
            return Err(AlgorithmError::InvalidArgument(format!(
                "number of edges ({}) must equal number of weights ({})",
                edges.len(),
                weights.len()
            )));
        }
        let mut graph = Self::default();
        for ((u, v), w) in edges.into_iter().zip(weights) {
            graph.add_edge(u, v, Some(w));
        }
        Ok(graph)
    }

    /// Inserts `{u, v}`. A `Some` weight replaces any previous weight for
    /// the pair; `None` leaves it as it was.
    pub fn add_edge(&mut self, u: V, v: V, weight: Option<W>) {
        if u == v {
            return;
        }
        self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v.clone()).or_default().insert(u.clone());
        if let Some(w) = weight {
            self.weights.insert(EdgeKey::new(u, v), w);
        }
    }

    /// Deletes `vertex` and every edge touching it. Unknown vertices are
    /// ignored.
    pub fn remove(&mut self, vertex: &V) {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return;
        };
        for neighbor in neighbors {
            if let Some(set) = self.adjacency.get_mut(&neighbor) {
                set.remove(vertex);
            }
            self.weights.remove(&EdgeKey::new(vertex.clone(), neighbor));
        }
    }

    pub fn weight(&self, u: &V, v: &V) -> Option<&W> {
        self.weights.get(&EdgeKey::new(u.clone(), v.clone()))
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency.get(u).is_some_and(|set| set.contains(v))
    }

    /// Each edge once, as `(smaller, larger)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(u, set)| set.range::<V, _>((Excluded(u), Unbounded)).map(move |v| (u, v)))
    }

    pub fn weighted_edges(&self) -> impl Iterator<Item = ((&V, &V), Option<&W>)> + '_ {
        self.edges().map(move |(u, v)| ((u, v), self.weight(u, v)))
    }

    pub fn weighted_neighbors<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = (&'a V, Option<&'a W>)> + 'a {
        self.neighbors(vertex).map(move |n| (n, self.weight(vertex, n)))
    }
}

impl<V: Ord, W> UndirectedGraph<V, W> {
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_weighted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// True when every vertex is reachable from every other. The empty
    /// graph counts as connected.
    pub fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(first) => self.bfs(first).count() == self.vertex_count(),
        }
    }
}

impl<V: Ord, W: Clone + Sum> UndirectedGraph<V, W> {
    /// Sum of all edge weights; unweighted edges contribute nothing.
    pub fn total_weight(&self) -> W {
        self.weights.values().cloned().sum()
    }
}

/// One line per vertex: `v : {n1, n2}`, followed by the matching weights
/// when the graph carries any.
impl<V: Ord + Clone + fmt::Debug, W: fmt::Debug> fmt::Display for UndirectedGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weighted = self.is_weighted();
        for (i, (vertex, neighbors)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let names: Vec<String> = neighbors.iter().map(|n| format!("{n:?}")).collect();
            write!(f, "{vertex:?} : {{{}}}", names.join(", "))?;
            if weighted {
                let weights: Vec<String> = neighbors
                    .iter()
                    .map(|n| match self.weight(vertex, n) {
                        Some(w) => format!("{w:?}"),
                        None => "None".to_string(),
                    })
                    .collect();
                write!(f, " [{}]", weights.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Unchecked form of an [`UndirectedGraph`], as read from a serialized
/// snapshot.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "V: serde::Deserialize<'de> + Ord, W: serde::Deserialize<'de>"))]
struct RawGraph<V: Ord, W> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
    #[serde(with = "weight_list")]
    weights: BTreeMap<EdgeKey<V>, W>,
}

/// Accepts a snapshot only when adjacency is symmetric, has no self-loops,
/// and every weight belongs to an edge present in the adjacency.
#[cfg(feature = "serde")]
impl<V: Ord, W> TryFrom<RawGraph<V, W>> for UndirectedGraph<V, W> {
    type Error = AlgorithmError;

    fn try_from(raw: RawGraph<V, W>) -> Result<Self> {
        let RawGraph { adjacency, weights } = raw;
        let linked = |u: &V, v: &V| adjacency.get(u).is_some_and(|set| set.contains(v));
        for (u, neighbors) in &adjacency {
            for v in neighbors {
                if u == v {
                    return Err(AlgorithmError::invalid("adjacency holds a self-loop"));
                }
                if !linked(v, u) {
                    return Err(AlgorithmError::invalid("adjacency is not symmetric"));
                }
            }
        }
        for key in weights.keys() {
            let (u, v) = key.endpoints();
            if !linked(u, v) {
                return Err(AlgorithmError::invalid("weight for an edge that is not in the graph"));
            }
        }
        Ok(Self { adjacency, weights })
    }
}

/// Weights travel as a list of `(edge, weight)` pairs so that formats with
/// string-only map keys can hold them.
#[cfg(feature = "serde")]
mod weight_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::EdgeKey;

    pub fn serialize<V, W, S>(weights: &BTreeMap<EdgeKey<V>, W>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        W: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(weights.iter())
    }

    pub fn deserialize<'de, V, W, D>(deserializer: D) -> Result<BTreeMap<EdgeKey<V>, W>, D::Error>
    where
        V: Deserialize<'de> + Ord,
        W: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(EdgeKey<V>, W)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|(key, w)| (EdgeKey::new(key.lo, key.hi), w)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeKey, UndirectedGraph};
    use crate::error::AlgorithmError;

    #[test]
    fn edge_keys_ignore_orientation() {
        assert_eq!(EdgeKey::new(3, 1), EdgeKey::new(1, 3));
        assert_eq!(EdgeKey::new("b", "a").endpoints(), (&"a", &"b"));
        assert!(EdgeKey::new(0, 9) < EdgeKey::new(1, 2));
    }

    #[test]
    fn equality_ignores_edge_order_and_duplicates() {
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (1, 2)]);
        let h = UndirectedGraph::new([(1, 2), (0, 1), (0, 1)]);
        assert_eq!(g, h);

        let g: UndirectedGraph<&str, ()> = UndirectedGraph::new([("A", "2"), ("2", "B"), ("B", "C")]);
        let h = UndirectedGraph::new([("A", "2"), ("B", "C"), ("2", "B")]);
        assert_eq!(g, h);
    }

    #[test]
    fn weights_must_match_edges() {
        let result = UndirectedGraph::with_weights([("A", "2"), ("2", "B"), ("B", "C")], [1, 2]);
        assert!(matches!(result, Err(AlgorithmError::InvalidArgument(_))));
    }

    #[test]
    fn last_weight_wins_for_repeated_edges() {
        let g = UndirectedGraph::with_weights([("A", "2"), ("B", "C"), ("C", "B")], [1, 2, 5]).unwrap();
        assert_eq!(g.weight(&"B", &"C"), Some(&5));
        assert_eq!(g.weight(&"C", &"B"), Some(&5));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn unweighted_insert_keeps_existing_weight() {
        let mut g = UndirectedGraph::with_weights([(1, 2)], [7]).unwrap();
        g.add_edge(2, 1, None);
        assert_eq!(g.weight(&1, &2), Some(&7));
    }

    #[test]
    fn self_loops_are_dropped() {
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(1, 1), (1, 2)]);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.contains_edge(&1, &1));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (2, 0), (1, 3)]);
        for u in g.vertices() {
            for v in g.neighbors(u) {
                assert!(g.contains_edge(v, u));
            }
        }
    }

    #[test]
    fn edges_are_listed_once_in_canonical_order() {
        let g = UndirectedGraph::with_weights([(2, 3), (1, 0), (2, 1)], [2, 0, 1]).unwrap();
        let edges: Vec<_> = g.weighted_edges().collect();
        assert_eq!(
            edges,
            vec![((&0, &1), Some(&0)), ((&1, &2), Some(&1)), ((&2, &3), Some(&2))]
        );
    }

    #[test]
    fn neighbors_carry_weights() {
        let g = UndirectedGraph::with_weights([(0, 1), (1, 2)], [5, 2]).unwrap();
        let around_one: Vec<_> = g.weighted_neighbors(&1).collect();
        assert_eq!(around_one, vec![(&0, Some(&5)), (&2, Some(&2))]);
        assert_eq!(g.neighbors(&9).count(), 0);
    }

    #[test]
    fn remove_drops_incident_edges() {
        let mut g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (1, 2), (2, 3)]);
        g.remove(&0);
        assert_eq!(g, UndirectedGraph::new([(1, 2), (2, 3)]));
    }

    #[test]
    fn remove_drops_incident_weights() {
        let mut g = UndirectedGraph::with_weights([(0, 1), (1, 2), (2, 3)], [5, 2, 3]).unwrap();
        g.remove(&0);
        assert_eq!(g, UndirectedGraph::with_weights([(1, 2), (2, 3)], [2, 3]).unwrap());
        assert_eq!(g.total_weight(), 5);
    }

    #[test]
    fn removing_unknown_vertex_is_silent() {
        let mut g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1)]);
        let before = g.clone();
        g.remove(&42);
        assert_eq!(g, before);
    }

    #[test]
    fn removal_keeps_isolated_former_neighbours() {
        let mut g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (1, 2)]);
        g.remove(&1);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.is_connected());
    }

    #[test]
    fn connectivity() {
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (1, 2), (2, 3)]);
        assert!(g.is_connected());
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (2, 3)]);
        assert!(!g.is_connected());
        assert!(UndirectedGraph::<i32, ()>::default().is_connected());
    }

    #[test]
    fn display_lists_neighbours_and_weights() {
        let g: UndirectedGraph<i32, ()> = UndirectedGraph::new([(0, 1), (1, 2), (2, 3)]);
        assert_eq!(g.to_string(), "0 : {1}\n1 : {0, 2}\n2 : {1, 3}\n3 : {2}");

        let g = UndirectedGraph::with_weights([(0, 1), (1, 2), (2, 3)], [5, 2, 3]).unwrap();
        assert_eq!(
            g.to_string(),
            "0 : {1} [5]\n1 : {0, 2} [5, 2]\n2 : {1, 3} [2, 3]\n3 : {2} [3]"
        );
    }

    #[test]
    fn clone_is_an_equal_independent_copy() {
        let g = UndirectedGraph::with_weights([(0, 1), (1, 2)], [1, 2]).unwrap();
        let mut copy = g.clone();
        assert_eq!(copy, g);
        copy.remove(&2);
        assert_ne!(copy, g);
    }
}
