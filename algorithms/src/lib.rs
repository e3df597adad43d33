//! # Classic Algorithms
//!
//! Union-find, range queries and minimum spanning trees, organized by category.
//!
//! ## Modules
//!
//! - `data_structures` – Core structural containers (disjoint set, range query tree, min-heap)
//! - `graph` – Undirected weighted graphs, traversal (BFS, DFS) and minimum spanning trees (Kruskal, Prim)
//! - `error` – Shared error type for every fallible operation
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use classic_algorithms::graph::UndirectedGraph;
//! use classic_algorithms::data_structures::RangeQueryTree;
//!
//! let g = UndirectedGraph::with_weights([(0, 1), (1, 2), (0, 2)], [4, 2, 5]).unwrap();
//! assert_eq!(g.kruskal().unwrap().total_weight(), 6);
//!
//! let mut sums = RangeQueryTree::sum([1, 2, 3, 4, 5]).unwrap();
//! sums.update(1, 3).unwrap();
//! assert_eq!(sums.query(1, 3), Ok(10));
//! ```
//!
//! ---
//!
//! Single-threaded and in-memory; structures are owned by the caller.

pub mod data_structures;
pub mod error;
pub mod graph;

pub use error::{AlgorithmError, Result};
