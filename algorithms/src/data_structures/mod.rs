pub mod disjoint_set;
pub mod heap;
pub mod range_query_tree;

pub use disjoint_set::DisjointSet;
pub use heap::MinHeap;
pub use range_query_tree::{Combine, RangeQueryTree};
