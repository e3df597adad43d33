pub mod bfs;
pub mod dfs;
pub mod invariant;
pub mod kruskal;
pub mod prim;
pub mod undirected;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use undirected::{EdgeKey, UndirectedGraph};
