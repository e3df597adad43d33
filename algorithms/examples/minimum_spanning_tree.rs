//! Builds a small weighted graph, prints both minimum spanning trees and
//! checks them against the spanning-tree invariant.
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example minimum_spanning_tree

use classic_algorithms::graph::invariant::{Invariant, SpansGraph};
use classic_algorithms::graph::UndirectedGraph;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let graph = UndirectedGraph::with_weights(
        [(0, 1), (1, 2), (0, 2), (2, 3), (0, 3), (0, 4), (3, 4)],
        [4, 2, 4, 8, 6, 6, 9],
    )?;
    println!("graph:\n{graph}\n");

    let spans = SpansGraph(&graph);
    let kruskal = graph.kruskal()?;
    assert!(spans.check(&kruskal));
    println!("kruskal (weight {}):\n{kruskal}\n", kruskal.total_weight());

    let prim = graph.prim(&3)?;
    assert!(spans.check(&prim));
    println!("prim from 3 (weight {}):\n{prim}", prim.total_weight());
    Ok(())
}
