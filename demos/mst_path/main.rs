//! I use it with `cargo run --example mst_path`

use prim_paths::{AdjacencyMatrix, TreeAdjacency, compute_mst};

fn main() -> prim_paths::Result<()> {
    let graph = AdjacencyMatrix::new(vec![
        vec![0, 1, 0, 7, 0, 0],
        vec![1, 0, 8, 1, 0, 0],
        vec![0, 8, 0, 4, 4, 0],
        vec![7, 1, 4, 0, 5, 0],
        vec![0, 0, 4, 5, 0, 4],
        vec![0, 0, 0, 0, 4, 0],
    ])?;

    let mst = compute_mst(&graph)?;
    println!("Minimum spanning tree:");
    for edge in mst.edges() {
        println!("  {}", edge);
    }
    println!("Total weight: {}", mst.total_weight());

    let path = TreeAdjacency::from_mst(&mst).find_path(0, 5)?;
    let hops: Vec<_> = path.edges().iter().map(|(u, v)| format!("{} -> {}", u, v)).collect();
    println!("Path 0 to 5: {} (weight {})", hops.join(", "), path.weight(&graph));

    Ok(())
}
