//! # prim_paths
//!
//! Minimum spanning trees of dense weighted graphs (Prim's algorithm on an
//! adjacency matrix) and path queries inside the resulting tree.
//!
//! Interoperates with [`petgraph`](https://docs.rs/petgraph) for import and export.
//!
//! ```
//! use prim_paths::{AdjacencyMatrix, TreeAdjacency, compute_mst};
//!
//! let graph = AdjacencyMatrix::new(vec![
//!     vec![0, 2, 0],
//!     vec![2, 0, 3],
//!     vec![0, 3, 0],
//! ])
//! .unwrap();
//! let mst = compute_mst(&graph).unwrap();
//! assert_eq!(mst.total_weight(), 5);
//!
//! let path = TreeAdjacency::from_mst(&mst).find_path(0, 2).unwrap();
//! assert_eq!(path.edges(), &[(0, 1), (1, 2)]);
//! ```

pub mod error;
pub mod matrix;
pub mod prim;
pub mod tree;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{MstError, Result};
pub use matrix::AdjacencyMatrix;
pub use prim::{Mst, MstBuilder, compute_mst};
pub use tree::{Path, TreeAdjacency, find_path};
pub use types::{Edge, UnGraph, Weight};
