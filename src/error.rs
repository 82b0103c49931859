//! Error types for MST construction and tree path queries.

use thiserror::Error;

/// Everything that can go wrong when building a tree or walking it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MstError {
    /// Malformed adjacency matrix (empty, non-square, negative or asymmetric).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// Prim ran out of eligible edges before reaching every node.
    #[error("graph is not connected: only {included} of {node_count} nodes reachable from the root")]
    DisconnectedGraph { included: usize, node_count: usize },

    /// Node index outside `[0, node_count)`.
    #[error("node {node} out of range for a graph with {node_count} nodes")]
    InvalidNode { node: usize, node_count: usize },

    /// Only reachable on hand-built forests; a tree from `Mst` always has a path.
    #[error("no path from {start} to {end}")]
    NoPath { start: usize, end: usize },
}

/// Result type for MST operations.
pub type Result<T> = std::result::Result<T, MstError>;
