use crate::error::{MstError, Result};
use crate::matrix::AdjacencyMatrix;
use crate::prim::Mst;
use crate::types::{Edge, Weight};
use fixedbitset::FixedBitSet;
use tracing::debug;

/// Undirected adjacency lists of a tree.
///
/// Each edge `(u, v, w)` adds `v` to `u`'s list and `u` to `v`'s list,
/// in the order the edges are given. Every node in `[0, n)` has a list,
/// possibly empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeAdjacency {
    neighbors: Vec<Vec<(usize, Weight)>>,
}

impl TreeAdjacency {
    /// Builds adjacency for `node_count` nodes from `edges`.
    ///
    /// Fails with [`MstError::InvalidNode`] if an edge endpoint is out of range.
    pub fn new(edges: &[Edge], node_count: usize) -> Result<Self> {
        for e in edges {
            for node in [e.from, e.to] {
                if node >= node_count {
                    return Err(MstError::InvalidNode { node, node_count });
                }
            }
        }
        Ok(Self::from_edges(edges, node_count))
    }

    /// Endpoints of an `Mst` are always in range.
    pub fn from_mst(mst: &Mst) -> Self {
        Self::from_edges(mst.edges(), mst.node_count())
    }

    fn from_edges(edges: &[Edge], node_count: usize) -> Self {
        let mut neighbors = vec![Vec::new(); node_count];
        for e in edges {
            neighbors[e.from].push((e.to, e.weight));
            neighbors[e.to].push((e.from, e.weight));
        }
        Self { neighbors }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node` with edge weights, in insertion order.
    ///
    /// Panics if `node` is out of range.
    pub fn neighbors(&self, node: usize) -> &[(usize, Weight)] {
        &self.neighbors[node]
    }

    /// See [`find_path`].
    pub fn find_path(&self, start: usize, end: usize) -> Result<Path> {
        find_path(self, start, end)
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.node_count() {
            return Err(MstError::InvalidNode {
                node,
                node_count: self.node_count(),
            });
        }
        Ok(())
    }
}

/// Finds the path from `start` to `end` by depth-first search.
///
/// Neighbors are tried in adjacency order and the search stops at the first
/// time `end` is reached. On a tree that is the unique simple path; on a
/// graph with cycles it is whichever path the DFS order hits first.
///
/// Iterative, so deep trees do not overflow the call stack.
pub fn find_path(tree: &TreeAdjacency, start: usize, end: usize) -> Result<Path> {
    tree.check_node(start)?;
    tree.check_node(end)?;

    if start == end {
        return Ok(Path { edges: Vec::new() });
    }

    let mut visited = FixedBitSet::with_capacity(tree.node_count());
    visited.insert(start);

    // (node, index of the next neighbor to try)
    let mut stack = vec![(start, 0)];
    let mut edges = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let u = frame.0;
        let Some(&(v, _)) = tree.neighbors(u).get(frame.1) else {
            // exhausted u, backtrack
            stack.pop();
            edges.pop();
            continue;
        };
        frame.1 += 1;

        if visited.contains(v) {
            continue;
        }
        visited.insert(v);
        edges.push((u, v));

        if v == end {
            debug!(start, end, length = edges.len(), "path found");
            return Ok(Path { edges });
        }
        stack.push((v, 0));
    }

    Err(MstError::NoPath { start, end })
}

/// Walk through a tree as a sequence of directed edges.
///
/// For consecutive edges `(u_i, v_i)`, `(u_j, v_j)` it holds `v_i == u_j`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    edges: Vec<(usize, usize)>,
}

impl Path {
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Visited nodes, start to end. Empty for an empty path.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .first()
            .map(|&(u, _)| u)
            .into_iter()
            .chain(self.edges.iter().map(|&(_, v)| v))
    }

    /// Sum of the path's edge weights looked up in `graph`.
    ///
    /// A simple path uses each edge once, so this stays below the matrix total.
    pub fn weight(&self, graph: &AdjacencyMatrix) -> Weight {
        self.edges.iter().map(|&(u, v)| graph.weight(u, v)).sum()
    }
}
