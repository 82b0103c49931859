use crate::error::{MstError, Result};
use crate::matrix::AdjacencyMatrix;
use crate::types::{Edge, UnGraph, Weight};
use fixedbitset::FixedBitSet;
use petgraph::visit::NodeIndexable;
use tracing::{debug, warn};

/// Computes the minimum spanning tree of `graph` rooted at node 0.
///
/// Shorthand for `MstBuilder::new().build(graph)`.
pub fn compute_mst(graph: &AdjacencyMatrix) -> Result<Mst> {
    MstBuilder::new().build(graph)
}

/// Dense Prim's algorithm, O(n^2) overall.
///
/// Every round picks the lightest edge `(i, j)` with `i` in the tree and `j`
/// outside it. Among equal-weight candidates the first one in a scan with
/// `i` ascending, then `j` ascending, wins.
///
/// <div class="warning">
///
/// > When several minimum spanning trees exist this returns one of them,
/// > fixed by the scan order above. Other implementations may legitimately
/// > pick a different tree with the same total weight.
///
/// </div>
#[derive(Clone, Debug)]
pub struct MstBuilder {
    root: usize,
}

impl Default for MstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MstBuilder {
    pub fn new() -> Self {
        Self { root: 0 }
    }

    /// Starts the tree from `root` instead of node 0.
    pub fn root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Runs Prim on `graph`.
    ///
    /// Fails with [`MstError::DisconnectedGraph`] if some node is unreachable
    /// from the root, and with [`MstError::InvalidNode`] if the root is out of range.
    pub fn build(&self, graph: &AdjacencyMatrix) -> Result<Mst> {
        let n = graph.node_count();
        if self.root >= n {
            return Err(MstError::InvalidNode {
                node: self.root,
                node_count: n,
            });
        }

        let mut in_tree = FixedBitSet::with_capacity(n);
        in_tree.insert(self.root);

        // cheapest known (weight, tree endpoint) for each node outside the tree
        let mut best: Vec<Option<(Weight, usize)>> = vec![None; n];
        relax(graph, self.root, &in_tree, &mut best);

        let mut edges = Vec::with_capacity(n - 1);
        let mut total_weight: Weight = 0;

        for _ in 1..n {
            let Some(edge) = lightest_crossing_edge(&in_tree, &best) else {
                warn!(
                    included = edges.len() + 1,
                    node_count = n,
                    "no edge leaves the tree, graph is disconnected"
                );
                return Err(MstError::DisconnectedGraph {
                    included: edges.len() + 1,
                    node_count: n,
                });
            };

            debug!(from = edge.from, to = edge.to, weight = edge.weight, "mst edge");
            in_tree.insert(edge.to);
            relax(graph, edge.to, &in_tree, &mut best);
            // bounded by the matrix total, which validation keeps in range
            total_weight += edge.weight;
            edges.push(edge);
        }

        debug!(node_count = n, root = self.root, total_weight, "mst built");

        Ok(Mst {
            node_count: n,
            root: self.root,
            edges,
            total_weight,
        })
    }
}

/// Offers the edges of a node that just joined the tree to its outside neighbors.
///
/// Equal weights keep the lower tree endpoint, as the row-major scan would.
fn relax(
    graph: &AdjacencyMatrix,
    joined: usize,
    in_tree: &FixedBitSet,
    best: &mut [Option<(Weight, usize)>],
) {
    for (j, &w) in graph.row(joined).iter().enumerate() {
        if w == 0 || in_tree.contains(j) {
            continue;
        }
        if best[j].is_none_or(|current| (w, joined) < current) {
            best[j] = Some((w, joined));
        }
    }
}

/// Lightest edge leaving the tree, smallest `(weight, from, to)` on ties.
fn lightest_crossing_edge(in_tree: &FixedBitSet, best: &[Option<(Weight, usize)>]) -> Option<Edge> {
    best.iter()
        .enumerate()
        .filter(|&(j, _)| !in_tree.contains(j))
        .filter_map(|(j, &b)| b.map(|(w, i)| (w, i, j)))
        .min()
        .map(|(w, i, j)| Edge::new(i, j, w))
}

/// Minimum spanning tree, edges in the order Prim added them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mst {
    node_count: usize,
    root: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl Mst {
    /// The `node_count - 1` tree edges in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Tree weight after each added edge. Last value equals [`Mst::total_weight`].
    pub fn running_totals(&self) -> Vec<Weight> {
        self.edges
            .iter()
            .scan(0, |acc, e| {
                *acc += e.weight;
                Some(*acc)
            })
            .collect()
    }

    /// Exports the tree as a petgraph graph, node `i` labelled `i`.
    ///
    /// Edge indices follow discovery order.
    pub fn to_graph(&self) -> UnGraph {
        let mut graph = UnGraph::with_capacity(self.node_count, self.edges.len());
        for i in 0..self.node_count {
            graph.add_node(i as u32);
        }
        for e in &self.edges {
            graph.add_edge(graph.from_index(e.from), graph.from_index(e.to), e.weight);
        }
        graph
    }
}
