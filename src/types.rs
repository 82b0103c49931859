/// Edge weight. Zero in an adjacency matrix means "no edge".
pub type Weight = i64;

/// Weighted edge of a spanning tree.
///
/// In MST output `from` is the endpoint that was already in the tree and `to`
/// the node that joined it when this edge was picked.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ({})", self.from, self.to, self.weight)
    }
}

/// Wrapper for petgraph's graph type. Node weights are the node ids.
pub type UnGraph = petgraph::graph::UnGraph<u32, Weight>;
