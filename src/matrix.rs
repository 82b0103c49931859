use crate::error::{MstError, Result};
use crate::types::{UnGraph, Weight};
use petgraph::visit::{EdgeRef, NodeIndexable};

/// Dense weighted adjacency matrix of an undirected graph.
///
/// Entry `(i, j)` is the weight of edge `i -- j`, `0` means there is no edge.
///
/// <div class="warning">
///
/// > Construction checks shape, signs, symmetry and that the total edge weight fits in an `i64`.
/// > Connectivity is not checked here, [`crate::MstBuilder`] reports it.
/// > Diagonal entries are accepted and ignored.
///
/// </div>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Validates `rows` and takes ownership of them.
    ///
    /// Example:
    /// ```
    /// use prim_paths::AdjacencyMatrix;
    ///
    /// let m = AdjacencyMatrix::new(vec![vec![0, 3], vec![3, 0]]).unwrap();
    /// assert_eq!(m.node_count(), 2);
    /// assert_eq!(m.weight(0, 1), 3);
    /// ```
    pub fn new(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(MstError::InvalidGraph("matrix has no nodes".to_string()));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MstError::InvalidGraph(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            weights.extend(row);
        }

        let matrix = Self { n, weights };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from a petgraph graph, node `i` being `g.from_index(i)`.
    ///
    /// Parallel edges keep the lightest weight, self-loops are dropped.
    /// Zero-weight edges are indistinguishable from missing ones.
    pub fn from_graph(g: &UnGraph) -> Result<Self> {
        let n = g.node_count();
        if n == 0 {
            return Err(MstError::InvalidGraph("graph has no nodes".to_string()));
        }

        let mut weights = vec![0; n * n];
        for edge in g.edge_references() {
            let u = g.to_index(edge.source());
            let v = g.to_index(edge.target());
            let w = *edge.weight();
            if w < 0 {
                return Err(MstError::InvalidGraph(format!(
                    "edge {} -- {} has negative weight {}",
                    u, v, w
                )));
            }
            if u == v {
                continue;
            }
            let current = weights[u * n + v];
            if current == 0 || w < current {
                weights[u * n + v] = w;
                weights[v * n + u] = w;
            }
        }

        let matrix = Self { n, weights };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Checks signs and symmetry, and that the sum of all edge weights fits
    /// in a [`Weight`]. Any tree or path total is bounded by that sum.
    fn validate(&self) -> Result<()> {
        let mut total: Weight = 0;
        for i in 0..self.n {
            for j in 0..self.n {
                let w = self.weight(i, j);
                if w < 0 {
                    return Err(MstError::InvalidGraph(format!(
                        "entry ({}, {}) has negative weight {}",
                        i, j, w
                    )));
                }
                if j > i && w != self.weight(j, i) {
                    return Err(MstError::InvalidGraph(format!(
                        "entry ({}, {}) = {} differs from ({}, {}) = {}",
                        i,
                        j,
                        w,
                        j,
                        i,
                        self.weight(j, i)
                    )));
                }
                if j > i {
                    total = total.checked_add(w).ok_or_else(|| {
                        MstError::InvalidGraph("sum of edge weights overflows".to_string())
                    })?;
                }
            }
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Weight of `i -- j`, `0` if absent.
    ///
    /// Panics if either index is out of range.
    pub fn weight(&self, i: usize, j: usize) -> Weight {
        assert!(i < self.n && j < self.n, "node index out of range");
        self.weights[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[Weight] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i != j && self.weight(i, j) != 0
    }

    /// All edges `i -- j` with `i < j`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n)
                .filter(move |&j| self.weight(i, j) != 0)
                .map(move |j| (i, j, self.weight(i, j)))
        })
    }
}

impl TryFrom<Vec<Vec<Weight>>> for AdjacencyMatrix {
    type Error = MstError;

    fn try_from(rows: Vec<Vec<Weight>>) -> Result<Self> {
        Self::new(rows)
    }
}
