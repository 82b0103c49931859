use crate::matrix::AdjacencyMatrix;
use crate::types::Weight;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_rows(n: usize, m: usize, max_weight: Weight, rng: &mut StdRng) -> Vec<Vec<Weight>> {
    let mut rows = vec![vec![0; n]; n];

    // random spanning tree first, so the graph is connected
    for i in 1..n {
        let j = rng.random_range(0..i);
        let w = rng.random_range(1..=max_weight);
        rows[i][j] = w;
        rows[j][i] = w;
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s == t {
            continue;
        }
        let w = rng.random_range(1..=max_weight);
        rows[s][t] = w;
        rows[t][s] = w;
    }

    rows
}

/// Connected graph with `n` nodes and at most `m` edges, weights in `1..=max_weight`.
///
/// Small `max_weight` gives plenty of ties.
#[allow(dead_code)]
pub fn random_connected_matrix(n: usize, m: usize, max_weight: Weight, seed: usize) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    AdjacencyMatrix::new(random_rows(n, m, max_weight, &mut rng)).unwrap()
}

/// Like [`random_connected_matrix`] but with one isolated non-root node.
#[allow(dead_code)]
pub fn random_disconnected_matrix(n: usize, m: usize, max_weight: Weight, seed: usize) -> AdjacencyMatrix {
    assert!(n > 1);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let inner = random_rows(n - 1, m, max_weight, &mut rng);
    let isolated = rng.random_range(1..n);
    let shift = |i: usize| if i < isolated { i } else { i + 1 };

    let mut rows = vec![vec![0; n]; n];
    for (i, row) in inner.iter().enumerate() {
        for (j, &w) in row.iter().enumerate() {
            rows[shift(i)][shift(j)] = w;
        }
    }

    AdjacencyMatrix::new(rows).unwrap()
}
