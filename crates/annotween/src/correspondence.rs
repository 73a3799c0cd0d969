//! Order-preserving vertex correspondence between two point sequences.

use crate::geometry::distance;
use crate::types::Coordinate;

/// Map every point of `p1` onto a distinct point of `p2`, preserving order and
/// minimizing the summed Euclidean distance.
///
/// Returns a strictly increasing list of `p1.len()` indices into `p2` and the
/// total cost. `p1` must not be longer than `p2`; callers swap the sequences
/// beforehand. The table is O(m·n) and filling it O(m·n²), which is fine for
/// per-annotation vertex counts.
pub fn find_vertex_mapping(p1: &[Coordinate], p2: &[Coordinate]) -> (Vec<usize>, f64) {
    let (m, n) = (p1.len(), p2.len());
    debug_assert!(
        m <= n,
        "the first sequence must have no more points than the second"
    );

    // f[i][j]: least cost of mapping the first i points of p1 into the first
    // j points of p2. g[i][j]: 1-based index in p2 that p1[i - 1] takes in
    // that optimum.
    let mut f = vec![vec![0.0f64; n + 1]; m + 1];
    let mut g = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in i..=n {
            f[i][j] = f[i - 1][j - 1] + distance(p1[i - 1], p2[j - 1]);
            g[i][j] = j;
            for k in i..j {
                if f[i][k] < f[i][j] {
                    f[i][j] = f[i][k];
                    g[i][j] = g[i][k];
                }
            }
        }
    }

    let mut mapping: Vec<usize> = Vec::with_capacity(m);
    let mut bound = n;
    for i in (1..=m).rev() {
        let idx = g[i][bound];
        mapping.push(idx - 1);
        bound = idx - 1;
    }
    mapping.reverse();

    (mapping, f[m][n])
}
