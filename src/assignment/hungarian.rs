//! Hungarian algorithm (shortest augmenting path with dual potentials).
//!
//! # Algorithm
//!
//! Rows are inserted one at a time. For each new row an alternating tree is
//! grown from a virtual column 0:
//!
//! 1. Relax reduced costs `c[i0][j] - u[i0] - v[j]` into `minv[j]` for every
//!    column outside the tree, remembering the predecessor in `way[j]`.
//! 2. Take the smallest slack `delta`, shift the potentials of every column
//!    (tree columns get `u += delta`, `v -= delta`; the rest get
//!    `minv -= delta`) and add the arg-min column to the tree.
//! 3. Stop once the added column is unassigned, then augment by walking
//!    `way` back to column 0.
//!
//! # Complexity
//! O(n³) time, O(n) extra space per row insertion on top of the matrix.
//!
//! Ties resolve to the lowest column index reached in scan order, so the
//! output is a deterministic function of the matrix.

use super::cost::CostMatrix;
use crate::matching::Matching;

/// Returns a minimum-total-cost matching for `costs`.
///
/// Entries may be negative. Magnitudes must stay well below `i64::MAX / 4`
/// so that potential updates cannot overflow.
pub fn solve(costs: &CostMatrix) -> Matching {
    let n = costs.size();
    if n <= 1 {
        return Matching::identity(n);
    }

    const INF: i64 = i64::MAX;

    // 1-based rows and columns; index 0 is the virtual root.
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; n + 1];
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![INF; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = INF;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = costs.get(i0 - 1, j - 1) - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Augment along the alternating path.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=n {
        assignment[p[j] - 1] = j - 1;
    }
    Matching::from_vec_unchecked(assignment)
}
