//! Permutation-preserving genetic operators for matchings.
//!
//! # Crossover
//!
//! - [`half_split_crossover`]: first half from parent 1, compatible genes
//!   of the second half from parent 2, repaired with the unused indices
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions, O(1)

use rand::Rng;

use crate::matching::Matching;

const UNRESOLVED: usize = usize::MAX;

/// Half-split crossover with repair.
///
/// 1. Copy positions `0..n/2` from `parent1`, marking their values used
/// 2. For positions `n/2..n`, copy `parent2[i]` if that value is unused,
///    otherwise leave the slot unresolved
/// 3. Fill unresolved slots left to right with the unused values in
///    ascending order
///
/// The child is a permutation by construction. Identical parents yield a
/// copy of the parent.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn half_split_crossover(parent1: &Matching, parent2: &Matching) -> Matching {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child = vec![UNRESOLVED; n];
    let mut used = vec![false; n];
    let half = n / 2;

    for i in 0..half {
        child[i] = parent1[i];
        used[parent1[i]] = true;
    }

    for i in half..n {
        let candidate = parent2[i];
        if !used[candidate] {
            child[i] = candidate;
            used[candidate] = true;
        }
    }

    let mut free = (0..n).filter(|&v| !used[v]);
    for slot in child.iter_mut().filter(|slot| **slot == UNRESOLVED) {
        if let Some(v) = free.next() {
            *slot = v;
        }
    }

    Matching::from_vec_unchecked(child)
}

/// Swap mutation: exchange two uniformly chosen positions.
///
/// The two positions may coincide, in which case nothing changes.
pub fn swap_mutation<R: Rng + ?Sized>(matching: &mut Matching, rng: &mut R) {
    let n = matching.len();
    if n < 2 {
        return;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    matching.swap(a, b);
}
