//! Permutation-encoded matchings.
//!
//! A [`Matching`] maps each team-lead position `i` to a junior position
//! `matching[i]`. It is a bijection over `0..n` at all times: the only
//! mutating operation is [`Matching::swap`], and every constructor either
//! builds a permutation by construction or checks one.

use std::ops::Deref;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PairingError, Result};

/// A bijective pairing of team-lead positions to junior positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matching(Vec<usize>);

impl Matching {
    /// The identity matching `i -> i`.
    pub fn identity(n: usize) -> Self {
        Matching((0..n).collect())
    }

    /// A uniformly random matching of size `n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(rng);
        Matching(perm)
    }

    /// Wraps `perm` after checking that it is a permutation of `0..len`.
    pub fn try_from_vec(perm: Vec<usize>) -> Result<Self> {
        if !is_permutation(&perm) {
            return Err(PairingError::invalid(format!(
                "not a permutation of 0..{}: {perm:?}",
                perm.len()
            )));
        }
        Ok(Matching(perm))
    }

    /// Wraps a vector the caller has already built as a permutation.
    pub(crate) fn from_vec_unchecked(perm: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&perm), "not a permutation: {perm:?}");
        Matching(perm)
    }

    /// Exchanges the juniors assigned to team-lead positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// The underlying index slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the matching, returning the index vector.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Matching {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Matching {
    type Error = PairingError;

    fn try_from(perm: Vec<usize>) -> Result<Self> {
        Matching::try_from_vec(perm)
    }
}

/// Returns `true` if `perm` contains every value in `0..perm.len()` once.
pub fn is_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
