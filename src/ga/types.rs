//! Population members.

use crate::matching::Matching;

/// A matching together with its evaluated fitness (higher is better).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub matching: Matching,
    pub fitness: f64,
}

impl Candidate {
    pub fn new(matching: Matching, fitness: f64) -> Self {
        Self { matching, fitness }
    }
}

/// Index of the fittest candidate; the earliest wins ties.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn fittest(population: &[Candidate]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, c) in population.iter().enumerate().skip(1) {
        if c.fitness > population[best].fitness {
            best = i;
        }
    }
    best
}
