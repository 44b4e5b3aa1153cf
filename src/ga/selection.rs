//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::types::Candidate;

/// Tournament selection: sample `k` members uniformly with replacement and
/// return the index of the fittest (higher fitness wins, the first sampled
/// member wins ties).
///
/// `k = 0` is treated as `k = 1`.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng + ?Sized>(population: &[Candidate], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Matching;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[f64]) -> Vec<Candidate> {
        fitnesses
            .iter()
            .map(|&f| Candidate::new(Matching::identity(3), f))
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // P(best in 4 draws) = 1 - (3/4)^4 ~ 0.68
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[1.0, 5.0, 10.0, 2.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
        assert_eq!(tournament(&pop, 0, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Candidate> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
