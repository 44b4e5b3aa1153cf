//! Satisfaction scores and the harmonic-mean objective.
//!
//! For a matching of size `n` there are `2n` scores, one per side of each
//! pair: `N - rank`. The fitness is their harmonic mean
//! `2n / Σ(1 / score_k)`, which punishes a single unhappy participant far
//! more than the arithmetic mean does. Higher is better.

use crate::error::{PairingError, Result};
use crate::matching::Matching;
use crate::model::PreferenceModel;

/// A maximization objective over matchings.
///
/// The refiners in [`local`](crate::local) and [`ga`](crate::ga) are generic
/// over this trait. Implementations must be pure: the same matching always
/// evaluates to the same value.
pub trait Objective {
    /// Fitness of `matching` (higher is better).
    fn evaluate(&self, matching: &Matching) -> Result<f64>;
}

/// Harmonic-mean satisfaction over a [`PreferenceModel`].
#[derive(Debug, Clone, Copy)]
pub struct SatisfactionEvaluator<'a> {
    model: &'a PreferenceModel,
}

impl<'a> SatisfactionEvaluator<'a> {
    pub fn new(model: &'a PreferenceModel) -> Self {
        Self { model }
    }

    /// The `2n` scores of `matching`: team-lead score, then junior score,
    /// for each pair in team-lead order.
    pub fn scores(&self, matching: &Matching) -> Vec<i64> {
        let mut scores = Vec::with_capacity(matching.len() * 2);
        for (lead, &junior) in matching.iter().enumerate() {
            scores.push(self.model.team_lead_satisfaction(lead, junior));
            scores.push(self.model.junior_satisfaction(junior, lead));
        }
        scores
    }

    /// Harmonic mean of the scores of `matching`.
    pub fn harmonic_mean(&self, matching: &Matching) -> Result<f64> {
        harmonic_mean(&self.scores(matching))
    }
}

impl Objective for SatisfactionEvaluator<'_> {
    fn evaluate(&self, matching: &Matching) -> Result<f64> {
        self.harmonic_mean(matching)
    }
}

/// Harmonic mean of strictly positive integer scores.
///
/// An empty slice yields `0.0`.
///
/// # Errors
/// [`PairingError::NumericDegeneracy`] if any score is `<= 0`.
pub fn harmonic_mean(scores: &[i64]) -> Result<f64> {
    if scores.is_empty() {
        return Ok(0.0);
    }
    let mut reciprocal_sum = 0.0;
    for (position, &score) in scores.iter().enumerate() {
        if score <= 0 {
            return Err(PairingError::NumericDegeneracy { position, score });
        }
        reciprocal_sum += 1.0 / score as f64;
    }
    Ok(scores.len() as f64 / reciprocal_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Participant, PreferenceList, SatisfactionScale};

    #[test]
    fn test_harmonic_mean_values() {
        assert!((harmonic_mean(&[4, 4, 4]).unwrap() - 4.0).abs() < 1e-12);
        // 2 / (1/1 + 1/3) = 1.5
        assert!((harmonic_mean(&[1, 3]).unwrap() - 1.5).abs() < 1e-12);
        assert_eq!(harmonic_mean(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_harmonic_mean_rejects_non_positive() {
        assert_eq!(
            harmonic_mean(&[3, 0, 2]),
            Err(PairingError::NumericDegeneracy {
                position: 1,
                score: 0
            })
        );
        assert!(matches!(
            harmonic_mean(&[-1]),
            Err(PairingError::NumericDegeneracy { .. })
        ));
    }

    #[test]
    fn test_scores_and_fitness() {
        let leads = vec![Participant::new(1, "T1"), Participant::new(2, "T2")];
        let juniors = vec![Participant::new(1, "J1"), Participant::new(2, "J2")];
        let lp = vec![
            PreferenceList::new(1, vec![2, 1]),
            PreferenceList::new(2, vec![1, 2]),
        ];
        let jp = vec![
            PreferenceList::new(1, vec![1, 2]),
            PreferenceList::new(2, vec![2, 1]),
        ];
        let model =
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived).unwrap();
        let eval = SatisfactionEvaluator::new(&model);

        let crossed = Matching::try_from_vec(vec![1, 0]).unwrap();
        // T1-J2: T1 gets 2, J2 gets 1; T2-J1: T2 gets 2, J1 gets 1
        assert_eq!(eval.scores(&crossed), vec![2, 1, 2, 1]);

        let straight = Matching::identity(2);
        assert_eq!(eval.scores(&straight), vec![1, 2, 1, 2]);

        let fitness = eval.evaluate(&crossed).unwrap();
        assert!((fitness - 4.0 / 3.0).abs() < 1e-12);
    }
}
