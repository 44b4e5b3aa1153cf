//! Team matcher execution.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::info;

use super::config::{MatcherConfig, Strategy};
use crate::assignment::{solve, CostMatrix};
use crate::error::{PairingError, Result};
use crate::ga::GaRunner;
use crate::local::{LocalSearchConfig, LocalSearchRunner};
use crate::matching::Matching;
use crate::model::{assemble_teams, Participant, PreferenceList, PreferenceModel, Team};
use crate::satisfaction::{Objective, SatisfactionEvaluator};

/// Outcome of a matcher call.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// One team per team lead, in team-lead input order.
    pub teams: Vec<Team>,
    /// The final permutation (`teams[i].junior == juniors[matching[i]]`).
    pub matching: Matching,
    /// Harmonic-mean satisfaction of `matching`.
    pub fitness: f64,
    /// Harmonic-mean satisfaction of the Hungarian baseline.
    pub baseline_fitness: f64,
    /// Strategy that produced `matching`.
    pub strategy: Strategy,
    /// Whether refinement stopped on the cancellation flag.
    pub cancelled: bool,
}

/// Builds teams from two groups and their preference lists.
pub struct TeamMatcher;

impl TeamMatcher {
    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// - [`PairingError::InvalidInput`]: mismatched sizes, bad list lengths,
    ///   duplicated ids, scale mismatch, or an invalid configuration
    /// - [`PairingError::PreferenceLookupFailed`]: a list misses a counterpart
    /// - [`PairingError::NumericDegeneracy`]: a non-positive score reached the
    ///   harmonic mean
    pub fn build_teams(
        team_leads: &[Participant],
        juniors: &[Participant],
        team_lead_preferences: &[PreferenceList],
        junior_preferences: &[PreferenceList],
        config: &MatcherConfig,
    ) -> Result<MatchResult> {
        Self::build_teams_with_cancel(
            team_leads,
            juniors,
            team_lead_preferences,
            junior_preferences,
            config,
            None,
        )
    }

    /// Like [`build_teams`](Self::build_teams), with a cancellation flag
    /// checked between GA generations and local search sweeps.
    #[tracing::instrument(
        level = "debug",
        name = "build_teams",
        skip_all,
        fields(n = team_leads.len(), strategy = ?config.strategy)
    )]
    pub fn build_teams_with_cancel(
        team_leads: &[Participant],
        juniors: &[Participant],
        team_lead_preferences: &[PreferenceList],
        junior_preferences: &[PreferenceList],
        config: &MatcherConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<MatchResult> {
        config.validate().map_err(PairingError::InvalidInput)?;

        let model = PreferenceModel::new(
            team_leads,
            juniors,
            team_lead_preferences,
            junior_preferences,
            config.scale,
        )?;
        let evaluator = SatisfactionEvaluator::new(&model);

        let baseline = solve(&CostMatrix::from_preferences(&model));
        let baseline_fitness = evaluator.evaluate(&baseline)?;

        let (matching, fitness, cancelled) = match config.strategy {
            Strategy::Exact => (baseline, baseline_fitness, false),
            Strategy::LocalSearch => {
                let mut matching = baseline;
                let outcome = LocalSearchRunner::run_with_cancel(
                    &evaluator,
                    &mut matching,
                    &LocalSearchConfig::unbounded(),
                    cancel,
                )?;
                (matching, outcome.fitness, outcome.cancelled)
            }
            Strategy::Genetic => {
                let outcome = GaRunner::run_with_cancel(&evaluator, &baseline, &config.ga, cancel)?;
                (outcome.best, outcome.best_fitness, outcome.cancelled)
            }
        };

        info!(
            n = model.size(),
            baseline = baseline_fitness,
            fitness,
            "teams built"
        );

        Ok(MatchResult {
            teams: assemble_teams(&matching, team_leads, juniors),
            matching,
            fitness,
            baseline_fitness,
            strategy: config.strategy,
            cancelled,
        })
    }
}

/// Pairs team leads with juniors, returning only the team list.
///
/// Convenience wrapper over [`TeamMatcher::build_teams`].
pub fn build_matching(
    team_leads: &[Participant],
    juniors: &[Participant],
    team_lead_preferences: &[PreferenceList],
    junior_preferences: &[PreferenceList],
    config: &MatcherConfig,
) -> Result<Vec<Team>> {
    TeamMatcher::build_teams(
        team_leads,
        juniors,
        team_lead_preferences,
        junior_preferences,
        config,
    )
    .map(|result| result.teams)
}
