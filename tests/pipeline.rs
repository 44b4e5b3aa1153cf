mod common;

use std::collections::HashSet;

use common::random_cohort;
use u_pairing::assignment::{solve, CostMatrix};
use u_pairing::ga::GaConfig;
use u_pairing::model::{PreferenceModel, SatisfactionScale};
use u_pairing::satisfaction::{Objective, SatisfactionEvaluator};
use u_pairing::{build_matching, MatcherConfig, PairingError, Strategy, TeamMatcher};

fn run(cohort: &common::Cohort, config: &MatcherConfig) -> u_pairing::MatchResult {
    TeamMatcher::build_teams(
        &cohort.team_leads,
        &cohort.juniors,
        &cohort.team_lead_preferences,
        &cohort.junior_preferences,
        config,
    )
    .unwrap()
}

#[test]
fn twenty_by_twenty_genetic_beats_or_matches_baseline() {
    let cohort = random_cohort(20, 2024);
    let config = MatcherConfig::default().with_seed(42);

    let result = run(&cohort, &config);

    assert_eq!(result.teams.len(), 20);
    assert!(result.fitness >= result.baseline_fitness);
    assert!(result.fitness <= 20.0);

    let juniors: HashSet<u32> = result.teams.iter().map(|t| t.junior.id).collect();
    assert_eq!(juniors.len(), 20, "every junior must be used exactly once");
    for (i, team) in result.teams.iter().enumerate() {
        assert_eq!(team.team_lead, cohort.team_leads[i]);
    }
}

#[test]
fn local_search_strategy_never_below_baseline() {
    for seed in 0..5 {
        let cohort = random_cohort(15, seed);
        let config = MatcherConfig::default().with_strategy(Strategy::LocalSearch);
        let result = run(&cohort, &config);
        assert!(result.fitness >= result.baseline_fitness);
    }
}

#[test]
fn reported_fitness_matches_teams() {
    let cohort = random_cohort(12, 77);
    let config = MatcherConfig::default().with_seed(3);
    let result = run(&cohort, &config);

    let model = PreferenceModel::new(
        &cohort.team_leads,
        &cohort.juniors,
        &cohort.team_lead_preferences,
        &cohort.junior_preferences,
        SatisfactionScale::Derived,
    )
    .unwrap();
    let evaluator = SatisfactionEvaluator::new(&model);
    let recomputed = evaluator.evaluate(&result.matching).unwrap();
    assert!((recomputed - result.fitness).abs() < 1e-12);

    let baseline = solve(&CostMatrix::from_preferences(&model));
    let baseline_fitness = evaluator.evaluate(&baseline).unwrap();
    assert!((baseline_fitness - result.baseline_fitness).abs() < 1e-12);
}

#[test]
fn fixed_seed_is_reproducible() {
    let cohort = random_cohort(16, 5);
    let config = MatcherConfig::default().with_ga(
        GaConfig::default()
            .with_population_size(24)
            .with_max_generations(20)
            .with_seed(99),
    );

    let a = run(&cohort, &config);
    let b = run(&cohort, &config);
    assert_eq!(a.matching, b.matching);
    assert_eq!(a.teams, b.teams);
}

#[test]
fn exact_strategy_maximizes_summed_satisfaction() {
    let cohort = random_cohort(7, 11);
    let config = MatcherConfig::default().with_strategy(Strategy::Exact);
    let result = run(&cohort, &config);
    assert_eq!(result.fitness, result.baseline_fitness);
}

#[test]
fn mismatched_groups_are_rejected() {
    let mut cohort = random_cohort(4, 1);
    cohort.juniors.pop();
    let err = build_matching(
        &cohort.team_leads,
        &cohort.juniors,
        &cohort.team_lead_preferences,
        &cohort.junior_preferences,
        &MatcherConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PairingError::InvalidInput(_)));
}

#[test]
fn fixed_scale_must_match_group_size() {
    let cohort = random_cohort(5, 1);
    let config = MatcherConfig::default().with_scale(SatisfactionScale::Fixed(20));
    let err = TeamMatcher::build_teams(
        &cohort.team_leads,
        &cohort.juniors,
        &cohort.team_lead_preferences,
        &cohort.junior_preferences,
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, PairingError::InvalidInput(_)));
}

#[test]
fn missing_counterpart_is_lookup_failure() {
    let mut cohort = random_cohort(4, 8);
    // replace the junior ranked last with a duplicate of the first
    let list = &mut cohort.junior_preferences[2];
    let dropped = list.ranked_ids[3];
    list.ranked_ids[3] = list.ranked_ids[0];

    let err = build_matching(
        &cohort.team_leads,
        &cohort.juniors,
        &cohort.team_lead_preferences,
        &cohort.junior_preferences,
        &MatcherConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PairingError::PreferenceLookupFailed {
            owner: 1003,
            counterpart: dropped,
        }
    );
}
