//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! seeding → elitism → selection → crossover → mutation → local search → repeat.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use super::config::GaConfig;
use super::operators::{half_split_crossover, swap_mutation};
use super::selection::tournament;
use super::types::{fittest, Candidate};
use crate::error::{PairingError, Result};
use crate::local::climb;
use crate::matching::Matching;
use crate::random::rng_from_option;
use crate::satisfaction::Objective;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best matching observed during the entire run.
    ///
    /// Not necessarily a member of the final population.
    pub best: Matching,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Fitness of the baseline the population was seeded with.
    pub baseline_fitness: f64,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on `time_limit_ms`.
    pub timed_out: bool,

    /// Best fitness after each generation; index 0 is the initial population.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let baseline = u_pairing::assignment::solve(&costs);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&evaluator, &baseline, &config)?;
/// assert!(result.best_fitness >= result.baseline_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from `baseline`.
    ///
    /// # Errors
    /// [`PairingError::InvalidInput`] for an invalid configuration, and any
    /// error raised by `objective`.
    pub fn run<O: Objective>(
        objective: &O,
        baseline: &Matching,
        config: &GaConfig,
    ) -> Result<GaResult> {
        Self::run_with_cancel(objective, baseline, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops at
    /// the start of the next generation and returns the best matching found
    /// so far.
    pub fn run_with_cancel<O: Objective>(
        objective: &O,
        baseline: &Matching,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate().map_err(PairingError::InvalidInput)?;

        let started = Instant::now();
        let mut rng = rng_from_option(config.seed);
        let n = baseline.len();
        let polish_sweeps = (config.local_search_sweeps > 0).then_some(config.local_search_sweeps);

        // 1. Seed: the baseline twice, random matchings for the rest
        let baseline_fitness = objective.evaluate(baseline)?;
        let mut population = Vec::with_capacity(config.population_size);
        population.push(Candidate::new(baseline.clone(), baseline_fitness));
        population.push(Candidate::new(baseline.clone(), baseline_fitness));
        while population.len() < config.population_size {
            let matching = Matching::random(n, &mut rng);
            let fitness = objective.evaluate(&matching)?;
            population.push(Candidate::new(matching, fitness));
        }

        // 2. Track best
        let mut best = population[fittest(&population)].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness);

        let mut generations = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            population = breed_generation(
                objective,
                &population,
                config,
                polish_sweeps,
                &mut best,
                &mut rng,
            )?;
            generations = gen + 1;
            fitness_history.push(best.fitness);
            debug!(
                generation = generations,
                best = best.fitness,
                leader = population[fittest(&population)].fitness,
                "generation done"
            );
        }

        info!(
            generations,
            baseline = baseline_fitness,
            best = best.fitness,
            cancelled,
            timed_out,
            "genetic refinement finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness,
            best: best.matching,
            baseline_fitness,
            generations,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

/// Builds the next population: the `elite_count` fittest members carried
/// over unchanged, then offspring bred by tournament, crossover, mutation
/// and optional polish until `population_size` is reached.
///
/// `best` is replaced whenever an offspring strictly beats it.
pub(crate) fn breed_generation<O: Objective, R: Rng + ?Sized>(
    objective: &O,
    population: &[Candidate],
    config: &GaConfig,
    polish_sweeps: Option<usize>,
    best: &mut Candidate,
    rng: &mut R,
) -> Result<Vec<Candidate>> {
    // Elite preservation (stable: earlier members win ties)
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| {
        population[b]
            .fitness
            .partial_cmp(&population[a].fitness)
            .unwrap_or(CmpOrdering::Equal)
    });
    let mut next_gen: Vec<Candidate> = ranked
        .iter()
        .take(config.elite_count)
        .map(|&i| population[i].clone())
        .collect();

    while next_gen.len() < config.population_size {
        let p1 = tournament(population, config.tournament_size, rng);
        let p2 = tournament(population, config.tournament_size, rng);

        let mut child = half_split_crossover(&population[p1].matching, &population[p2].matching);

        if rng.random_range(0.0..1.0) < config.mutation_rate {
            swap_mutation(&mut child, rng);
        }

        let fitness = match polish_sweeps {
            Some(sweeps) => climb(objective, &mut child, Some(sweeps), None)?.fitness,
            None => objective.evaluate(&child)?,
        };

        if fitness > best.fitness {
            *best = Candidate::new(child.clone(), fitness);
        }
        next_gen.push(Candidate::new(child, fitness));
    }

    Ok(next_gen)
}

// ============================================================================
// Tests
// ============================================================================
