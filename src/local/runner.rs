//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting matching
//! 2. Sweep all pairs `(i, k)` with `i < k` in lexicographic order:
//!    swap the two assigned juniors, re-evaluate, keep the swap if the
//!    fitness strictly improves, otherwise swap back
//! 3. Repeat sweeps until one accepts nothing or the sweep cap is reached
//!
//! Acceptance is first-improvement in scan order, not steepest ascent. The
//! result depends only on the starting matching.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::config::LocalSearchConfig;
use crate::error::{PairingError, Result};
use crate::matching::Matching;
use crate::satisfaction::Objective;

/// Outcome of a local search run. The matching itself is improved in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchResult {
    /// Fitness of the matching after the run.
    pub fitness: f64,
    /// Number of sweeps started.
    pub sweeps: usize,
    /// Number of swaps kept.
    pub accepted_swaps: usize,
    /// Whether the last sweep accepted no swap (local optimum).
    pub converged: bool,
    /// Whether the run stopped on the cancellation flag.
    pub cancelled: bool,
}

/// Pairwise-swap hill-climb runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Improves `matching` in place.
    ///
    /// # Errors
    /// Propagates evaluation errors from `objective`, and returns
    /// [`PairingError::InvalidInput`] for an invalid configuration.
    pub fn run<O: Objective>(
        objective: &O,
        matching: &mut Matching,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult> {
        Self::run_with_cancel(objective, matching, config, None)
    }

    /// Like [`run`](Self::run), checking `cancel` before every sweep.
    pub fn run_with_cancel<O: Objective>(
        objective: &O,
        matching: &mut Matching,
        config: &LocalSearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<LocalSearchResult> {
        config.validate().map_err(PairingError::InvalidInput)?;
        let result = climb(objective, matching, config.max_sweeps, cancel.as_deref())?;
        info!(
            fitness = result.fitness,
            sweeps = result.sweeps,
            accepted = result.accepted_swaps,
            converged = result.converged,
            "local search finished"
        );
        Ok(result)
    }
}

/// Shared hill-climb used standalone and as the GA's offspring polish.
pub(crate) fn climb<O: Objective>(
    objective: &O,
    matching: &mut Matching,
    max_sweeps: Option<usize>,
    cancel: Option<&AtomicBool>,
) -> Result<LocalSearchResult> {
    let n = matching.len();
    let mut current = objective.evaluate(matching)?;
    let mut sweeps = 0usize;
    let mut accepted_swaps = 0usize;
    let mut converged = false;
    let mut cancelled = false;

    loop {
        if max_sweeps.is_some_and(|max| sweeps >= max) {
            break;
        }
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }
        sweeps += 1;

        let mut improved = 0usize;
        for i in 0..n {
            for k in (i + 1)..n {
                matching.swap(i, k);
                let candidate = objective.evaluate(matching)?;
                if candidate > current {
                    current = candidate;
                    improved += 1;
                } else {
                    matching.swap(i, k);
                }
            }
        }
        accepted_swaps += improved;
        debug!(sweep = sweeps, accepted = improved, fitness = current, "sweep done");

        if improved == 0 {
            converged = true;
            break;
        }
    }

    Ok(LocalSearchResult {
        fitness: current,
        sweeps,
        accepted_swaps,
        converged,
        cancelled,
    })
}
