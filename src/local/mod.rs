//! Pairwise-swap local search.
//!
//! A deterministic first-improvement hill-climb over the swap neighborhood
//! of a [`Matching`](crate::matching::Matching). Used standalone (run to
//! convergence) and embedded in the genetic refiner with a sweep cap.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub(crate) use runner::climb;
pub use runner::{LocalSearchResult, LocalSearchRunner};
