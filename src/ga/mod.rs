//! Genetic refiner.
//!
//! Evolves matchings toward a higher [`Objective`](crate::satisfaction::Objective)
//! value, starting from a baseline (normally the Hungarian solution).
//!
//! Each generation keeps the top elites unchanged, then breeds offspring by
//! tournament selection, [`half_split_crossover`](operators::half_split_crossover),
//! an optional [`swap_mutation`](operators::swap_mutation), and a short
//! embedded local search.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generations, rates, seed
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best matching and per-generation history
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms
//!   and Martial Arts: Towards Memetic Algorithms"

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::Candidate;
