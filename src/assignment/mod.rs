//! Exact linear-cost assignment.
//!
//! - [`CostMatrix`]: square additive cost matrix, built from preference ranks
//! - [`solve`]: Kuhn–Munkres (Hungarian) minimum-cost perfect matching
//!
//! The solver only optimizes additive objectives. Its output seeds the
//! refiners that target the harmonic mean.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Munkres (1957), "Algorithms for the Assignment and Transportation Problems"

mod cost;
mod hungarian;

pub use cost::CostMatrix;
pub use hungarian::solve;
