//! End-to-end team building.
//!
//! participants + preference lists → [`PreferenceModel`](crate::model::PreferenceModel)
//! → [`CostMatrix`](crate::assignment::CostMatrix) → Hungarian baseline →
//! refiner chosen by [`Strategy`] → [`Team`](crate::model::Team) list.

mod config;
mod runner;

pub use config::{MatcherConfig, Strategy};
pub use runner::{build_matching, MatchResult, TeamMatcher};
