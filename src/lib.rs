//! Preference-driven one-to-one team pairing.
//!
//! Pairs two equal-size groups (team leads and juniors) so that the
//! harmonic mean of everyone's satisfaction is as high as possible. Each
//! participant ranks the whole opposite group; a participant's satisfaction
//! is `N - rank` of the partner they receive.
//!
//! The harmonic mean is not additive, so it cannot be optimized exactly by
//! an assignment solver. The pipeline therefore:
//!
//! 1. Builds an additive [`CostMatrix`](assignment::CostMatrix) from ranks
//! 2. Solves it exactly with the **Hungarian algorithm** ([`assignment::solve`])
//! 3. Refines that baseline toward the harmonic mean with either a
//!    **pairwise-swap local search** ([`local`]) or a **genetic algorithm**
//!    with elitism, tournament selection, repair crossover, swap mutation
//!    and an embedded local search ([`ga`])
//! 4. Converts the final permutation back into [`Team`](model::Team)s
//!
//! # Example
//!
//! ```
//! use u_pairing::matcher::{MatcherConfig, TeamMatcher};
//! use u_pairing::model::{Participant, PreferenceList};
//!
//! let leads = vec![Participant::new(1, "Ada"), Participant::new(2, "Brian")];
//! let juniors = vec![Participant::new(10, "Cleo"), Participant::new(20, "Dmitri")];
//! let lead_prefs = vec![
//!     PreferenceList::new(1, vec![20, 10]),
//!     PreferenceList::new(2, vec![10, 20]),
//! ];
//! let junior_prefs = vec![
//!     PreferenceList::new(10, vec![2, 1]),
//!     PreferenceList::new(20, vec![1, 2]),
//! ];
//!
//! let config = MatcherConfig::default().with_seed(42);
//! let result = TeamMatcher::build_teams(&leads, &juniors, &lead_prefs, &junior_prefs, &config)?;
//!
//! assert_eq!(result.teams[0].junior.name, "Dmitri");
//! assert_eq!(result.fitness, 2.0);
//! # Ok::<(), u_pairing::PairingError>(())
//! ```
//!
//! # Determinism
//!
//! The Hungarian solver and the local search are deterministic. The genetic
//! refiner owns one seeded generator per run; fix
//! [`GaConfig::seed`](ga::GaConfig::seed) for reproducible output.

pub mod assignment;
mod error;
pub mod ga;
pub mod local;
pub mod matcher;
pub mod matching;
pub mod model;
pub mod random;
pub mod satisfaction;

pub use error::{PairingError, Result};
pub use matcher::{build_matching, MatchResult, MatcherConfig, Strategy, TeamMatcher};
pub use matching::Matching;
