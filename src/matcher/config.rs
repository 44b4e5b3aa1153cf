//! Matcher configuration.

use crate::ga::GaConfig;
use crate::model::SatisfactionScale;

/// Refinement applied to the Hungarian baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Return the Hungarian baseline unchanged.
    Exact,
    /// Pairwise-swap hill-climb run to convergence.
    LocalSearch,
    /// Genetic refiner seeded with the baseline.
    #[default]
    Genetic,
}

/// Configuration for [`TeamMatcher`](super::TeamMatcher).
///
/// # Examples
///
/// ```
/// use u_pairing::matcher::{MatcherConfig, Strategy};
/// use u_pairing::model::SatisfactionScale;
///
/// let config = MatcherConfig::default()
///     .with_strategy(Strategy::LocalSearch)
///     .with_scale(SatisfactionScale::Fixed(20))
///     .with_seed(7);
/// assert_eq!(config.ga.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatcherConfig {
    /// Refinement strategy.
    pub strategy: Strategy,
    /// Choice of the satisfaction scale `N`.
    pub scale: SatisfactionScale,
    /// Parameters of the genetic refiner (used by [`Strategy::Genetic`]).
    pub ga: GaConfig,
}

impl MatcherConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_scale(mut self, scale: SatisfactionScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Shorthand for `ga.seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga.seed = Some(seed);
        self
    }

    /// Validates the parts of the configuration the strategy uses.
    pub fn validate(&self) -> Result<(), String> {
        match self.strategy {
            Strategy::Genetic => self.ga.validate(),
            Strategy::Exact | Strategy::LocalSearch => Ok(()),
        }
    }
}
