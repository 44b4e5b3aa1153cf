//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the genetic refiner.
///
/// # Defaults
///
/// ```
/// use u_pairing::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pairing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_max_generations(100)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of matchings in each generation.
    ///
    /// The first two slots of the initial population hold the Hungarian
    /// baseline; the rest are random.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Number of fittest matchings copied unchanged into the next generation.
    pub elite_count: usize,

    /// Sample size for tournament selection (with replacement).
    pub tournament_size: usize,

    /// Probability of applying one swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Sweep cap for the local search applied to every offspring.
    ///
    /// Set to 0 to skip the polish step.
    pub local_search_sweeps: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so a run may overshoot by
    /// one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 50,
            elite_count: 2,
            tournament_size: 3,
            mutation_rate: 0.5,
            local_search_sweeps: 5,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-offspring local search sweep cap (0 disables it).
    pub fn with_local_search_sweeps(mut self, sweeps: usize) -> Self {
        self.local_search_sweeps = sweeps;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
