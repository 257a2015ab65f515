//! Beacon solver configuration.

use crate::error::PlacementError;
use crate::ga::{invalid, is_rate, GaConfig, Selection};

/// Parameters of the beacon placement search.
///
/// Every tunable constant of the search lives here, so tests and callers
/// can vary any of them per run.
///
/// ```
/// use u_beacon::placement::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_num_beacons(4)
///     .with_population_size(80)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of beacons to place (K).
    pub num_beacons: usize,

    /// Individuals per generation.
    pub population_size: usize,

    /// Generations to run. There is no early stop on convergence.
    pub num_generations: usize,

    /// Per-child probability of a single point mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population carried forward unchanged (0.0–1.0).
    pub elitism_rate: f64,

    /// Seed of the run's random generator. `None` draws a fresh one.
    pub seed: Option<u64>,

    /// Beacons closer than `radius * spacing_threshold_ratio` are penalized.
    pub spacing_threshold_ratio: f64,

    /// Amount subtracted from the coverage ratio when any pair is too close.
    ///
    /// The penalty is a step: two beacons just under the threshold cost
    /// exactly as much as two beacons on the same spot.
    pub spacing_penalty: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Evaluate fitness with rayon (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_beacons: 3,
            population_size: 50,
            num_generations: 100,
            mutation_rate: 0.1,
            elitism_rate: 0.1,
            seed: Some(42),
            spacing_threshold_ratio: 0.25,
            spacing_penalty: 0.5,
            selection: Selection::Uniform,
            parallel: false,
        }
    }
}

impl SolverConfig {
    pub fn with_num_beacons(mut self, n: usize) -> Self {
        self.num_beacons = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws a fresh seed on every run.
    pub fn with_random_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Sets the spacing threshold ratio and penalty magnitude.
    pub fn with_spacing_penalty(mut self, threshold_ratio: f64, penalty: f64) -> Self {
        self.spacing_threshold_ratio = threshold_ratio;
        self.spacing_penalty = penalty;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The engine parameters derived from this configuration.
    pub fn ga_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            max_generations: self.num_generations,
            selection: self.selection,
            elite_ratio: self.elitism_rate,
            mutation_rate: self.mutation_rate,
            parallel: self.parallel,
            seed: self.seed,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.num_beacons == 0 {
            return Err(invalid("num_beacons must be at least 1"));
        }
        if !self.spacing_threshold_ratio.is_finite() || self.spacing_threshold_ratio < 0.0 {
            return Err(invalid(format!(
                "spacing_threshold_ratio must be a non-negative number, got {}",
                self.spacing_threshold_ratio
            )));
        }
        if !self.spacing_penalty.is_finite() || self.spacing_penalty < 0.0 {
            return Err(invalid(format!(
                "spacing_penalty must be a non-negative number, got {}",
                self.spacing_penalty
            )));
        }
        if !is_rate(self.elitism_rate) {
            return Err(invalid(format!(
                "elitism_rate must be within [0, 1], got {}",
                self.elitism_rate
            )));
        }
        self.ga_config().validate()
    }
}
