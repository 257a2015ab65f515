//! Parent selection strategies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// Parents are always drawn **with replacement** from the whole current
/// population, elites included. Strategies assume **maximization**.
///
/// ```
/// use u_beacon::ga::Selection;
///
/// // Every individual equally likely (the default)
/// let sel = Selection::Uniform;
///
/// // Best of 3 random picks
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Uniform random selection, no fitness pressure.
    ///
    /// # Complexity
    /// O(1) per selection
    #[default]
    Uniform,

    /// Tournament selection: pick `k` individuals at random, keep the best.
    ///
    /// Ties keep the earliest pick. `k = 1` behaves like [`Uniform`](Self::Uniform).
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// The caller guarantees `population` is non-empty; the GA config
    /// rejects an empty population before any selection happens.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        debug_assert!(!population.is_empty(), "cannot select from empty population");

        match self {
            Selection::Uniform => rng.random_range(0..population.len()),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
