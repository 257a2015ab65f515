//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → ranking → elitism → selection →
//! crossover → mutation → repeat.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::PlacementError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual seen during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations scored.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after each scored generation.
    ///
    /// Monotonically non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// Each generation scores every individual from scratch, ranks the
/// population with a stable descending sort, records a new best-ever only
/// on a strictly higher fitness, then breeds the next generation.
/// Together the stable sort and the strict comparison make the earliest
/// found individual win every tie.
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, PlacementError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is only read between generations, so every generation
    /// that was scored is complete and reproducible.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, PlacementError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        tracing::debug!(
            seed,
            population_size = config.population_size,
            max_generations = config.max_generations,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Score generation 0
        rank_population(problem, &mut population, config.parallel);
        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations);
        fitness_history.push(best.fitness().to_f64());
        problem.on_generation(1, best.fitness());

        let mut generations = 1;
        let mut cancelled = false;
        let elite_count = config.elite_count();

        // 3. Generational loop
        while generations < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = next_generation(problem, config, &population, elite_count, &mut rng);
            rank_population(problem, &mut population, config.parallel);
            generations += 1;

            if population[0].fitness() > best.fitness() {
                best = population[0].clone();
                tracing::debug!(
                    generation = generations,
                    fitness = best.fitness().to_f64(),
                    "new best"
                );
            }

            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(generations, best.fitness());
        }

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            fitness_history,
        })
    }
}

/// Breeds the next generation from a ranked population.
///
/// The first `elite_count` slots are clones of the current top
/// individuals; the rest are offspring of parents drawn from the whole
/// current population.
fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    ranked: &[P::Individual],
    elite_count: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut next_gen: Vec<P::Individual> = ranked[..elite_count.min(ranked.len())].to_vec();

    while next_gen.len() < config.population_size {
        let p1_idx = config.selection.select(ranked, rng);
        let p2_idx = config.selection.select(ranked, rng);

        let children = problem.crossover(&ranked[p1_idx], &ranked[p2_idx], rng);
        for mut child in children {
            if next_gen.len() >= config.population_size {
                break;
            }

            if rng.random_range(0.0..1.0) < config.mutation_rate {
                problem.mutate(&mut child, rng);
            }

            next_gen.push(child);
        }
    }

    next_gen
}

/// Scores every individual, then sorts best-first.
///
/// `sort_by` is stable: equal fitness keeps insertion order.
fn rank_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    evaluate_population(problem, population, parallel);
    population.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================
