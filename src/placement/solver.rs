//! Genetic beacon placement solver.

use super::config::SolverConfig;
use super::problem::BeaconProblem;
use crate::coverage::{resolve_candidates, CoverageSet};
use crate::error::PlacementError;
use crate::ga::{invalid, GaRunner};
use crate::geometry::Point;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::instrument;

/// Everything a finished run knows about its best placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverOutcome {
    /// Chosen beacons as global target indices.
    pub beacons: Vec<usize>,

    /// Chosen beacons as positions in the candidate list.
    pub local_indices: Vec<usize>,

    /// Fitness of the best placement (coverage minus spacing penalty).
    pub fitness: f64,

    /// Coverage ratio of the best placement, in `[0, 1]`.
    pub coverage: f64,

    /// Generations scored.
    pub generations: usize,

    /// Whether the run stopped on a cancellation request.
    pub cancelled: bool,

    /// Best-ever fitness after each generation.
    pub fitness_history: Vec<f64>,
}

/// Searches for the best fixed-size beacon subset.
///
/// Each run seeds its own generator from [`SolverConfig::seed`], so equal
/// inputs and seed give equal output, and runs never share random state.
///
/// # Example
///
/// ```
/// use u_beacon::coverage::CoverageSetBuilder;
/// use u_beacon::geometry::Point;
/// use u_beacon::placement::{GeneticSolver, SolverConfig};
///
/// let targets: Vec<Point> = (0..20).map(|i| Point::new(i as f64, 0.0)).collect();
/// let candidates = vec![2, 7, 12, 17];
/// let coverage = CoverageSetBuilder::build_for_indices(&targets, &candidates, 2.5).unwrap();
///
/// let solver = GeneticSolver::new(SolverConfig::default().with_num_beacons(2)).unwrap();
/// let beacons = solver.run(&candidates, &targets, &coverage, 2.5).unwrap();
/// assert_eq!(beacons.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    config: SolverConfig,
}

impl GeneticSolver {
    /// Creates a solver after validating `config`.
    pub fn new(config: SolverConfig) -> Result<Self, PlacementError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns `num_beacons` global target indices.
    ///
    /// `coverage_sets[j]` must belong to `candidate_indices[j]`, and
    /// `radius` is in the same pixel units as `targets`.
    pub fn run(
        &self,
        candidate_indices: &[usize],
        targets: &[Point],
        coverage_sets: &[CoverageSet],
        radius: f64,
    ) -> Result<Vec<usize>, PlacementError> {
        Ok(self
            .run_detailed(candidate_indices, targets, coverage_sets, radius)?
            .beacons)
    }

    /// Like [`run`](Self::run), returning the full [`SolverOutcome`].
    pub fn run_detailed(
        &self,
        candidate_indices: &[usize],
        targets: &[Point],
        coverage_sets: &[CoverageSet],
        radius: f64,
    ) -> Result<SolverOutcome, PlacementError> {
        self.run_with_cancel(candidate_indices, targets, coverage_sets, radius, None)
    }

    /// Runs with a cancellation flag that is read between generations.
    ///
    /// A cancelled run still returns the best placement scored so far.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            candidates = candidate_indices.len(),
            targets = targets.len(),
            num_beacons = self.config.num_beacons,
            radius = radius
        )
    )]
    pub fn run_with_cancel(
        &self,
        candidate_indices: &[usize],
        targets: &[Point],
        coverage_sets: &[CoverageSet],
        radius: f64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolverOutcome, PlacementError> {
        let problem = self.problem(candidate_indices, targets, coverage_sets, radius)?;
        let result = GaRunner::run_with_cancel(&problem, &self.config.ga_config(), cancel)?;

        let local_indices = result.best.genes().to_vec();
        let beacons = local_indices.iter().map(|&i| candidate_indices[i]).collect();
        let coverage = problem.coverage_ratio(&local_indices);

        tracing::info!(
            fitness = result.best_fitness,
            coverage,
            generations = result.generations,
            cancelled = result.cancelled,
            "beacon placement finished"
        );

        Ok(SolverOutcome {
            beacons,
            local_indices,
            fitness: result.best_fitness,
            coverage,
            generations: result.generations,
            cancelled: result.cancelled,
            fitness_history: result.fitness_history,
        })
    }

    /// Checks every input before a population exists.
    fn problem<'a>(
        &self,
        candidate_indices: &[usize],
        targets: &[Point],
        coverage_sets: &'a [CoverageSet],
        radius: f64,
    ) -> Result<BeaconProblem<'a>, PlacementError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(invalid(format!(
                "coverage radius must be positive, got {radius}"
            )));
        }

        let num_beacons = self.config.num_beacons;
        if candidate_indices.len() < num_beacons {
            return Err(PlacementError::InsufficientCandidates {
                available: candidate_indices.len(),
                required: num_beacons,
            });
        }
        if coverage_sets.len() != candidate_indices.len() {
            return Err(PlacementError::CoverageMismatch {
                coverage_sets: coverage_sets.len(),
                candidates: candidate_indices.len(),
            });
        }

        let positions = resolve_candidates(targets, candidate_indices)?;
        if let Some(target) = coverage_sets
            .iter()
            .filter_map(|set| set.as_slice().last().copied())
            .find(|&last| last >= targets.len())
        {
            return Err(PlacementError::CoverageOutOfRange {
                target,
                targets: targets.len(),
            });
        }

        Ok(BeaconProblem::new(
            positions,
            coverage_sets,
            targets.len(),
            num_beacons,
            radius * self.config.spacing_threshold_ratio,
            self.config.spacing_penalty,
        ))
    }
}
