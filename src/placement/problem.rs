//! The beacon placement problem as seen by the GA engine.

use crate::coverage::CoverageSet;
use crate::ga::{GaProblem, Individual};
use crate::geometry::Point;
use rand::seq::SliceRandom;
use rand::Rng;

/// One candidate solution: `num_beacons` distinct local candidate indices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    genes: Vec<usize>,
    fitness: f64,
}

impl Placement {
    fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    pub(crate) fn genes(&self) -> &[usize] {
        &self.genes
    }
}

impl Individual for Placement {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Borrowed view of the validated solver inputs.
///
/// Local index `j` refers to `positions[j]` and `coverage_sets[j]`.
pub(crate) struct BeaconProblem<'a> {
    positions: Vec<Point>,
    coverage_sets: &'a [CoverageSet],
    target_count: usize,
    num_beacons: usize,
    min_spacing: f64,
    spacing_penalty: f64,
}

impl<'a> BeaconProblem<'a> {
    /// `positions` and `coverage_sets` must have equal length, at least
    /// `num_beacons`, and every covered index must be below `target_count`.
    pub(crate) fn new(
        positions: Vec<Point>,
        coverage_sets: &'a [CoverageSet],
        target_count: usize,
        num_beacons: usize,
        min_spacing: f64,
        spacing_penalty: f64,
    ) -> Self {
        debug_assert_eq!(positions.len(), coverage_sets.len());
        debug_assert!(positions.len() >= num_beacons);
        Self {
            positions,
            coverage_sets,
            target_count,
            num_beacons,
            min_spacing,
            spacing_penalty,
        }
    }

    fn candidate_count(&self) -> usize {
        self.positions.len()
    }

    /// Fraction of all targets covered by the union of the chosen sets.
    ///
    /// Zero when there are no targets.
    pub(crate) fn coverage_ratio(&self, genes: &[usize]) -> f64 {
        if self.target_count == 0 {
            return 0.0;
        }

        let mut covered = vec![false; self.target_count];
        let mut count = 0usize;
        for &gene in genes {
            for target in self.coverage_sets[gene].iter() {
                if !covered[target] {
                    covered[target] = true;
                    count += 1;
                }
            }
        }
        count as f64 / self.target_count as f64
    }

    fn spacing_penalty(&self, genes: &[usize]) -> f64 {
        let too_close = genes.iter().enumerate().any(|(i, &a)| {
            genes[i + 1..]
                .iter()
                .any(|&b| self.positions[a].distance(&self.positions[b]) < self.min_spacing)
        });
        if too_close {
            self.spacing_penalty
        } else {
            0.0
        }
    }

    /// Tops `genes` up to `num_beacons` with distinct unused indices.
    fn pad<R: Rng>(&self, genes: &mut Vec<usize>, rng: &mut R) {
        let missing = self.num_beacons.saturating_sub(genes.len());
        if missing == 0 {
            return;
        }

        let mut unused: Vec<usize> = (0..self.candidate_count())
            .filter(|i| !genes.contains(i))
            .collect();
        let (picked, _) = unused.partial_shuffle(rng, missing);
        genes.extend_from_slice(picked);
    }
}

impl GaProblem for BeaconProblem<'_> {
    type Individual = Placement;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Placement {
        let genes = rand::seq::index::sample(rng, self.candidate_count(), self.num_beacons);
        Placement::new(genes.into_vec())
    }

    fn evaluate(&self, individual: &Placement) -> f64 {
        self.coverage_ratio(&individual.genes) - self.spacing_penalty(&individual.genes)
    }

    /// Union of both parents, shuffled, cut to `num_beacons`.
    ///
    /// Parents that share genes leave a union shorter than `num_beacons`;
    /// the child is then padded with unused candidates.
    fn crossover<R: Rng>(
        &self,
        parent1: &Placement,
        parent2: &Placement,
        rng: &mut R,
    ) -> Vec<Placement> {
        let mut genes: Vec<usize> = parent1
            .genes
            .iter()
            .chain(&parent2.genes)
            .copied()
            .collect();
        genes.sort_unstable();
        genes.dedup();
        genes.shuffle(rng);
        genes.truncate(self.num_beacons);
        self.pad(&mut genes, rng);
        vec![Placement::new(genes)]
    }

    /// Replaces one gene with a candidate not already chosen.
    ///
    /// No-op when every candidate is already in the individual.
    fn mutate<R: Rng>(&self, individual: &mut Placement, rng: &mut R) {
        let genes = &mut individual.genes;
        let unused = self.candidate_count().saturating_sub(genes.len());
        if unused == 0 || genes.is_empty() {
            return;
        }

        let position = rng.random_range(0..genes.len());
        let pick = rng.random_range(0..unused);
        let replacement = (0..self.candidate_count())
            .filter(|i| !genes.contains(i))
            .nth(pick);
        if let Some(replacement) = replacement {
            genes[position] = replacement;
        }
    }
}
