//! End-to-end placement over a grid and a mask.

use super::grid::Grid;
use super::mask::{placement_candidates, PlacementMask};
use super::report::PlacementReport;
use crate::coverage::CoverageSetBuilder;
use crate::error::PlacementError;
use crate::placement::{GeneticSolver, SolverConfig, SolverOutcome};
use tracing::instrument;

/// Default beacon coverage radius, in meters.
pub const DEFAULT_COVERAGE_RADIUS_M: f64 = 5.0;

/// Output of [`BeaconPlanner::plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Cell indices the mask accepted.
    pub candidates: Vec<usize>,
    /// Coverage radius used, in pixels.
    pub radius_px: f64,
    pub outcome: SolverOutcome,
    pub report: PlacementReport,
}

/// Runs the full pipeline: mask filter, coverage sets, solver, report.
#[derive(Debug, Clone)]
pub struct BeaconPlanner {
    solver: GeneticSolver,
    coverage_radius_m: f64,
}

impl BeaconPlanner {
    /// Creates a planner using [`DEFAULT_COVERAGE_RADIUS_M`].
    pub fn new(config: SolverConfig) -> Result<Self, PlacementError> {
        Ok(Self {
            solver: GeneticSolver::new(config)?,
            coverage_radius_m: DEFAULT_COVERAGE_RADIUS_M,
        })
    }

    /// Sets the coverage radius in meters.
    pub fn with_coverage_radius_m(mut self, meters: f64) -> Self {
        self.coverage_radius_m = meters;
        self
    }

    pub fn coverage_radius_m(&self) -> f64 {
        self.coverage_radius_m
    }

    pub fn solver(&self) -> &GeneticSolver {
        &self.solver
    }

    /// Places beacons on the cells of `grid` that `mask` accepts.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InsufficientCandidates`] when the mask leaves
    /// fewer cells than beacons, and any error of the solver.
    #[instrument(level = "info", skip_all, fields(cells = grid.len(), radius_m = self.coverage_radius_m))]
    pub fn plan<M: PlacementMask + ?Sized>(&self, grid: &Grid, mask: &M) -> Result<Plan, PlacementError> {
        let targets = grid.centers();
        let candidates = placement_candidates(targets, mask);
        let required = self.solver.config().num_beacons;
        if candidates.len() < required {
            tracing::warn!(available = candidates.len(), required, "not enough placeable cells");
            return Err(PlacementError::InsufficientCandidates {
                available: candidates.len(),
                required,
            });
        }

        let radius_px = grid.radius_px(self.coverage_radius_m);
        let coverage = CoverageSetBuilder::build_for_indices(targets, &candidates, radius_px)?;
        let outcome = self
            .solver
            .run_detailed(&candidates, targets, &coverage, radius_px)?;
        let report = PlacementReport::new(grid, &outcome.beacons)?;

        Ok(Plan {
            candidates,
            radius_px,
            outcome,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::site::RasterMask;

    #[test]
    fn test_plan_inside_building() {
        // 20x10m floor at 10px/m: 40x20 cells of 5px
        let grid = Grid::new(200, 100, 20.0, 10.0).unwrap();
        let mut building = RasterMask::filled(200, 100, false);
        building.fill_rect((0, 0), (99, 99), true);

        let config = SolverConfig::default()
            .with_num_beacons(2)
            .with_population_size(20)
            .with_num_generations(15);
        let planner = BeaconPlanner::new(config)
            .unwrap()
            .with_coverage_radius_m(3.0);
        let plan = planner.plan(&grid, &building).unwrap();

        assert!((plan.radius_px - 30.0).abs() < 1e-12);
        assert_eq!(plan.outcome.beacons.len(), 2);
        assert_eq!(plan.report.beacons.len(), 2);
        for (&index, placed) in plan.outcome.beacons.iter().zip(&plan.report.beacons) {
            assert!(plan.candidates.contains(&index));
            // left half only
            assert!(grid.centers()[index].x < 100.0);
            assert_eq!(placed.grid_coords[1], index % grid.width());
        }
    }

    #[test]
    fn test_plan_without_candidates() {
        let grid = Grid::new(100, 100, 5.0, 5.0).unwrap();
        let nothing = |_: Point| false;
        let planner = BeaconPlanner::new(SolverConfig::default()).unwrap();

        let err = planner.plan(&grid, &nothing).unwrap_err();
        assert_eq!(
            err,
            PlacementError::InsufficientCandidates {
                available: 0,
                required: 3
            }
        );
    }

    #[test]
    fn test_plan_rejects_zero_radius() {
        let grid = Grid::new(100, 100, 5.0, 5.0).unwrap();
        let everywhere = |_: Point| true;
        let planner = BeaconPlanner::new(SolverConfig::default())
            .unwrap()
            .with_coverage_radius_m(0.0);

        assert!(matches!(
            planner.plan(&grid, &everywhere),
            Err(PlacementError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_plan_is_reproducible() {
        let grid = Grid::new(120, 80, 12.0, 8.0).unwrap();
        let everywhere = |_: Point| true;
        let planner = BeaconPlanner::new(SolverConfig::default().with_num_generations(10)).unwrap();

        let a = planner.plan(&grid, &everywhere).unwrap();
        let b = planner.plan(&grid, &everywhere).unwrap();
        assert_eq!(a, b);
    }
}
