//! Beacon placement by coverage sets and a genetic algorithm.
//!
//! Picks a fixed number of beacon locations from the placeable cells of a
//! grid so that their coverage disks span as much of the grid as
//! possible, while discouraging beacons that sit too close together.
//! Exact maximum coverage is NP-hard at hundreds of candidates, so the
//! search is a seeded, bounded-iteration GA with no optimality guarantee.
//!
//! - **Coverage**: [`coverage::CoverageSetBuilder`] maps each candidate to
//!   the targets within the coverage radius.
//! - **Placement**: [`placement::GeneticSolver`] searches fixed-size
//!   candidate subsets and returns the best one as global target indices.
//! - **GA engine**: [`ga`] holds the generic generational loop the solver
//!   plugs into.
//! - **Site**: [`site`] builds the target grid, filters candidates through
//!   a mask and describes the result for export.
//!
//! # Example
//!
//! ```
//! use u_beacon::placement::SolverConfig;
//! use u_beacon::site::{BeaconPlanner, Grid};
//! use u_beacon::geometry::Point;
//!
//! let grid = Grid::new(200, 100, 20.0, 10.0).unwrap();
//! let everywhere = |_: Point| true;
//! let planner = BeaconPlanner::new(SolverConfig::default().with_num_generations(20)).unwrap();
//! let plan = planner.plan(&grid, &everywhere).unwrap();
//! assert_eq!(plan.report.beacons.len(), 3);
//! ```
//!
//! # Logging
//!
//! Spans and events are emitted through `tracing`; install a subscriber
//! in the application to see them.

pub mod coverage;
pub mod error;
pub mod ga;
pub mod geometry;
pub mod placement;
pub mod site;

pub use error::PlacementError;
