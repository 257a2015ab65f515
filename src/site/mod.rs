//! Site collaborators around the solver.
//!
//! Turns a floor plan of known real size into solver inputs and the
//! solver's answer into an export-ready report:
//!
//! - [`Grid`]: target cell centers and pixels-per-meter scale
//! - [`PlacementMask`] / [`RasterMask`]: which cells may hold a beacon
//! - [`PlacementReport`]: grid and pixel coordinates of the chosen beacons
//! - [`BeaconPlanner`]: all of the above plus the solver in one call

mod grid;
mod mask;
mod planner;
mod report;

pub use grid::{Grid, PixelsPerMeter, DEFAULT_CELL_SIZE_M};
pub use mask::{placement_candidates, PlacementMask, RasterMask};
pub use planner::{BeaconPlanner, Plan, DEFAULT_COVERAGE_RADIUS_M};
pub use report::{
    BeaconPlacement, GridDimensions, PixelDimensions, PlacementReport, RealWorldDimensions,
};
