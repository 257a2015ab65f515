//! Error type shared by every stage of the placement pipeline.

/// Errors raised while building coverage data or running the solver.
///
/// All variants are reported before any population exists; nothing inside
/// the generational loop can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Fewer placeable candidates than requested beacons.
    #[error("insufficient candidates: {available} placeable, {required} beacons requested")]
    InsufficientCandidates { available: usize, required: usize },

    /// Coverage data does not line up with the candidate list.
    #[error("coverage sets ({coverage_sets}) do not match candidates ({candidates})")]
    CoverageMismatch {
        coverage_sets: usize,
        candidates: usize,
    },

    /// A candidate index does not address a target.
    #[error("candidate index {index} out of range for {targets} targets")]
    CandidateOutOfRange { index: usize, targets: usize },

    /// A coverage set names a target that does not exist.
    #[error("coverage set references target {target}, but only {targets} targets exist")]
    CoverageOutOfRange { target: usize, targets: usize },

    /// Coverage radius is negative or not finite.
    #[error("invalid coverage radius: {0}")]
    InvalidRadius(f64),

    /// Grid dimensions cannot produce any cells.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
