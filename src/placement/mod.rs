//! Beacon placement search.
//!
//! Chooses a fixed number of beacons from a list of candidates so that
//! the union of their coverage sets spans as many targets as possible,
//! with a step penalty for beacons placed too close together.
//!
//! # Fitness
//!
//! `coverage_ratio - penalty`, where `coverage_ratio` is the share of all
//! targets covered by at least one chosen beacon and `penalty` is
//! [`SolverConfig::spacing_penalty`] if any two chosen beacons are closer
//! than `radius * spacing_threshold_ratio`.
//!
//! # Operators
//!
//! - Initialization: uniform sample of `num_beacons` distinct candidates
//! - Crossover: shuffled union of both parents, cut to size and padded
//!   with unused candidates when the parents overlap
//! - Mutation: one gene swapped for a candidate not yet chosen
//!
//! Individuals always hold exactly `num_beacons` distinct candidates.

mod config;
mod problem;
mod solver;

pub use config::SolverConfig;
pub use solver::{GeneticSolver, SolverOutcome};
