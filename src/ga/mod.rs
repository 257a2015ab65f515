//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic generational GA built on trait-based
//! abstractions. Problems plug in by implementing [`GaProblem`], which
//! specifies how to create, evaluate, crossover, and mutate individuals.
//! Fitness is maximized.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual and per-generation history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub(crate) use config::{invalid, is_rate};

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
