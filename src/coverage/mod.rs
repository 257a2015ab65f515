//! Coverage set construction.
//!
//! Maps every placement candidate to the grid targets it covers. The
//! result is computed once per run and only read afterwards.

mod builder;
mod types;

pub(crate) use builder::resolve_candidates;

pub use builder::CoverageSetBuilder;
pub use types::CoverageSet;
