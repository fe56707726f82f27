//! Domain model shared across the estimator, scorer, and reporting layers.

pub mod types;

pub use types::*;
