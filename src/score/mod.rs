//! Scoring layer: ensemble blending, log-odds fusion, and tier labels.

pub mod composite;
pub mod tier;

pub use composite::{composite_probability, ensemble_academic, interest_score};
pub use tier::classify_tier;
