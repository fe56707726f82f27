//! Mathematical utilities: error function, normal CDF, and the logit/sigmoid pair.

pub mod erf;
pub mod logistic;

pub use erf::*;
pub use logistic::*;
