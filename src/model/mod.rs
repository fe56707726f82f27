//! Statistical models recovering admission probabilities from binned data.
//!
//! Two independent estimates are produced per program:
//!
//! - a Gaussian model (method-of-moments μ/σ, then a CDF evaluation)
//! - a Beta posterior (band interpolation plus Laplace smoothing)
//!
//! The scoring layer blends them; nothing here carries state between calls.

pub mod bayes;
pub mod gaussian;
pub mod moments;

pub use bayes::{bayesian_probability, beta_params, cumulative_pct_above, effective_sample_size};
pub use gaussian::{academic_probability, z_score};
pub use moments::estimate_params;
