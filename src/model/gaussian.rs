//! Gaussian academic-probability model.
//!
//! Interprets the academic probability as: the chance that the applicant's
//! grade is at least as competitive as a student drawn at random from the
//! modeled admitted-student distribution.

use crate::domain::{DistributionParams, ProgramRecord};
use crate::math::normal_cdf;
use crate::model::moments::estimate_params;

/// Standardized distance of `grade` from the program's estimated mean.
pub fn z_score(grade: f64, params: DistributionParams) -> f64 {
    (grade - params.mu) / params.sigma
}

/// P(grade ≥ randomly drawn admitted average) = Φ((grade − μ) / σ).
///
/// Total over all real grades; extreme grades saturate toward 0 or 1.
pub fn academic_probability(grade: f64, record: &ProgramRecord) -> f64 {
    let params = estimate_params(record);
    normal_cdf(z_score(grade, params))
}
