//! Evidence fusion: ensemble blending and log-odds composite scoring.
//!
//! Log-odds addition is the principled way to merge independent
//! probabilistic evidence (it multiplies likelihood ratios). Naive weighted
//! averaging of probabilities is not closed under combination and compresses
//! toward 0.5; the logit transform avoids that.
//!
//! All weights are fixed design constants, kept here (not re-derived) so the
//! fusion formulas stay auditable and swappable without touching control flow.

use crate::domain::{ApplicantProfile, Category};
use crate::math::{logit, sigmoid};

/// Gaussian share of the academic ensemble (Bayesian gets the remainder).
pub const ENSEMBLE_GAUSSIAN_WEIGHT: f64 = 0.6;

/// Composite log-odds weights.
pub const W_ACADEMIC: f64 = 0.60;
pub const W_EXTRACURRICULAR: f64 = 0.20;
pub const W_INTEREST: f64 = 0.20;

/// Interest-alignment signal: a fixed two-valued probability.
pub const INTEREST_MATCH_SCORE: f64 = 0.85;
pub const INTEREST_MISMATCH_SCORE: f64 = 0.30;

/// Blend the Gaussian and Bayesian academic estimates into one probability.
pub fn ensemble_academic(gaussian: f64, bayesian: f64) -> f64 {
    ENSEMBLE_GAUSSIAN_WEIGHT * gaussian + (1.0 - ENSEMBLE_GAUSSIAN_WEIGHT) * bayesian
}

/// Interest-alignment probability for a program category.
pub fn interest_score(profile: &ApplicantProfile, category: Category) -> f64 {
    if profile.has_interest(category) {
        INTEREST_MATCH_SCORE
    } else {
        INTEREST_MISMATCH_SCORE
    }
}

/// Fuse the three probability signals via weighted log-odds addition.
///
/// Each input is clamped inside `logit` before the transform, so the result
/// is always a finite probability in (0, 1).
pub fn composite_probability(p_academic: f64, p_extracurricular: f64, p_interest: f64) -> f64 {
    let log_odds = W_ACADEMIC * logit(p_academic)
        + W_EXTRACURRICULAR * logit(p_extracurricular)
        + W_INTEREST * logit(p_interest);
    sigmoid(log_odds)
}
