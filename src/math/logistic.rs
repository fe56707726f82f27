//! Logit / sigmoid pair used for log-odds evidence fusion.
//!
//! Probabilities are clamped away from 0 and 1 before taking the logit so
//! the log-odds stay finite; the clamp bounds are part of the fusion
//! contract (an exactly-zero signal still contributes a strong, finite
//! pull rather than −∞).

/// Clamp bounds applied before the log-odds transform.
pub const LOGIT_CLAMP_MIN: f64 = 0.001;
pub const LOGIT_CLAMP_MAX: f64 = 0.999;

/// Log-odds: ln(p / (1 − p)), with `p` clamped to [0.001, 0.999].
pub fn logit(p: f64) -> f64 {
    let clamped = p.clamp(LOGIT_CLAMP_MIN, LOGIT_CLAMP_MAX);
    (clamped / (1.0 - clamped)).ln()
}

/// Inverse logit: σ(x) = 1 / (1 + e^(−x)).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
