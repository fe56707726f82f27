//! Beta-posterior admission model.
//!
//! Treats the "true" admission likelihood at the applicant's grade tier as
//! Beta-distributed (conjugate to an implicit competitive-vs-not binomial
//! trial). Compared to the Gaussian point estimate this degrades gracefully
//! when a program's bin data is sparse: a small effective sample size pulls
//! α and β toward 1, i.e. the posterior mean toward 0.5.
//!
//! The grade is located inside the ordered bin bands and the cumulative mass
//! **at or above** it is linearly interpolated within the containing band.
//! Grades below 80 interpolate within a synthetic [65, 80) band carrying the
//! combined below-75 mass; the finer sub-80 bins are not separately
//! available, so this is an intentional modeling simplification.

use crate::domain::{BetaParams, ProgramRecord};

/// Lower edge of the synthetic band that absorbs the combined sub-80 mass.
pub const SUB80_BAND_LOW: f64 = 65.0;

/// Effective-sample-size heuristic: n = max(total bin % × SCALE, MIN).
///
/// Stands in for unknown true enrolment counts; the floor keeps the Beta
/// parameters meaningful even for thin records.
pub const SAMPLE_SIZE_SCALE: f64 = 5.0;
pub const SAMPLE_SIZE_MIN: f64 = 100.0;

/// Fraction of the band [lo, hi) lying at or above `grade`, clamped to [0, 1].
fn band_fraction_above(grade: f64, lo: f64, hi: f64) -> f64 {
    ((hi - grade) / (hi - lo)).clamp(0.0, 1.0)
}

/// Percentage of historically admitted students at or above `grade`.
///
/// Piecewise linear and continuous across band edges; monotone
/// non-increasing in `grade`.
pub fn cumulative_pct_above(grade: f64, record: &ProgramRecord) -> f64 {
    let [p95, p90, p85, p80, p_below] = record.bin_weights();

    if grade >= 95.0 {
        p95 * band_fraction_above(grade, 95.0, 100.0)
    } else if grade >= 90.0 {
        p95 + p90 * band_fraction_above(grade, 90.0, 95.0)
    } else if grade >= 85.0 {
        p95 + p90 + p85 * band_fraction_above(grade, 85.0, 90.0)
    } else if grade >= 80.0 {
        p95 + p90 + p85 + p80 * band_fraction_above(grade, 80.0, 85.0)
    } else {
        p95 + p90 + p85 + p80 + p_below * band_fraction_above(grade, SUB80_BAND_LOW, 80.0)
    }
}

/// Synthetic effective sample size for a record.
pub fn effective_sample_size(record: &ProgramRecord) -> f64 {
    (record.total_bin_pct() * SAMPLE_SIZE_SCALE).max(SAMPLE_SIZE_MIN)
}

/// Laplace-smoothed Beta parameters at the applicant's grade.
///
/// α counts the (estimated) students the applicant is competitive with,
/// β the students above; the +1 smoothing keeps both strictly positive.
pub fn beta_params(grade: f64, record: &ProgramRecord) -> BetaParams {
    let n = effective_sample_size(record);
    let cum_above = cumulative_pct_above(grade, record);
    let pct_below = 100.0 - cum_above;

    BetaParams {
        alpha: (pct_below / 100.0) * n + 1.0,
        beta: (cum_above / 100.0) * n + 1.0,
    }
}

/// Beta posterior mean admission probability at the applicant's grade.
pub fn bayesian_probability(grade: f64, record: &ProgramRecord) -> f64 {
    beta_params(grade, record).posterior_mean()
}
