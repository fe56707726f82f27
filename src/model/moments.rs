//! Method-of-moments recovery of (μ, σ) from binned percentages.
//!
//! Binned percentages are the only available summary of a program's
//! historical entering-grade distribution. Treating each bin's midpoint as a
//! point mass and matching the first two sample moments recovers a plausible
//! Normal without access to raw data.

use crate::domain::{DistributionParams, ProgramRecord};

/// Representative midpoint of each grade band, highest band first.
///
/// The last midpoint (74.0) represents the combined sub-80 mass, whose
/// original finer bins are not separately available.
pub const BIN_MIDPOINTS: [f64; 5] = [96.5, 92.0, 87.0, 82.0, 74.0];

/// Floor on σ (grade points). Prevents explosive z-scores for programs whose
/// mass sits almost entirely in a single bin.
pub const SIGMA_FLOOR: f64 = 1.5;

/// Fixed fallback for an all-zero bin set (defined degenerate-input policy,
/// not an error).
pub const FALLBACK_PARAMS: DistributionParams = DistributionParams { mu: 85.0, sigma: 5.0 };

/// Estimate the entering-average distribution parameters for a program.
pub fn estimate_params(record: &ProgramRecord) -> DistributionParams {
    let weights = record.bin_weights();
    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return FALLBACK_PARAMS;
    }

    // First moment: μ = Σ(mᵢ·wᵢ) / Σwᵢ
    let mu = BIN_MIDPOINTS
        .iter()
        .zip(weights.iter())
        .map(|(m, w)| m * w)
        .sum::<f64>()
        / total_weight;

    // Second central moment: σ² = Σ(wᵢ·(mᵢ − μ)²) / Σwᵢ
    let variance = BIN_MIDPOINTS
        .iter()
        .zip(weights.iter())
        .map(|(m, w)| w * (m - mu) * (m - mu))
        .sum::<f64>()
        / total_weight;

    DistributionParams {
        mu,
        sigma: variance.sqrt().max(SIGMA_FLOOR),
    }
}
