//! Shared recommendation pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! catalog -> per-program probabilities -> fusion -> tiers -> rankings
//!
//! The CLI can then focus on presentation (printing vs exports).

use rayon::prelude::*;

use crate::domain::{ApplicantProfile, Explanation, ProgramRecord, RecommendationResult};
use crate::math::normal_cdf;
use crate::model::{bayes, gaussian, moments};
use crate::report::{TierGroups, group_by_tier, rank_by_composite};
use crate::score::composite::interest_score;
use crate::score::{classify_tier, composite_probability, ensemble_academic};

/// All computed outputs of a single `admit recommend` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Every result, ranked by composite score (descending).
    pub ranked: Vec<RecommendationResult>,
    /// Top-N per tier, for the report.
    pub groups: TierGroups,
    pub total_programs: usize,
}

/// Evaluate the full catalog for one applicant.
///
/// Pure and stateless: results depend only on the arguments, and a repeat
/// call with identical inputs is bit-identical. The per-program evaluation
/// is independent across programs, so the map runs in parallel; rayon's
/// order-preserving collect keeps the output identical to a sequential run.
///
/// Inputs are clamped to their documented ranges at this boundary (grade to
/// [50, 100], extracurricular score to [0, 1]); rejecting out-of-range
/// values with an error is the caller's job.
pub fn generate_recommendations(
    profile: &ApplicantProfile,
    catalog: &[ProgramRecord],
) -> Vec<RecommendationResult> {
    let profile = profile.clamped();
    catalog
        .par_iter()
        .map(|record| evaluate_program(&profile, record))
        .collect()
}

/// Run the pipeline and assemble ranked + grouped outputs.
pub fn run_recommend(
    profile: &ApplicantProfile,
    catalog: &[ProgramRecord],
    top_n: usize,
) -> RunOutput {
    let results = generate_recommendations(profile, catalog);
    let total_programs = results.len();
    let ranked = rank_by_composite(results);
    let groups = group_by_tier(&ranked, top_n);

    RunOutput {
        ranked,
        groups,
        total_programs,
    }
}

/// Evaluate a single program for an (already clamped) applicant profile.
pub fn evaluate_program(profile: &ApplicantProfile, record: &ProgramRecord) -> RecommendationResult {
    let params = moments::estimate_params(record);
    let z = gaussian::z_score(profile.grade, params);
    let gaussian_p = normal_cdf(z);

    let beta = bayes::beta_params(profile.grade, record);
    let bayes_p = beta.posterior_mean();

    let academic = ensemble_academic(gaussian_p, bayes_p);
    let p_interest = interest_score(profile, record.category);
    let composite = composite_probability(academic, profile.extracurricular_score, p_interest);
    let tier = classify_tier(composite);

    RecommendationResult {
        university: record.university.clone(),
        program: record.program.clone(),
        category: record.category,
        academic_probability: academic,
        bayesian_probability: bayes_p,
        composite_score: composite,
        tier,
        estimated_cutoff: record.estimated_cutoff,
        year: record.year,
        explanation: Explanation {
            mu: round_dp(params.mu, 2),
            sigma: round_dp(params.sigma, 2),
            z_score: round_dp(z, 2),
            gaussian_cdf: round_dp(gaussian_p, 3),
            beta_alpha: round_dp(beta.alpha, 1),
            beta_beta: round_dp(beta.beta, 1),
            beta_posterior_mean: round_dp(bayes_p, 3),
        },
    }
}

/// Round to `dp` decimal places for display/export.
fn round_dp(v: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (v * factor).round() / factor
}
