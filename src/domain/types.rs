//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during probability estimation
//! - exported to JSON/CSV
//! - reloaded later for comparisons across catalog years

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Valid applicant grade range (top-6 average, percent).
pub const GRADE_MIN: f64 = 50.0;
pub const GRADE_MAX: f64 = 100.0;

/// Closed set of subject categories a program can belong to.
///
/// This is a fixed taxonomy: the catalog producer maps each institution's
/// program names onto these six buckets before the engine ever sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ComputerScience,
    Engineering,
    Business,
    Science,
    Health,
    Arts,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ComputerScience,
        Category::Engineering,
        Category::Business,
        Category::Science,
        Category::Health,
        Category::Arts,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::Engineering => "Engineering",
            Category::Business => "Business",
            Category::Science => "Science",
            Category::Health => "Health",
            Category::Arts => "Arts",
        }
    }

    /// Parse a category from either its kebab-case id or its display label.
    ///
    /// CSV catalogs in the wild carry the display labels; our own exports
    /// use the kebab-case ids. Accept both.
    pub fn parse_label(s: &str) -> Option<Category> {
        let s = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(s) || c.id().eq_ignore_ascii_case(s))
    }

    /// Stable kebab-case id used in JSON/CSV.
    pub fn id(self) -> &'static str {
        match self {
            Category::ComputerScience => "computer-science",
            Category::Engineering => "engineering",
            Category::Business => "business",
            Category::Science => "science",
            Category::Health => "health",
            Category::Arts => "arts",
        }
    }
}

/// One program's aggregated, binned admission-average history.
///
/// The five bins are percentages of admitted students whose entering average
/// fell in the given band; a well-formed record's bins are non-negative and
/// sum to ≈100. An all-zero bin set is legal and means "no data" — the
/// estimator substitutes a fixed fallback distribution for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub university: String,
    pub program: String,
    pub category: Category,

    /// Percentage of admitted students with average ≥ 95.
    pub pct95_plus: f64,
    /// Percentage with average in [90, 95).
    pub pct90_94: f64,
    /// Percentage with average in [85, 90).
    pub pct85_89: f64,
    /// Percentage with average in [80, 85).
    pub pct80_84: f64,
    /// Percentage with average below 80 (original sub-80 bins combined).
    pub pct_below75: f64,

    /// Published or estimated admission average cutoff.
    pub estimated_cutoff: f64,
    /// Data year the bins were aggregated from.
    pub year: i32,
}

impl ProgramRecord {
    /// Bin percentages ordered from the highest grade band to the lowest.
    pub fn bin_weights(&self) -> [f64; 5] {
        [
            self.pct95_plus,
            self.pct90_94,
            self.pct85_89,
            self.pct80_84,
            self.pct_below75,
        ]
    }

    /// Sum of all bin percentages (≈100 for a well-formed record).
    pub fn total_bin_pct(&self) -> f64 {
        self.bin_weights().iter().sum()
    }
}

/// Gaussian parameters recovered from a program's bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    pub mu: f64,
    pub sigma: f64,
}

/// Beta posterior parameters for the grade-tier admission model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaParams {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaParams {
    /// Posterior mean E[θ] = α / (α + β).
    pub fn posterior_mean(self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}

/// Discrete admission-likelihood label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Safety,
    Match,
    Reach,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Safety, Tier::Match, Tier::Reach];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Safety => "safety",
            Tier::Match => "match",
            Tier::Reach => "reach",
        }
    }
}

/// Transparency bundle: the intermediate numbers behind one recommendation.
///
/// All values are rounded to fixed display precision when the result is
/// assembled, so exports and the terminal report show identical figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub mu: f64,
    pub sigma: f64,
    pub z_score: f64,
    /// Raw Gaussian CDF value (before the Gaussian/Bayesian ensemble).
    pub gaussian_cdf: f64,
    pub beta_alpha: f64,
    pub beta_beta: f64,
    pub beta_posterior_mean: f64,
}

/// Per-program output of the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub university: String,
    pub program: String,
    pub category: Category,

    /// Ensemble academic probability (Gaussian + Bayesian blend).
    pub academic_probability: f64,
    /// Raw Beta posterior mean.
    pub bayesian_probability: f64,
    /// Fused probability after log-odds combination of all signals.
    pub composite_score: f64,
    pub tier: Tier,

    pub estimated_cutoff: f64,
    pub year: i32,
    pub explanation: Explanation,
}

/// Applicant inputs to a single recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantProfile {
    /// Top-6 average, expected in [50, 100].
    pub grade: f64,
    /// Extracurricular strength score in [0, 1].
    pub extracurricular_score: f64,
    /// Selected interest categories; may be empty (every program then
    /// receives the weak interest-alignment signal).
    pub interests: Vec<Category>,
}

impl ApplicantProfile {
    /// Return a copy with inputs clamped to their documented ranges.
    ///
    /// The pipeline applies this at its boundary so the math downstream is
    /// total even when a caller skipped validation.
    pub fn clamped(&self) -> ApplicantProfile {
        ApplicantProfile {
            grade: self.grade.clamp(GRADE_MIN, GRADE_MAX),
            extracurricular_score: self.extracurricular_score.clamp(0.0, 1.0),
            interests: self.interests.clone(),
        }
    }

    pub fn has_interest(&self, category: Category) -> bool {
        self.interests.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::parse_label(c.display_name()), Some(c));
            assert_eq!(Category::parse_label(c.id()), Some(c));
        }
        assert_eq!(Category::parse_label("underwater basket weaving"), None);
    }

    #[test]
    fn profile_clamping_bounds_inputs() {
        let p = ApplicantProfile {
            grade: 120.0,
            extracurricular_score: -0.25,
            interests: vec![Category::Science],
        };
        let c = p.clamped();
        assert_eq!(c.grade, GRADE_MAX);
        assert_eq!(c.extracurricular_score, 0.0);
        assert_eq!(c.interests, p.interests);

        let in_range = ApplicantProfile {
            grade: 88.5,
            extracurricular_score: 0.7,
            interests: vec![],
        };
        assert_eq!(in_range.clamped(), in_range);
    }

    #[test]
    fn beta_posterior_mean_symmetric_case() {
        let b = BetaParams { alpha: 51.0, beta: 51.0 };
        assert_eq!(b.posterior_mean(), 0.5);
    }
}
