//! Reporting utilities: ranking, tier grouping, and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{ApplicantProfile, RecommendationResult, Tier};

/// Top-N results per tier, in composite-score order.
#[derive(Debug, Clone)]
pub struct TierGroups {
    pub safeties: Vec<RecommendationResult>,
    pub matches: Vec<RecommendationResult>,
    pub reaches: Vec<RecommendationResult>,
}

impl TierGroups {
    pub fn for_tier(&self, tier: Tier) -> &[RecommendationResult] {
        match tier {
            Tier::Safety => &self.safeties,
            Tier::Match => &self.matches,
            Tier::Reach => &self.reaches,
        }
    }
}

/// Sort results by composite score, best first.
///
/// Ties break deterministically by university then program name, so repeat
/// runs produce identical orderings.
pub fn rank_by_composite(mut results: Vec<RecommendationResult>) -> Vec<RecommendationResult> {
    results.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.university.cmp(&b.university))
            .then_with(|| a.program.cmp(&b.program))
    });
    results
}

/// Split ranked results by tier, keeping the top `top_n` of each.
pub fn group_by_tier(ranked: &[RecommendationResult], top_n: usize) -> TierGroups {
    let take = |tier: Tier| {
        ranked
            .iter()
            .filter(|r| r.tier == tier)
            .take(top_n)
            .cloned()
            .collect()
    };
    TierGroups {
        safeties: take(Tier::Safety),
        matches: take(Tier::Match),
        reaches: take(Tier::Reach),
    }
}

/// Format the run summary (applicant inputs + catalog-wide tier counts).
pub fn format_run_summary(
    profile: &ApplicantProfile,
    ranked: &[RecommendationResult],
    total_programs: usize,
) -> String {
    let mut out = String::new();

    out.push_str("=== admit - Admission Probability Estimator ===\n");
    out.push_str(&format!("Grade: {:.1}\n", profile.grade));
    out.push_str(&format!(
        "Extracurricular score: {:.2}\n",
        profile.extracurricular_score
    ));
    let interests: Vec<&str> = profile.interests.iter().map(|c| c.display_name()).collect();
    out.push_str(&format!(
        "Interests: {}\n",
        if interests.is_empty() { "(none)".to_string() } else { interests.join(", ") }
    ));
    out.push_str(&format!("Programs analyzed: {total_programs}\n"));

    out.push_str("\nTier counts:\n");
    for tier in Tier::ALL {
        let count = ranked.iter().filter(|r| r.tier == tier).count();
        out.push_str(&format!("- {:<6} {count}\n", tier.display_name()));
    }
    out.push('\n');

    out
}

/// Format the per-tier tables (best composite first within each tier).
pub fn format_tier_tables(groups: &TierGroups) -> String {
    let mut out = String::new();

    for tier in Tier::ALL {
        let rows = groups.for_tier(tier);
        out.push_str(&format!("Top {} picks:\n", tier.display_name()));
        if rows.is_empty() {
            out.push_str("(none)\n\n");
            continue;
        }
        out.push_str(&format_table(rows));
        out.push('\n');
    }

    out
}

fn format_table(rows: &[RecommendationResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:<26} {:<16} {:>9} {:>9} {:>9} {:>7} {:>5}\n",
        "university", "program", "category", "composite", "academic", "bayesian", "cutoff", "year"
    ));
    out.push_str(&format!(
        "{:-<22} {:-<26} {:-<16} {:-<9} {:-<9} {:-<9} {:-<7} {:-<5}\n",
        "", "", "", "", "", "", "", ""
    ));

    for r in rows {
        out.push_str(&format!(
            "{:<22} {:<26} {:<16} {:>9.3} {:>9.3} {:>9.3} {:>7.1} {:>5}\n",
            truncate(&r.university, 22),
            truncate(&r.program, 26),
            r.category.display_name(),
            r.composite_score,
            r.academic_probability,
            r.bayesian_probability,
            r.estimated_cutoff,
            r.year,
        ));
    }

    out
}

/// Format the numeric explanation trail for one result.
pub fn format_explanation(r: &RecommendationResult) -> String {
    let e = &r.explanation;
    format!(
        "{} / {}: mu={:.2} sigma={:.2} z={:.2} cdf={:.3} alpha={:.1} beta={:.1} posterior={:.3}",
        r.university, r.program, e.mu, e.sigma, e.z_score, e.gaussian_cdf, e.beta_alpha, e.beta_beta,
        e.beta_posterior_mean,
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Explanation};

    fn result(university: &str, composite: f64, tier: Tier) -> RecommendationResult {
        RecommendationResult {
            university: university.to_string(),
            program: "Program".to_string(),
            category: Category::Science,
            academic_probability: composite,
            bayesian_probability: composite,
            composite_score: composite,
            tier,
            estimated_cutoff: 85.0,
            year: 2023,
            explanation: Explanation {
                mu: 85.0,
                sigma: 5.0,
                z_score: 0.0,
                gaussian_cdf: 0.5,
                beta_alpha: 51.0,
                beta_beta: 51.0,
                beta_posterior_mean: 0.5,
            },
        }
    }

    #[test]
    fn rank_orders_best_first_with_stable_ties() {
        let ranked = rank_by_composite(vec![
            result("B", 0.5, Tier::Match),
            result("A", 0.9, Tier::Safety),
            result("C", 0.5, Tier::Match),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.university.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn grouping_respects_top_n_and_tier() {
        let ranked = rank_by_composite(vec![
            result("A", 0.9, Tier::Safety),
            result("B", 0.8, Tier::Safety),
            result("C", 0.76, Tier::Safety),
            result("D", 0.5, Tier::Match),
            result("E", 0.1, Tier::Reach),
        ]);
        let groups = group_by_tier(&ranked, 2);
        assert_eq!(groups.safeties.len(), 2);
        assert_eq!(groups.safeties[0].university, "A");
        assert_eq!(groups.matches.len(), 1);
        assert_eq!(groups.reaches.len(), 1);
    }

    #[test]
    fn summary_counts_tiers_from_the_full_ranking() {
        let ranked = vec![
            result("A", 0.9, Tier::Safety),
            result("B", 0.5, Tier::Match),
            result("C", 0.1, Tier::Reach),
            result("D", 0.2, Tier::Reach),
        ];
        let profile = ApplicantProfile {
            grade: 88.0,
            extracurricular_score: 0.7,
            interests: vec![Category::Science],
        };
        let summary = format_run_summary(&profile, &ranked, ranked.len());
        assert!(summary.contains("Programs analyzed: 4"));
        assert!(summary.contains("safety 1"));
        assert!(summary.contains("reach  2"));
    }

    #[test]
    fn tables_render_empty_tiers() {
        let groups = group_by_tier(&[], 5);
        let text = format_tier_tables(&groups);
        assert!(text.contains("Top safety picks:"));
        assert!(text.contains("(none)"));
    }
}
