//! Export per-program results to CSV or JSON.
//!
//! The CSV export is meant to be easy to consume in spreadsheets or
//! downstream scripts; the JSON export is the full result objects,
//! explanation bundle included.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::RecommendationResult;
use crate::error::AppError;

/// Write per-program results to a CSV file (one row per program).
pub fn write_results_csv(path: &Path, results: &[RecommendationResult]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "university,program,category,composite_score,tier,academic_probability,bayesian_probability,\
         estimated_cutoff,year,mu,sigma,z_score,gaussian_cdf,beta_alpha,beta_beta,beta_posterior_mean"
    )
    .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in results {
        let e = &r.explanation;
        writeln!(
            file,
            "{},{},{},{:.4},{},{:.4},{:.4},{:.1},{},{:.2},{:.2},{:.2},{:.3},{:.1},{:.1},{:.3}",
            escape(&r.university),
            escape(&r.program),
            r.category.id(),
            r.composite_score,
            r.tier.display_name(),
            r.academic_probability,
            r.bayesian_probability,
            r.estimated_cutoff,
            r.year,
            e.mu,
            e.sigma,
            e.z_score,
            e.gaussian_cdf,
            e.beta_alpha,
            e.beta_beta,
            e.beta_posterior_mean,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the full result objects as pretty JSON.
pub fn write_results_json(path: &Path, results: &[RecommendationResult]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, results)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

fn escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Explanation, Tier};
    use std::path::PathBuf;

    fn result() -> RecommendationResult {
        RecommendationResult {
            university: "Alpha U".to_string(),
            program: "Commerce, Honours".to_string(),
            category: Category::Business,
            academic_probability: 0.6123,
            bayesian_probability: 0.5881,
            composite_score: 0.5412,
            tier: Tier::Match,
            estimated_cutoff: 86.0,
            year: 2023,
            explanation: Explanation {
                mu: 87.11,
                sigma: 4.25,
                z_score: 0.21,
                gaussian_cdf: 0.583,
                beta_alpha: 301.4,
                beta_beta: 200.6,
                beta_posterior_mean: 0.588,
            },
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("admit-odds-export-{}-{name}", std::process::id()))
    }

    #[test]
    fn csv_export_quotes_embedded_commas() {
        let path = temp_path("results.csv");
        write_results_csv(&path, &[result()]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("university,program,category,"));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Commerce, Honours\""));
        assert!(row.contains("match"));
        assert!(row.contains("0.5412"));
    }

    #[test]
    fn json_export_round_trips() {
        let path = temp_path("results.json");
        let results = vec![result()];
        write_results_json(&path, &results).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let parsed: Vec<RecommendationResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, results);
    }
}
