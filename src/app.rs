//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and validates applicant inputs
//! - loads (or generates) the program catalog
//! - runs the recommendation pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{CatalogArgs, Command, RecommendArgs};
use crate::domain::{ApplicantProfile, GRADE_MAX, GRADE_MIN, ProgramRecord};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `admit` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Recommend(args) => handle_recommend(args, OutputMode::Full),
        Command::Rank(args) => handle_recommend(args, OutputMode::RankOnly),
        Command::Catalog(args) => handle_catalog(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_recommend(args: RecommendArgs, mode: OutputMode) -> Result<(), AppError> {
    let profile = profile_from_args(&args)?;
    let catalog = load_or_generate_catalog(&args)?;

    let run = pipeline::run_recommend(&profile, &catalog, args.top.max(1));

    if mode == OutputMode::Full {
        print!(
            "{}",
            crate::report::format_run_summary(&profile, &run.ranked, run.total_programs)
        );
    }
    print!("{}", crate::report::format_tier_tables(&run.groups));

    if args.explain {
        println!("Explanation trail:");
        for tier in crate::domain::Tier::ALL {
            for r in run.groups.for_tier(tier) {
                println!("{}", crate::report::format_explanation(r));
            }
        }
    }

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &run.ranked)?;
        eprintln!("Wrote results CSV: {}", path.display());
    }
    if let Some(path) = &args.export_json {
        crate::io::export::write_results_json(path, &run.ranked)?;
        eprintln!("Wrote results JSON: {}", path.display());
    }

    Ok(())
}

fn handle_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let records = crate::data::generate_catalog(args.sample_count, args.seed)?;

    let is_json = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        crate::io::catalog::write_catalog_json(&args.out, &records)?;
    } else {
        crate::io::catalog::write_catalog_csv(&args.out, &records)?;
    }

    eprintln!("Wrote {} records: {}", records.len(), args.out.display());
    Ok(())
}

/// Validate applicant inputs and build the profile.
///
/// The pipeline would clamp out-of-range values anyway; rejecting them here
/// with a clear message is the caller-side contract.
fn profile_from_args(args: &RecommendArgs) -> Result<ApplicantProfile, AppError> {
    if !args.grade.is_finite() || !(GRADE_MIN..=GRADE_MAX).contains(&args.grade) {
        return Err(AppError::invalid_input(format!(
            "Grade must be between {GRADE_MIN} and {GRADE_MAX} (got {}).",
            args.grade
        )));
    }
    if !args.extracurricular.is_finite() || !(0.0..=1.0).contains(&args.extracurricular) {
        return Err(AppError::invalid_input(format!(
            "Extracurricular score must be between 0 and 1 (got {}).",
            args.extracurricular
        )));
    }
    if args.interests.is_empty() {
        return Err(AppError::invalid_input(
            "Select at least one interest category (--interest).",
        ));
    }

    Ok(ApplicantProfile {
        grade: args.grade,
        extracurricular_score: args.extracurricular,
        interests: args.interests.clone(),
    })
}

fn load_or_generate_catalog(args: &RecommendArgs) -> Result<Vec<ProgramRecord>, AppError> {
    match &args.catalog {
        Some(path) => {
            let load = crate::io::catalog::load_catalog(path)?;
            for reason in &load.skipped {
                eprintln!("Skipped row ({reason})");
            }
            Ok(load.records)
        }
        None => crate::data::generate_catalog(args.sample_count, args.seed),
    }
}
