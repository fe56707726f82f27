//! Command-line parsing for the admission probability estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/scoring code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Category;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "admit", version, about = "University admission probability estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every program for an applicant and print the full report.
    Recommend(RecommendArgs),
    /// Print the per-tier tables only (useful for scripting).
    Rank(RecommendArgs),
    /// Generate a synthetic catalog and write it to a file.
    Catalog(CatalogArgs),
}

/// Common options for recommending and ranking.
#[derive(Debug, Parser, Clone)]
pub struct RecommendArgs {
    /// Applicant top-6 average, in [50, 100].
    #[arg(short = 'g', long)]
    pub grade: f64,

    /// Extracurricular strength score, in [0, 1].
    #[arg(short = 'e', long, default_value_t = 0.5)]
    pub extracurricular: f64,

    /// Interest category (repeatable; at least one required).
    #[arg(short = 'i', long = "interest", value_enum)]
    pub interests: Vec<Category>,

    /// Catalog file (.json or .csv). When omitted, a synthetic catalog is
    /// generated from --sample-count/--seed.
    #[arg(short = 'c', long)]
    pub catalog: Option<PathBuf>,

    /// Programs to show per tier.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Synthetic catalog size (used only without --catalog).
    #[arg(long, default_value_t = 120)]
    pub sample_count: usize,

    /// Seed for synthetic catalog generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Export all results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export all results (explanations included) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Print the numeric explanation trail under each table.
    #[arg(long)]
    pub explain: bool,
}

/// Options for synthetic catalog generation.
#[derive(Debug, Parser, Clone)]
pub struct CatalogArgs {
    /// Number of program records to generate.
    #[arg(long, default_value_t = 120)]
    pub sample_count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output path (.json or .csv decides the format).
    #[arg(short = 'o', long)]
    pub out: PathBuf,
}
