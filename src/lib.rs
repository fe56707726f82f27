//! `admit-odds` library crate.
//!
//! Estimates an applicant's probability of admission to university programs
//! from aggregated, binned historical admission-average data. The binary
//! (`admit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future service layer, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod model;
pub mod report;
pub mod score;
