//! Presentation layer: ranking, tier grouping, terminal formatting.

pub mod format;

pub use format::*;
