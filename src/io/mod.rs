//! File boundaries: catalog ingest and result export.

pub mod catalog;
pub mod export;
