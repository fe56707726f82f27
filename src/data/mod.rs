//! Data sources for program catalogs (currently synthetic generation only).

pub mod sample;

pub use sample::generate_catalog;
