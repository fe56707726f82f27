//! Catalog ingestion: CSV and JSON program catalogs.
//!
//! This module is responsible for turning a catalog file into a clean list
//! of `ProgramRecord`s that are safe to score.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Boundary-only checks**: the core never re-validates, so the
//!   bins-sum-to-≈100 invariant is enforced here
//!
//! An all-zero bin row is accepted: "no data" is a defined degenerate input
//! for the estimator, not a malformed record.

use std::fs::File;
use std::path::Path;

use crate::domain::{Category, ProgramRecord};
use crate::error::AppError;

/// Allowed deviation of a record's bin sum from 100 (rounding tolerance).
pub const BIN_SUM_TOLERANCE: f64 = 1.0;

/// A loaded catalog plus row-level diagnostics.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub records: Vec<ProgramRecord>,
    /// Human-readable reasons for rows that were skipped.
    pub skipped: Vec<String>,
}

/// Load a catalog from `.json` or `.csv` (decided by extension).
pub fn load_catalog(path: &Path) -> Result<CatalogLoad, AppError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let load = if is_json {
        load_catalog_json(path)?
    } else {
        load_catalog_csv(path)?
    };

    if load.records.is_empty() {
        return Err(AppError::new(
            3,
            format!("No usable program records in '{}'.", path.display()),
        ));
    }
    Ok(load)
}

/// Read a JSON catalog (an array of program records).
pub fn load_catalog_json(path: &Path) -> Result<CatalogLoad, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open catalog '{}': {e}", path.display())))?;
    let records: Vec<ProgramRecord> = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid catalog JSON: {e}")))?;

    let mut kept = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (i, record) in records.into_iter().enumerate() {
        match validate_record(&record) {
            Ok(()) => kept.push(record),
            Err(reason) => skipped.push(format!(
                "entry {}: {reason} ({} / {})",
                i + 1,
                record.university,
                record.program
            )),
        }
    }
    Ok(CatalogLoad { records: kept, skipped })
}

const REQUIRED_COLUMNS: [&str; 10] = [
    "university",
    "program",
    "category",
    "pct95_plus",
    "pct90_94",
    "pct85_89",
    "pct80_84",
    "pct_below75",
    "estimated_cutoff",
    "year",
];

/// Read a CSV catalog with the strict 10-column schema.
pub fn load_catalog_csv(path: &Path) -> Result<CatalogLoad, AppError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to open catalog '{}': {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV header: {e}")))?
        .clone();

    let mut col = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in col.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::new(2, format!("Missing required column '{name}'.")))?;
    }

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (i, row) in reader.records().enumerate() {
        let line = i + 2; // 1-based, after the header line
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                skipped.push(format!("line {line}: unreadable row: {e}"));
                continue;
            }
        };

        match parse_row(&row, &col) {
            Ok(record) => match validate_record(&record) {
                Ok(()) => records.push(record),
                Err(reason) => skipped.push(format!("line {line}: {reason}")),
            },
            Err(reason) => skipped.push(format!("line {line}: {reason}")),
        }
    }

    Ok(CatalogLoad { records, skipped })
}

fn parse_row(row: &csv::StringRecord, col: &[usize; 10]) -> Result<ProgramRecord, String> {
    let field = |i: usize| row.get(col[i]).unwrap_or("").trim();

    let university = field(0);
    let program = field(1);
    if university.is_empty() || program.is_empty() {
        return Err("empty university or program name".to_string());
    }

    let category = Category::parse_label(field(2))
        .ok_or_else(|| format!("unknown category '{}'", field(2)))?;

    let number = |i: usize| -> Result<f64, String> {
        field(i)
            .parse::<f64>()
            .map_err(|_| format!("non-numeric value '{}' in '{}'", field(i), REQUIRED_COLUMNS[i]))
    };

    Ok(ProgramRecord {
        university: university.to_string(),
        program: program.to_string(),
        category,
        pct95_plus: number(3)?,
        pct90_94: number(4)?,
        pct85_89: number(5)?,
        pct80_84: number(6)?,
        pct_below75: number(7)?,
        estimated_cutoff: number(8)?,
        year: field(9)
            .parse::<i32>()
            .map_err(|_| format!("non-integer year '{}'", field(9)))?,
    })
}

/// Check the catalog invariants a record must satisfy before scoring.
fn validate_record(record: &ProgramRecord) -> Result<(), String> {
    let bins = record.bin_weights();
    if bins.iter().any(|b| !b.is_finite() || *b < 0.0) {
        return Err("negative or non-finite bin percentage".to_string());
    }

    let total: f64 = bins.iter().sum();
    // All-zero is the defined "no data" degenerate input; anything else must
    // sum to ≈100.
    if total != 0.0 && (total - 100.0).abs() > BIN_SUM_TOLERANCE {
        return Err(format!("bin percentages sum to {total:.1}, expected ≈100"));
    }

    if !record.estimated_cutoff.is_finite() {
        return Err("non-finite estimated cutoff".to_string());
    }
    Ok(())
}

/// Write a catalog as pretty JSON (the format `load_catalog_json` reads).
pub fn write_catalog_json(path: &Path, records: &[ProgramRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create catalog '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, records)
        .map_err(|e| AppError::new(2, format!("Failed to write catalog JSON: {e}")))?;
    Ok(())
}

/// Write a catalog in the strict CSV schema.
pub fn write_catalog_csv(path: &Path, records: &[ProgramRecord]) -> Result<(), AppError> {
    use std::io::Write;

    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create catalog '{}': {e}", path.display())))?;

    writeln!(file, "{}", REQUIRED_COLUMNS.join(","))
        .map_err(|e| AppError::new(2, format!("Failed to write catalog CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.1},{}",
            csv_escape(&r.university),
            csv_escape(&r.program),
            r.category.id(),
            r.pct95_plus,
            r.pct90_94,
            r.pct85_89,
            r.pct80_84,
            r.pct_below75,
            r.estimated_cutoff,
            r.year,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write catalog CSV row: {e}")))?;
    }

    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record() -> ProgramRecord {
        ProgramRecord {
            university: "Alpha U".to_string(),
            program: "Software Engineering".to_string(),
            category: Category::Engineering,
            pct95_plus: 10.0,
            pct90_94: 30.0,
            pct85_89: 40.0,
            pct80_84: 15.0,
            pct_below75: 5.0,
            estimated_cutoff: 88.0,
            year: 2023,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("admit-odds-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn validate_accepts_all_zero_and_rejects_bad_sums() {
        let mut r = record();
        assert!(validate_record(&r).is_ok());

        r.pct95_plus = 0.0;
        r.pct90_94 = 0.0;
        r.pct85_89 = 0.0;
        r.pct80_84 = 0.0;
        r.pct_below75 = 0.0;
        assert!(validate_record(&r).is_ok(), "all-zero bins are a defined input");

        r.pct95_plus = 40.0;
        assert!(validate_record(&r).is_err(), "partial mass must be rejected");

        let mut neg = record();
        neg.pct80_84 = -1.0;
        assert!(validate_record(&neg).is_err());
    }

    #[test]
    fn csv_round_trip_preserves_records() {
        let path = temp_path("roundtrip.csv");
        let records = vec![record()];
        write_catalog_csv(&path, &records).unwrap();
        let load = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(load.skipped.is_empty(), "skipped: {:?}", load.skipped);
        assert_eq!(load.records.len(), 1);
        let r = &load.records[0];
        assert_eq!(r.university, "Alpha U");
        assert_eq!(r.category, Category::Engineering);
        assert_eq!(r.year, 2023);
        assert!((r.pct90_94 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let path = temp_path("roundtrip.json");
        let records = vec![record()];
        write_catalog_json(&path, &records).unwrap();
        let load = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(load.skipped.is_empty());
        assert_eq!(load.records, records);
    }

    #[test]
    fn bad_rows_are_skipped_with_reasons() {
        let path = temp_path("badrows.csv");
        let csv = "\
university,program,category,pct95_plus,pct90_94,pct85_89,pct80_84,pct_below75,estimated_cutoff,year
Alpha U,Good,science,10,30,40,15,5,88.0,2023
Beta U,Bad Sum,science,10,10,10,10,10,85.0,2023
Gamma U,Bad Category,astrology,10,30,40,15,5,85.0,2023
Delta U,Bad Number,arts,x,30,40,15,5,85.0,2023
";
        std::fs::write(&path, csv).unwrap();
        let load = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(load.records.len(), 1);
        assert_eq!(load.records[0].university, "Alpha U");
        assert_eq!(load.skipped.len(), 3);
        assert!(load.skipped[0].contains("sum"));
        assert!(load.skipped[1].contains("category"));
        assert!(load.skipped[2].contains("non-numeric"));
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let path = temp_path("badschema.csv");
        std::fs::write(&path, "university,program\nA,B\n").unwrap();
        let err = load_catalog(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_catalog_is_unusable() {
        let path = temp_path("empty.csv");
        std::fs::write(
            &path,
            "university,program,category,pct95_plus,pct90_94,pct85_89,pct80_84,pct_below75,estimated_cutoff,year\n",
        )
        .unwrap();
        let err = load_catalog(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.exit_code(), 3);
    }
}
