//! Catalog loading with layout auto-detection.
//!
//! A catalog directory holds either one combined `Charts.csv` covering every
//! airport, or a header-only `Charts.csv` plus one fragment per airport
//! subdirectory. The catalog text is stored in the GBK legacy codepage and
//! is decoded before parsing.
//!
//! The full catalog is re-read and re-grouped on every call; there is no
//! incremental update and no cache. A missing or unreadable combined catalog
//! is fatal. A missing per-airport fragment only skips that airport: the
//! load continues and the skip is recorded in the [`LoadReport`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chart_catalog_db::load_catalog;
//!
//! let load = load_catalog(Path::new("/data/efb/csv")).unwrap();
//! println!(
//!     "{} airports, {} charts ({} layout)",
//!     load.catalog.airport_count(),
//!     load.catalog.record_count(),
//!     load.report.layout
//! );
//! for warning in load.report.warnings() {
//!     eprintln!("warning: {warning}");
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, warn};

use chart_catalog_core::{ChartRecord, GroupedCatalog, group_by_airport};
use chart_catalog_parser::{
    CatalogLayout, detect_layout, parse_airports_csv, parse_catalog_csv, parse_per_airport_csv,
};

use crate::error::Result;

/// Name of the catalog file, both top-level and per-airport fragments.
pub const CATALOG_FILE: &str = "Charts.csv";

/// Name of the optional airport index used by the per-airport layout.
pub const AIRPORTS_FILE: &str = "Airports.csv";

/// Diagnostics for one catalog load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Layout the catalog was detected as.
    pub layout: CatalogLayout,
    /// Valid rows parsed out of the catalog text.
    pub records_parsed: usize,
    /// Records placed into the grouped catalog.
    pub records_grouped: usize,
    /// Raw type labels with no category mapping, deduplicated.
    pub unmapped_types: Vec<String>,
    /// Airports whose fragment was missing or unreadable.
    pub skipped_airports: Vec<String>,
    /// When this load completed.
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    /// Renders the report as warning lines, one per condition.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.unmapped_types.is_empty() {
            warnings.push(format!(
                "Unmapped chart types excluded from the catalog: {}",
                self.unmapped_types.join(", ")
            ));
        }
        if !self.skipped_airports.is_empty() {
            warnings.push(format!(
                "Skipped {} airport(s) with unreadable catalog fragments: {}",
                self.skipped_airports.len(),
                self.skipped_airports.join(", ")
            ));
        }
        warnings
    }
}

/// A fully loaded catalog: grouped view, flat records, and diagnostics.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    /// Airport → category → charts grouping consumed by presentation.
    pub catalog: GroupedCatalog,
    /// The flat record list in parse order.
    pub records: Vec<ChartRecord>,
    /// Diagnostics for this load.
    pub report: LoadReport,
}

/// Loads and groups the catalog under `csv_dir`.
///
/// # Errors
///
/// Returns [`IoError`](crate::CatalogError::IoError) when the top-level
/// `Charts.csv` cannot be read. Per-airport fragment failures are not
/// errors; they are recorded in the returned [`LoadReport`].
pub fn load_catalog(csv_dir: &Path) -> Result<CatalogLoad> {
    let combined_path = csv_dir.join(CATALOG_FILE);
    let content = read_gbk(&combined_path)?;

    let layout = detect_layout(&content);
    let mut skipped_airports = Vec::new();
    let records = match layout {
        CatalogLayout::Combined => parse_catalog_csv(&content),
        CatalogLayout::PerAirport => {
            let codes = airport_codes(csv_dir)?;
            debug!(airports = codes.len(), "loading per-airport catalog fragments");

            let fragments: Vec<std::result::Result<Vec<ChartRecord>, String>> = codes
                .par_iter()
                .map(|icao| {
                    let fragment_path = csv_dir.join(icao).join(CATALOG_FILE);
                    match read_gbk(&fragment_path) {
                        Ok(text) => Ok(parse_per_airport_csv(&text, icao)),
                        Err(err) => {
                            warn!(airport = %icao, error = %err, "skipping unreadable catalog fragment");
                            Err(icao.clone())
                        }
                    }
                })
                .collect();

            let mut records = Vec::new();
            for fragment in fragments {
                match fragment {
                    Ok(mut parsed) => records.append(&mut parsed),
                    Err(icao) => skipped_airports.push(icao),
                }
            }
            records
        }
    };

    let (catalog, diagnostics) = group_by_airport(&records);
    for warning in diagnostics.warnings() {
        warn!("{warning}");
    }

    let report = LoadReport {
        layout,
        records_parsed: records.len(),
        records_grouped: diagnostics.records_grouped,
        unmapped_types: diagnostics.unmapped_types.iter().cloned().collect(),
        skipped_airports,
        loaded_at: Utc::now(),
    };

    Ok(CatalogLoad {
        catalog,
        records,
        report,
    })
}

/// Reads a catalog file and decodes it from the GBK legacy codepage.
///
/// Decoding is lossy by design: malformed byte sequences become replacement
/// characters instead of failing the load.
fn read_gbk(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let (text, _, _) = encoding_rs::GBK.decode(&bytes);
    Ok(text.into_owned())
}

/// Determines the airport list for the per-airport layout.
///
/// Prefers the `Airports.csv` index when present; otherwise scans for
/// subdirectories named like ICAO codes (four uppercase letters).
fn airport_codes(csv_dir: &Path) -> Result<Vec<String>> {
    let airports_path = csv_dir.join(AIRPORTS_FILE);
    if airports_path.is_file() {
        if let Ok(text) = read_gbk(&airports_path) {
            let codes: Vec<String> = parse_airports_csv(&text)
                .into_iter()
                .map(|airport| airport.code_id)
                .collect();
            if !codes.is_empty() {
                return Ok(codes);
            }
        }
    }

    let mut codes = Vec::new();
    for entry in std::fs::read_dir(csv_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.len() == 4 && name.chars().all(|c| c.is_ascii_uppercase()) {
            codes.push(name.to_string());
        }
    }
    codes.sort();
    Ok(codes)
}
