//! Core types and grouping primitives for aeronautical chart catalogs.
//!
//! This crate defines the foundational data model of the chart catalog:
//!
//! - [`ChartRecord`] — one catalog row (airport, raw type label, chart name,
//!   page label, supplement/modified flags).
//! - [`Category`] — the closed six-value presentation grouping (STAR, APP,
//!   TAXI, SID, OTHER, 细则) with its fixed display order.
//! - [`classify`] / [`group_by_airport`] — the raw-label classifier and the
//!   airport → category → charts grouping, with unmapped-label diagnostics
//!   returned as a side channel.
//! - [`pdf_file_name`] — the on-disk PDF name derivation.
//! - [`validate_record`] / [`record_is_valid`] — the row invariant used to
//!   filter catalog noise during parsing.
//!
//! Everything here is pure and allocation-only: no I/O, no shared state, safe
//! to call from any number of request contexts.
//!
//! # Example
//!
//! ```
//! use chart_catalog_core::*;
//!
//! let records = vec![
//!     ChartRecord::new("ZBAA-12-1", "ZBAA", "标准仪表进场图", "GUVBA进场", "12-1"),
//!     ChartRecord::new("ZBAA-x", "ZBAA", "机场细则", "ZBAA通用细则", ""),
//! ];
//!
//! let (catalog, diagnostics) = group_by_airport(&records);
//! assert_eq!(catalog.airports(), vec!["ZBAA"]);
//! assert_eq!(catalog.categories("ZBAA"), vec![Category::Star, Category::Rules]);
//! assert!(diagnostics.warnings().is_empty());
//!
//! let rules = &catalog.charts("ZBAA", Category::Rules)[0];
//! assert_eq!(pdf_file_name(rules), "ZBAA通用细则.pdf");
//! ```

mod classify;
mod filename;
mod types;
mod validate;

pub use classify::{GroupedCatalog, GroupingDiagnostics, classify, group_by_airport};
pub use filename::pdf_file_name;
pub use types::{
    AirportInfo, CATEGORY_ORDER, Category, ChartRecord, DATABASE_CODING_NAME, RULES_TYPE_LABEL,
    WAYPOINT_COORDS_NAME,
};
pub use validate::{RecordIssue, record_is_valid, validate_record};
