//! Catalog parsing and presentation heuristics for aeronautical charts.
//!
//! This crate turns raw catalog text into structured [`ChartRecord`]s and
//! raw chart-name strings into display-ready labels:
//!
//! - [`parse_catalog_csv`] / [`parse_per_airport_csv`] — row parsing for the
//!   two catalog layouts, with [`detect_layout`] deciding between them.
//! - [`format_app_chart_name`] / [`format_sid_star_chart_name`] — the
//!   display-name rule engines, dispatched per category by [`display_name`].
//! - [`extract_runways`] / [`group_by_runway`] / [`sort_taxi_charts`] — the
//!   runway bucketing and page-label ordering behind [`category_view`].
//!
//! Everything operates on in-memory strings; reading and decoding catalog
//! files is the caller's job (see the `chart-catalog-db` crate). All
//! heuristics degrade gracefully: unparseable rows are dropped, unmatched
//! names pass through unchanged, and nothing here returns an error.
//!
//! # Example
//!
//! ```
//! use chart_catalog_parser::{format_sid_star_chart_name, extract_runways};
//!
//! let raw = "RNAVRWY0136L36R(GUVBAOSUBA)";
//! assert_eq!(
//!     format_sid_star_chart_name(raw),
//!     "RNAV RWY 01/36L/36R (GUVBA/OSUBA)"
//! );
//! assert_eq!(extract_runways(raw), vec!["01", "36L", "36R"]);
//! ```
//!
//! [`ChartRecord`]: chart_catalog_core::ChartRecord

mod format;
mod rows;
mod runway;

pub use format::{display_name, format_app_chart_name, format_sid_star_chart_name};
pub use rows::{
    CatalogLayout, detect_layout, parse_airports_csv, parse_catalog_csv, parse_per_airport_csv,
};
pub use runway::{
    CategoryView, RunwayGroup, category_view, extract_runways, group_by_runway, sort_taxi_charts,
};
