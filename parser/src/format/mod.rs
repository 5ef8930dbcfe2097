//! Display-name formatting for chart records.
//!
//! Two independent rule engines rewrite raw catalog names into readable
//! labels: [`format_app_chart_name`] for approach charts and
//! [`format_sid_star_chart_name`] for departures/arrivals. Both are
//! presentation heuristics over the finite vocabulary of real-world
//! procedure-naming conventions: unrecognized input passes through unchanged
//! rather than failing.

mod approach;
mod sidstar;

pub use approach::format_app_chart_name;
pub use sidstar::format_sid_star_chart_name;

use chart_catalog_core::{Category, ChartRecord};

/// Returns the display name for a record shown under `category`.
///
/// Approach charts go through the approach formatter, SID/STAR charts through
/// the SID/STAR formatter; taxi, rules, and other charts keep their raw name.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::{Category, ChartRecord};
/// use chart_catalog_parser::display_name;
///
/// let app = ChartRecord::new("1", "ZBAA", "仪表进近图_ILS", "ILSDMEz", "13-1");
/// assert_eq!(display_name(&app, Category::App), "ILS/DME Z");
///
/// let taxi = ChartRecord::new("2", "ZBAA", "机场图_停机位置图", "停机位置图", "2A");
/// assert_eq!(display_name(&taxi, Category::Taxi), "停机位置图");
/// ```
pub fn display_name(record: &ChartRecord, category: Category) -> String {
    match category {
        Category::App => format_app_chart_name(&record.chart_name),
        Category::Sid | Category::Star => format_sid_star_chart_name(&record.chart_name),
        _ => record.chart_name.clone(),
    }
}
