//! On-disk PDF lookup across the two supported chart tree layouts.
//!
//! Chart packages ship either flat (`charts/ZBAA-13-1.pdf`) or nested per
//! airport (`charts/ZBAA/ZBAA-13-1.pdf`). Lookup tries the nested layout
//! first, keyed by the ICAO prefix of the file name, then falls back to the
//! flat layout; the first existing file wins.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static ICAO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{4})-").expect("static regex must compile"));

/// Resolves a derived PDF file name against the chart tree.
///
/// Returns the path of the first existing match (nested layout first, then
/// flat), or `None` when the file exists in neither layout. Rules-chart
/// names carry no ICAO prefix and are only looked up flat.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use chart_catalog_db::resolve_pdf_path;
///
/// if let Some(path) = resolve_pdf_path(Path::new("/data/charts"), "ZBAA-13-1.pdf") {
///     println!("serving {}", path.display());
/// }
/// ```
pub fn resolve_pdf_path(charts_dir: &Path, file_name: &str) -> Option<PathBuf> {
    if let Some(caps) = ICAO_PREFIX.captures(file_name) {
        let nested = charts_dir.join(&caps[1]).join(file_name);
        if nested.is_file() {
            return Some(nested);
        }
    }

    let flat = charts_dir.join(file_name);
    if flat.is_file() { Some(flat) } else { None }
}
