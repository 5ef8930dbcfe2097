//! Category classification and airport grouping.
//!
//! The classifier is a static lookup over the catalog's known raw type
//! labels, with two name-based overrides. Any raw label outside the table is
//! treated as unmapped: the record is dropped from the grouped result and the
//! label is accumulated into [`GroupingDiagnostics`] so the caller can report
//! it once per load. New labels are never guessed.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{
    CATEGORY_ORDER, Category, ChartRecord, DATABASE_CODING_NAME, WAYPOINT_COORDS_NAME,
};

/// Maps a raw chart-type label and chart name to a presentation category.
///
/// The chart-name overrides win over the label table: waypoint coordinate
/// listings and database coding tables are always grouped under
/// [`Category::Other`], even when their nominal type label is unmapped.
///
/// This is a pure function; the same inputs always yield the same result.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::{classify, Category};
///
/// assert_eq!(classify("标准仪表进场图", "GUVBA进场"), Some(Category::Star));
/// assert_eq!(classify("机场细则", "ZBAA通用细则"), Some(Category::Rules));
/// assert_eq!(classify("仪表进近图_ILS", "航路点坐标"), Some(Category::Other));
/// assert_eq!(classify("未知类型", "ILSDME"), None);
/// ```
pub fn classify(raw_type: &str, chart_name: &str) -> Option<Category> {
    if chart_name == WAYPOINT_COORDS_NAME || chart_name == DATABASE_CODING_NAME {
        return Some(Category::Other);
    }
    category_for_label(raw_type)
}

fn category_for_label(label: &str) -> Option<Category> {
    match label {
        "机场细则" => Some(Category::Rules),
        "其他" => Some(Category::Other),
        "机场图_停机位置图" => Some(Category::Taxi),
        "标准仪表进场图" => Some(Category::Star),
        "标准仪表离场图" => Some(Category::Sid),
        "仪表进近图_ILS" => Some(Category::App),
        "进近图_RNAV_RNP_RADAR_GPS_GNSS" => Some(Category::App),
        "机场障碍物图_精密进近地形图" => Some(Category::Other),
        "仪表进近图_VOR" => Some(Category::App),
        "仪表进近图_NDB" => Some(Category::App),
        "最低监视引导高度图_放油区图" => Some(Category::Other),
        _ => None,
    }
}

/// Two-level grouping of a catalog: airport ICAO code → category → charts.
///
/// Airports iterate in code order and categories in display order; charts
/// within a bucket keep the order they were parsed in. The structure is built
/// fresh on every catalog load and never mutated incrementally.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::{group_by_airport, Category, ChartRecord};
///
/// let records = vec![
///     ChartRecord::new("ZBAA-12-1", "ZBAA", "标准仪表进场图", "GUVBA进场", "12-1"),
///     ChartRecord::new("ZSSS-7-1", "ZSSS", "标准仪表离场图", "SASAN离场", "7-1"),
/// ];
/// let (catalog, diagnostics) = group_by_airport(&records);
///
/// assert_eq!(catalog.airports(), vec!["ZBAA", "ZSSS"]);
/// assert_eq!(catalog.charts("ZBAA", Category::Star).len(), 1);
/// assert!(diagnostics.unmapped_types.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedCatalog {
    #[serde(flatten)]
    airports: BTreeMap<String, BTreeMap<Category, Vec<ChartRecord>>>,
}

impl GroupedCatalog {
    fn insert(&mut self, category: Category, record: ChartRecord) {
        self.airports
            .entry(record.airport_icao.clone())
            .or_default()
            .entry(category)
            .or_default()
            .push(record);
    }

    /// Returns the sorted list of airport codes present in the catalog.
    pub fn airports(&self) -> Vec<&str> {
        self.airports.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the charts for one airport and category, in parse order.
    ///
    /// Returns an empty slice when the airport or category is absent.
    pub fn charts(&self, airport: &str, category: Category) -> &[ChartRecord] {
        self.airports
            .get(airport)
            .and_then(|categories| categories.get(&category))
            .map(|charts| charts.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the categories present for one airport, in display order.
    pub fn categories(&self, airport: &str) -> Vec<Category> {
        let Some(categories) = self.airports.get(airport) else {
            return Vec::new();
        };
        CATEGORY_ORDER
            .iter()
            .copied()
            .filter(|category| categories.contains_key(category))
            .collect()
    }

    /// Returns the number of airports in the catalog.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Returns the total number of grouped chart records.
    pub fn record_count(&self) -> usize {
        self.airports
            .values()
            .flat_map(|categories| categories.values())
            .map(|charts| charts.len())
            .sum()
    }

    /// Returns `true` when no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Diagnostics accumulated while grouping a catalog.
#[derive(Debug, Clone, Default)]
pub struct GroupingDiagnostics {
    /// Raw type labels that had no category mapping, deduplicated.
    pub unmapped_types: BTreeSet<String>,
    /// Records placed into the grouped catalog.
    pub records_grouped: usize,
    /// Records dropped because their type label was unmapped.
    pub records_skipped: usize,
}

impl GroupingDiagnostics {
    /// Renders the diagnostics as warning lines, one per condition.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.unmapped_types.is_empty() {
            let labels: Vec<&str> = self.unmapped_types.iter().map(|s| s.as_str()).collect();
            warnings.push(format!(
                "Unmapped chart types ({} record(s) dropped): {}",
                self.records_skipped,
                labels.join(", ")
            ));
        }
        warnings
    }
}

/// Groups records by airport and category.
///
/// Classifiable records are cloned into the grouped catalog in input order;
/// records with unmapped type labels are skipped and reported through the
/// returned diagnostics.
pub fn group_by_airport(records: &[ChartRecord]) -> (GroupedCatalog, GroupingDiagnostics) {
    let mut catalog = GroupedCatalog::default();
    let mut diagnostics = GroupingDiagnostics::default();

    for record in records {
        match classify(&record.chart_type, &record.chart_name) {
            Some(category) => {
                catalog.insert(category, record.clone());
                diagnostics.records_grouped += 1;
            }
            None => {
                diagnostics.unmapped_types.insert(record.chart_type.clone());
                diagnostics.records_skipped += 1;
            }
        }
    }

    (catalog, diagnostics)
}
