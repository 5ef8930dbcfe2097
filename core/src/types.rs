//! Record and category definitions for the chart catalog.
//!
//! This module defines the core data model used to represent one catalog of
//! aeronautical charts. The types are designed for serialization with
//! [`serde`] and round-trip through JSON using the catalog's native column
//! names (`ChartId`, `AirportIcao`, `ChartTypeEx_CH`, `PAGE_NUMBER`, ...).

use serde::{Deserialize, Serialize};

/// Raw type label that marks airport rules charts.
///
/// Rules charts are the one chart type that carries no page label; they are
/// identified by this label and keyed by chart name instead.
pub const RULES_TYPE_LABEL: &str = "机场细则";

/// Chart name that is always routed to [`Category::Other`] (waypoint
/// coordinate listings), regardless of the record's raw type label.
pub const WAYPOINT_COORDS_NAME: &str = "航路点坐标";

/// Chart name that is always routed to [`Category::Other`] (database coding
/// tables), regardless of the record's raw type label.
pub const DATABASE_CODING_NAME: &str = "数据库编码";

/// Presentation category for a chart.
///
/// A closed six-value grouping derived from the catalog's raw Chinese-language
/// type labels via [`classify`](crate::classify). The variant declaration
/// order is the fixed display order (see [`CATEGORY_ORDER`]), so the derived
/// `Ord` sorts categories the way they are presented.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::Category;
///
/// assert_eq!(Category::Star.label(), "STAR");
/// assert_eq!(Category::Rules.label(), "细则");
/// assert!(Category::Star < Category::Rules);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Standard instrument arrival charts.
    #[serde(rename = "STAR")]
    Star,
    /// Instrument approach charts (ILS, VOR, NDB, RNAV/RNP family).
    #[serde(rename = "APP")]
    App,
    /// Airport/taxi diagrams and parking charts.
    #[serde(rename = "TAXI")]
    Taxi,
    /// Standard instrument departure charts.
    #[serde(rename = "SID")]
    Sid,
    /// Everything that has no dedicated tab (obstacle charts, waypoint
    /// listings, fuel-dump areas, ...).
    #[serde(rename = "OTHER")]
    Other,
    /// Airport rules documents (细则).
    #[serde(rename = "细则")]
    Rules,
}

/// Fixed display order of the six categories.
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Star,
    Category::App,
    Category::Taxi,
    Category::Sid,
    Category::Other,
    Category::Rules,
];

impl Category {
    /// Returns the display label used in serialized catalogs and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Star => "STAR",
            Category::App => "APP",
            Category::Taxi => "TAXI",
            Category::Sid => "SID",
            Category::Other => "OTHER",
            Category::Rules => "细则",
        }
    }

    /// Parses a display label back into a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use chart_catalog_core::Category;
    ///
    /// assert_eq!(Category::from_label("APP"), Some(Category::App));
    /// assert_eq!(Category::from_label("细则"), Some(Category::Rules));
    /// assert_eq!(Category::from_label("BOGUS"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Category> {
        CATEGORY_ORDER.iter().copied().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the chart catalog.
///
/// All fields are carried as strings exactly as the catalog stores them; the
/// `IS_SUP`/`IS_MODIFIED` flag columns use a "Y"/"N" encoding exposed through
/// [`supplement`](ChartRecord::supplement) and
/// [`modified`](ChartRecord::modified). Records are constructed once per
/// catalog load and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::ChartRecord;
///
/// let record = ChartRecord::new("ZBAA-2A/1", "ZBAA", "机场图_停机位置图", "停机位置图", "2A/1")
///     .with_supplement(true);
/// assert!(record.supplement());
/// assert!(!record.modified());
/// assert!(!record.is_rules());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRecord {
    /// Unique chart identifier.
    #[serde(rename = "ChartId")]
    pub chart_id: String,
    /// Four-letter ICAO airport code.
    #[serde(rename = "AirportIcao")]
    pub airport_icao: String,
    /// IATA airport code (empty in the per-airport layout).
    #[serde(rename = "AirportIata")]
    pub airport_iata: String,
    #[serde(rename = "CityName")]
    pub city_name: String,
    #[serde(rename = "AirportName")]
    pub airport_name: String,
    #[serde(rename = "ValidFrom")]
    pub valid_from: String,
    #[serde(rename = "ValidUntil")]
    pub valid_until: String,
    #[serde(rename = "FilePath")]
    pub file_path: String,
    /// Raw chart name with encoded procedure information.
    #[serde(rename = "ChartName")]
    pub chart_name: String,
    #[serde(rename = "FileSize")]
    pub file_size: String,
    /// Raw chart-type label (the catalog's native Chinese-language string).
    #[serde(rename = "ChartTypeEx_CH")]
    pub chart_type: String,
    #[serde(rename = "MD5")]
    pub md5: String,
    #[serde(rename = "AD_HP_ID")]
    pub ad_hp_id: String,
    /// Page label (e.g. "2A/1"); empty only for rules charts.
    #[serde(rename = "PAGE_NUMBER")]
    pub page_number: String,
    /// "Y" when the chart is a temporary supplement, else "N".
    #[serde(rename = "IS_SUP")]
    pub is_sup: String,
    /// Identifier of the chart this supplement supersedes, if any.
    #[serde(rename = "SUP_REF_CHARTID")]
    pub sup_ref_chart_id: String,
    /// "Y" when the chart changed in the current revision cycle, else "N".
    #[serde(rename = "IS_MODIFIED")]
    pub is_modified: String,
}

impl ChartRecord {
    /// Creates a record with the identifying fields set and every other
    /// column empty, as the per-airport catalog layout produces them.
    pub fn new(
        chart_id: &str,
        airport_icao: &str,
        chart_type: &str,
        chart_name: &str,
        page_number: &str,
    ) -> Self {
        Self {
            chart_id: chart_id.to_string(),
            airport_icao: airport_icao.to_string(),
            chart_type: chart_type.to_string(),
            chart_name: chart_name.to_string(),
            page_number: page_number.to_string(),
            is_sup: "N".to_string(),
            is_modified: "N".to_string(),
            ..Self::default()
        }
    }

    /// Sets the supplement flag using the catalog's "Y"/"N" encoding.
    pub fn with_supplement(mut self, supplement: bool) -> Self {
        self.is_sup = if supplement { "Y" } else { "N" }.to_string();
        self
    }

    /// Sets the modified flag using the catalog's "Y"/"N" encoding.
    pub fn with_modified(mut self, modified: bool) -> Self {
        self.is_modified = if modified { "Y" } else { "N" }.to_string();
        self
    }

    /// Returns `true` when this chart is a temporary supplement (SUP).
    pub fn supplement(&self) -> bool {
        self.is_sup == "Y"
    }

    /// Returns `true` when this chart changed in the current revision cycle.
    pub fn modified(&self) -> bool {
        self.is_modified == "Y"
    }

    /// Returns `true` when this record is an airport rules chart.
    pub fn is_rules(&self) -> bool {
        self.chart_type == RULES_TYPE_LABEL
    }
}

/// One row of the airport index (`Airports.csv`).
///
/// Only the airport code column is meaningful to this crate; rows without it
/// are discarded by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportInfo {
    /// Four-letter ICAO airport code.
    #[serde(rename = "CODE_ID")]
    pub code_id: String,
}
