//! Catalog row parsing for the two delimited-text layouts.
//!
//! The catalog ships in one of two shapes: a combined file carrying the full
//! seventeen-column header for every airport, or one small fragment per
//! airport that lacks most metadata columns and uses a "True"/"False" flag
//! encoding. Both parse into the same [`ChartRecord`] shape; rows violating
//! the airport/page-label invariant are catalog noise and are dropped without
//! comment, as are rows the CSV reader cannot deserialize at all.

use serde::Deserialize;
use tracing::debug;

use chart_catalog_core::{AirportInfo, ChartRecord, record_is_valid};

/// Physical layout of a catalog tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLayout {
    /// One combined file with explicit airport and full metadata columns.
    Combined,
    /// One fragment per airport subdirectory, smaller header.
    PerAirport,
}

impl std::fmt::Display for CatalogLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLayout::Combined => f.write_str("combined"),
            CatalogLayout::PerAirport => f.write_str("per-airport"),
        }
    }
}

/// Decides which layout the top-level catalog file is in.
///
/// A file with data rows and an explicit `AirportIcao` header column is the
/// combined layout. A file with only a header line (or nothing at all) means
/// the dataset is split into per-airport fragments.
pub fn detect_layout(content: &str) -> CatalogLayout {
    let mut reader = csv_reader(content);
    let has_airport_column = reader
        .headers()
        .map(|headers| headers.iter().any(|column| column == "AirportIcao"))
        .unwrap_or(false);
    let has_rows = reader.records().next().is_some();

    let layout = if has_rows && has_airport_column {
        CatalogLayout::Combined
    } else {
        CatalogLayout::PerAirport
    };
    debug!(%layout, has_airport_column, has_rows, "detected catalog layout");
    layout
}

/// Parses combined-layout catalog content into chart records.
///
/// Rows without an airport code are dropped; rows without a page label are
/// dropped unless they are rules charts carrying a chart name instead.
pub fn parse_catalog_csv(content: &str) -> Vec<ChartRecord> {
    csv_reader(content)
        .deserialize::<ChartRecord>()
        .filter_map(|row| row.ok())
        .filter(|record| record_is_valid(record))
        .collect()
}

/// One row of the per-airport fragment layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PerAirportRow {
    #[serde(rename = "ChartName")]
    chart_name: String,
    #[serde(rename = "ChartTypeEx_CH")]
    chart_type: String,
    #[serde(rename = "PAGE_NUMBER")]
    page_number: String,
    #[serde(rename = "IS_SUP")]
    is_sup: String,
    #[serde(rename = "IsModify")]
    is_modified: String,
}

/// Normalizes the fragment layout's "True"/"False" flag encoding to the
/// "Y"/"N" encoding used internally.
fn flag_from_truthy(raw: &str) -> String {
    if raw == "True" { "Y" } else { "N" }.to_string()
}

/// Parses per-airport fragment content into chart records for `airport_icao`.
///
/// The fragment layout has no identifier column, so the chart id is
/// synthesized as `{icao}-{page label}`, falling back to the chart name for
/// rules charts without a page label. Columns absent from this layout are
/// left empty.
pub fn parse_per_airport_csv(content: &str, airport_icao: &str) -> Vec<ChartRecord> {
    let mut records = Vec::new();
    for row in csv_reader(content).deserialize::<PerAirportRow>() {
        let Ok(row) = row else { continue };

        let chart_id = if row.page_number.is_empty() {
            format!("{airport_icao}-{}", row.chart_name)
        } else {
            format!("{airport_icao}-{}", row.page_number)
        };

        let record = ChartRecord {
            chart_id,
            airport_icao: airport_icao.to_string(),
            chart_name: row.chart_name,
            chart_type: row.chart_type,
            page_number: row.page_number,
            is_sup: flag_from_truthy(&row.is_sup),
            is_modified: flag_from_truthy(&row.is_modified),
            ..ChartRecord::default()
        };
        if record_is_valid(&record) {
            records.push(record);
        }
    }
    records
}

/// Parses the airport index (`Airports.csv`); rows without a `CODE_ID` are
/// dropped.
pub fn parse_airports_csv(content: &str) -> Vec<AirportInfo> {
    csv_reader(content)
        .deserialize::<AirportInfo>()
        .filter_map(|row| row.ok())
        .filter(|airport| !airport.code_id.is_empty())
        .collect()
}

fn csv_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED_HEADER: &str = "ChartId,AirportIcao,AirportIata,CityName,AirportName,ValidFrom,ValidUntil,FilePath,ChartName,FileSize,ChartTypeEx_CH,MD5,AD_HP_ID,PAGE_NUMBER,IS_SUP,SUP_REF_CHARTID,IS_MODIFIED";

    fn combined(rows: &[&str]) -> String {
        let mut content = String::from(COMBINED_HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content
    }

    #[test]
    fn test_parse_combined_keeps_valid_rows() {
        let content = combined(&[
            "c1,ZBAA,PEK,北京,首都,20240101,20241231,charts/a.pdf,ILSDME,100,仪表进近图_ILS,d41d,1,13-1,N,,N",
            "c2,ZBAA,PEK,北京,首都,20240101,20241231,charts/b.pdf,停机位置图,100,机场图_停机位置图,d41d,1,2A/1,Y,c1,Y",
        ]);
        let records = parse_catalog_csv(&content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].chart_id, "c1");
        assert_eq!(records[0].airport_icao, "ZBAA");
        assert_eq!(records[1].page_number, "2A/1");
        assert!(records[1].supplement());
        assert!(records[1].modified());
    }

    #[test]
    fn test_parse_combined_drops_rows_without_airport() {
        let content = combined(&[
            "c1,,PEK,北京,首都,20240101,20241231,p,ILSDME,100,仪表进近图_ILS,d41d,1,13-1,N,,N",
        ]);
        assert!(parse_catalog_csv(&content).is_empty());
    }

    #[test]
    fn test_parse_combined_page_label_rule() {
        let content = combined(&[
            // No page label, not a rules chart: dropped.
            "c1,ZBAA,PEK,北京,首都,20240101,20241231,p,ILSDME,100,仪表进近图_ILS,d41d,1,,N,,N",
            // Rules chart without page label but with a name: kept.
            "c2,ZBAA,PEK,北京,首都,20240101,20241231,p,ZBAA通用细则,100,机场细则,d41d,1,,N,,N",
            // Rules chart without a name: dropped.
            "c3,ZBAA,PEK,北京,首都,20240101,20241231,p,,100,机场细则,d41d,1,,N,,N",
        ]);
        let records = parse_catalog_csv(&content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chart_name, "ZBAA通用细则");
    }

    #[test]
    fn test_parse_per_airport_normalizes_flags_and_ids() {
        let content = "\
ChartName,ChartTypeEx_CH,PAGE_NUMBER,IS_SUP,IsModify
停机位置图,机场图_停机位置图,2A/1,True,False
ZGGG通用细则,机场细则,,False,True
";
        let records = parse_per_airport_csv(content, "ZGGG");
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].chart_id, "ZGGG-2A/1");
        assert_eq!(records[0].airport_icao, "ZGGG");
        assert_eq!(records[0].is_sup, "Y");
        assert_eq!(records[0].is_modified, "N");
        assert_eq!(records[0].airport_iata, "");
        assert_eq!(records[0].file_path, "");

        assert_eq!(records[1].chart_id, "ZGGG-ZGGG通用细则");
        assert_eq!(records[1].is_sup, "N");
        assert_eq!(records[1].is_modified, "Y");
    }

    #[test]
    fn test_parse_per_airport_applies_page_label_rule() {
        let content = "\
ChartName,ChartTypeEx_CH,PAGE_NUMBER,IS_SUP,IsModify
孤行无页码,标准仪表进场图,,False,False
";
        assert!(parse_per_airport_csv(content, "ZGGG").is_empty());
    }

    #[test]
    fn test_parse_airports_csv_requires_code() {
        let content = "CODE_ID,NAME\nZBAA,北京首都\n,无代码\nZSSS,上海虹桥\n";
        let airports = parse_airports_csv(content);
        let codes: Vec<&str> = airports.iter().map(|a| a.code_id.as_str()).collect();
        assert_eq!(codes, vec!["ZBAA", "ZSSS"]);
    }

    #[test]
    fn test_detect_layout_combined() {
        let content = combined(&[
            "c1,ZBAA,PEK,北京,首都,20240101,20241231,p,ILSDME,100,仪表进近图_ILS,d41d,1,13-1,N,,N",
        ]);
        assert_eq!(detect_layout(&content), CatalogLayout::Combined);
    }

    #[test]
    fn test_detect_layout_header_only_means_per_airport() {
        assert_eq!(detect_layout(COMBINED_HEADER), CatalogLayout::PerAirport);
    }

    #[test]
    fn test_detect_layout_empty_means_per_airport() {
        assert_eq!(detect_layout(""), CatalogLayout::PerAirport);
    }
}
