//! Record invariant checks.
//!
//! The catalog contains noise rows (continuation lines, blank padding rows)
//! that must be filtered during parsing. The checks here encode the row
//! invariant: an airport code is always required, and a record needs a page
//! label unless it is a rules chart, which needs a chart name instead.

use thiserror::Error;

use crate::types::ChartRecord;

/// A violated record invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordIssue {
    /// The record has no airport ICAO code.
    #[error("record has no airport code")]
    MissingAirport,
    /// A non-rules record has no page label.
    #[error("record has no page label")]
    MissingPageLabel,
    /// A rules record has no chart name.
    #[error("rules chart has no chart name")]
    MissingRulesName,
}

/// Returns every invariant the record violates (empty for a valid record).
pub fn validate_record(record: &ChartRecord) -> Vec<RecordIssue> {
    let mut issues = Vec::new();
    if record.airport_icao.is_empty() {
        issues.push(RecordIssue::MissingAirport);
    }
    if record.is_rules() {
        if record.chart_name.is_empty() {
            issues.push(RecordIssue::MissingRulesName);
        }
    } else if record.page_number.is_empty() {
        issues.push(RecordIssue::MissingPageLabel);
    }
    issues
}

/// Returns `true` when the record satisfies the row invariant.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::{record_is_valid, ChartRecord};
///
/// let ok = ChartRecord::new("ZBAA-2A", "ZBAA", "机场图_停机位置图", "停机位置图", "2A");
/// assert!(record_is_valid(&ok));
///
/// let rules = ChartRecord::new("ZBAA-x", "ZBAA", "机场细则", "ZBAA通用细则", "");
/// assert!(record_is_valid(&rules));
///
/// let noise = ChartRecord::new("", "", "机场图_停机位置图", "", "");
/// assert!(!record_is_valid(&noise));
/// ```
pub fn record_is_valid(record: &ChartRecord) -> bool {
    validate_record(record).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_airport_is_invalid() {
        let record = ChartRecord::new("1", "", "标准仪表进场图", "GUVBA进场", "12-1");
        assert_eq!(validate_record(&record), vec![RecordIssue::MissingAirport]);
    }

    #[test]
    fn test_missing_page_label_is_invalid_for_non_rules() {
        let record = ChartRecord::new("1", "ZBAA", "标准仪表进场图", "GUVBA进场", "");
        assert_eq!(validate_record(&record), vec![RecordIssue::MissingPageLabel]);
    }

    #[test]
    fn test_rules_chart_needs_name_not_page_label() {
        let with_name = ChartRecord::new("1", "ZBAA", "机场细则", "ZBAA通用细则", "");
        assert!(record_is_valid(&with_name));

        let without_name = ChartRecord::new("1", "ZBAA", "机场细则", "", "");
        assert_eq!(
            validate_record(&without_name),
            vec![RecordIssue::MissingRulesName]
        );
    }

    #[test]
    fn test_multiple_issues_accumulate() {
        let record = ChartRecord::new("1", "", "标准仪表进场图", "", "");
        assert_eq!(
            validate_record(&record),
            vec![RecordIssue::MissingAirport, RecordIssue::MissingPageLabel]
        );
    }
}
