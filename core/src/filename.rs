//! On-disk PDF file-name derivation.

use crate::types::ChartRecord;

/// Derives the PDF file name for a chart record.
///
/// Rules charts are stored under their chart name (unique and slash-free in
/// practice). Every other chart is stored as
/// `{ICAO}-{page label}.pdf` with any "/" removed from the page label, plus
/// a `(SUP)` marker for supplements.
///
/// # Examples
///
/// ```
/// use chart_catalog_core::{pdf_file_name, ChartRecord};
///
/// let rules = ChartRecord::new("1", "ZBAA", "机场细则", "ZBAA通用细则", "");
/// assert_eq!(pdf_file_name(&rules), "ZBAA通用细则.pdf");
///
/// let sup = ChartRecord::new("2", "ZBAA", "机场图_停机位置图", "停机位置图", "2A/1")
///     .with_supplement(true);
/// assert_eq!(pdf_file_name(&sup), "ZBAA-2A1(SUP).pdf");
/// ```
pub fn pdf_file_name(record: &ChartRecord) -> String {
    if record.is_rules() {
        return format!("{}.pdf", record.chart_name);
    }

    let page = record.page_number.replace('/', "");
    let sup = if record.supplement() { "(SUP)" } else { "" };
    format!("{}-{}{}.pdf", record.airport_icao, page, sup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChartRecord;

    #[test]
    fn test_rules_chart_uses_chart_name() {
        let record = ChartRecord::new("1", "ZBAA", "机场细则", "ZBAA通用细则", "");
        assert_eq!(pdf_file_name(&record), "ZBAA通用细则.pdf");
    }

    #[test]
    fn test_page_label_slashes_removed() {
        let record = ChartRecord::new("1", "ZBAA", "机场图_停机位置图", "停机位置图", "2A/1");
        assert_eq!(pdf_file_name(&record), "ZBAA-2A1.pdf");
    }

    #[test]
    fn test_supplement_suffix() {
        let record = ChartRecord::new("1", "ZBAA", "机场图_停机位置图", "停机位置图", "2A/1")
            .with_supplement(true);
        assert_eq!(pdf_file_name(&record), "ZBAA-2A1(SUP).pdf");
    }

    #[test]
    fn test_plain_page_label() {
        let record = ChartRecord::new("1", "ZSSS", "标准仪表进场图", "SASAN进场", "12-1");
        assert_eq!(pdf_file_name(&record), "ZSSS-12-1.pdf");
    }
}
