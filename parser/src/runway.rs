//! Runway extraction, grouping, and display ordering.
//!
//! Most chart categories are presented bucketed by the runway their name
//! references; a chart naming several runways appears under each of them,
//! and charts naming none fall into a sentinel bucket that always sorts
//! last. Taxi diagrams are the exception: they stay a flat list sorted by
//! page label.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use chart_catalog_core::{Category, ChartRecord};

static RUNWAY_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)RWY((?:\d{2}[LRC]?)+)").expect("static regex must compile"));
static RUNWAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}[LRC]?").expect("static regex must compile"));
static PAGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Z]?)(-?\d*)(.*)$").expect("static regex must compile"));

/// Extracts the runway designators referenced by a chart name.
///
/// Finds the first `RWY` token followed by a run of 2-digit (+ optional
/// L/R/C) designators and splits the run into individual tokens. Returns an
/// empty list when the name references no runway.
///
/// # Examples
///
/// ```
/// use chart_catalog_parser::extract_runways;
///
/// assert_eq!(extract_runways("RNAVRWY18L(ABCDE)"), vec!["18L"]);
/// assert_eq!(extract_runways("ILSDMERWY0136L36R"), vec!["01", "36L", "36R"]);
/// assert!(extract_runways("停机位置图").is_empty());
/// ```
pub fn extract_runways(chart_name: &str) -> Vec<String> {
    let Some(caps) = RUNWAY_RUN.captures(chart_name) else {
        return Vec::new();
    };
    RUNWAY_TOKEN
        .find_iter(&caps[1])
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Bucket key for runway-grouped presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunwayGroup {
    /// Charts referencing this runway designator (e.g. "36L").
    Runway(String),
    /// Charts referencing no runway; always displayed last.
    Other,
}

impl RunwayGroup {
    /// Returns the bucket's display label.
    pub fn label(&self) -> &str {
        match self {
            RunwayGroup::Runway(token) => token,
            RunwayGroup::Other => "其他",
        }
    }
}

impl std::fmt::Display for RunwayGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn runway_number(token: &str) -> u32 {
    token.trim_end_matches(['L', 'R', 'C']).parse().unwrap_or(0)
}

fn compare_groups(a: &RunwayGroup, b: &RunwayGroup) -> Ordering {
    match (a, b) {
        (RunwayGroup::Other, RunwayGroup::Other) => Ordering::Equal,
        (RunwayGroup::Other, _) => Ordering::Greater,
        (_, RunwayGroup::Other) => Ordering::Less,
        (RunwayGroup::Runway(x), RunwayGroup::Runway(y)) => runway_number(x)
            .cmp(&runway_number(y))
            .then_with(|| x.cmp(y)),
    }
}

/// Groups records into runway buckets in display order.
///
/// A record appears under every runway its name references; records with no
/// runway reference land in the [`RunwayGroup::Other`] bucket. Buckets are
/// ordered ascending by runway number, ties broken by string comparison,
/// with the sentinel bucket last. Records keep their input order within each
/// bucket.
pub fn group_by_runway(records: &[ChartRecord]) -> Vec<(RunwayGroup, Vec<ChartRecord>)> {
    let mut buckets: Vec<(RunwayGroup, Vec<ChartRecord>)> = Vec::new();

    for record in records {
        let runways = extract_runways(&record.chart_name);
        if runways.is_empty() {
            push_into(&mut buckets, RunwayGroup::Other, record);
        } else {
            for token in runways {
                push_into(&mut buckets, RunwayGroup::Runway(token), record);
            }
        }
    }

    buckets.sort_by(|a, b| compare_groups(&a.0, &b.0));
    buckets
}

fn push_into(
    buckets: &mut Vec<(RunwayGroup, Vec<ChartRecord>)>,
    group: RunwayGroup,
    record: &ChartRecord,
) {
    match buckets.iter().position(|(key, _)| *key == group) {
        Some(index) => buckets[index].1.push(record.clone()),
        None => buckets.push((group, vec![record.clone()])),
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct PageKey {
    prefix: u64,
    letter: String,
    suffix: String,
    rest: String,
}

/// Parses a taxi-chart page label into its sort key.
///
/// Labels look like `2A`, `2A-1`, `2R01`, `0G-1`, `2C-1-SUP`. A label
/// outside that shape sorts as prefix 0 with the whole label as trailing
/// text, which places it first; that is the intended degrade path, not an
/// error.
fn page_sort_key(label: &str) -> PageKey {
    match PAGE_LABEL.captures(label) {
        Some(caps) => PageKey {
            prefix: caps[1].parse().unwrap_or(0),
            letter: caps[2].to_string(),
            suffix: caps[3].to_string(),
            rest: caps[4].to_string(),
        },
        None => PageKey {
            prefix: 0,
            letter: String::new(),
            suffix: String::new(),
            rest: label.to_string(),
        },
    }
}

/// Returns the records sorted ascending by page label.
pub fn sort_taxi_charts(records: &[ChartRecord]) -> Vec<ChartRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| page_sort_key(&record.page_number));
    sorted
}

/// Presentation view of one category's charts.
#[derive(Debug, Clone)]
pub enum CategoryView {
    /// Flat, page-label-sorted list (taxi diagrams).
    Flat(Vec<ChartRecord>),
    /// Runway buckets in display order (every other category).
    ByRunway(Vec<(RunwayGroup, Vec<ChartRecord>)>),
}

/// Builds the presentation view for one category's records.
///
/// Taxi diagrams are never runway-grouped; every other category is.
pub fn category_view(category: Category, records: &[ChartRecord]) -> CategoryView {
    if category == Category::Taxi {
        CategoryView::Flat(sort_taxi_charts(records))
    } else {
        CategoryView::ByRunway(group_by_runway(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: &str, name: &str) -> ChartRecord {
        ChartRecord::new(id, "ZBAA", "仪表进近图_ILS", name, id)
    }

    fn taxi(id: &str, page: &str) -> ChartRecord {
        ChartRecord::new(id, "ZBAA", "机场图_停机位置图", "停机位置图", page)
    }

    #[test]
    fn test_extract_single_runway() {
        assert_eq!(extract_runways("RNAVRWY18L(ABCDE)"), vec!["18L"]);
        assert_eq!(extract_runways("ILSDMERWY09"), vec!["09"]);
    }

    #[test]
    fn test_extract_runway_run_token_split() {
        assert_eq!(extract_runways("RWY0136L36R"), vec!["01", "36L", "36R"]);
        assert_eq!(extract_runways("RWY18L18R19"), vec!["18L", "18R", "19"]);
    }

    #[test]
    fn test_extract_stops_at_three_digit_anomaly() {
        // A trailing odd digit cannot form a designator and is dropped.
        assert_eq!(extract_runways("RWY123"), vec!["12"]);
    }

    #[test]
    fn test_extract_no_runway() {
        assert!(extract_runways("停机位置图").is_empty());
        assert!(extract_runways("RWY1").is_empty());
    }

    #[test]
    fn test_group_by_runway_multi_bucket_membership() {
        let records = vec![
            app("a", "ILSDMERWY36L"),
            app("b", "RNAVRWY0136L"),
            app("c", "航路点坐标"),
        ];
        let buckets = group_by_runway(&records);
        let labels: Vec<&str> = buckets.iter().map(|(g, _)| g.label()).collect();
        assert_eq!(labels, vec!["01", "36L", "其他"]);

        let by_label = |label: &str| {
            buckets
                .iter()
                .find(|(g, _)| g.label() == label)
                .map(|(_, charts)| charts.iter().map(|c| c.chart_id.as_str()).collect::<Vec<_>>())
                .unwrap_or_default()
        };
        assert_eq!(by_label("36L"), vec!["a", "b"]);
        assert_eq!(by_label("01"), vec!["b"]);
        assert_eq!(by_label("其他"), vec!["c"]);
    }

    #[test]
    fn test_bucket_ordering_numeric_then_string() {
        let records = vec![
            app("a", "ILSRWY36R"),
            app("b", "ILSRWY36L"),
            app("c", "ILSRWY01"),
            app("d", "ILSRWY36C"),
            app("e", "没有跑道"),
        ];
        let buckets = group_by_runway(&records);
        let labels: Vec<&str> = buckets.iter().map(|(g, _)| g.label()).collect();
        // String comparison orders same-number suffixes C < L < R.
        assert_eq!(labels, vec!["01", "36C", "36L", "36R", "其他"]);
    }

    #[test]
    fn test_taxi_sort_fixture() {
        let records = vec![taxi("a", "2A"), taxi("b", "2C"), taxi("c", "2B"), taxi("d", "0G")];
        let pages: Vec<String> = sort_taxi_charts(&records)
            .iter()
            .map(|r| r.page_number.clone())
            .collect();
        assert_eq!(pages, vec!["0G", "2A", "2B", "2C"]);
    }

    #[test]
    fn test_taxi_sort_numeric_prefix_before_letter() {
        let records = vec![taxi("a", "10A"), taxi("b", "2B"), taxi("c", "2A-1"), taxi("d", "2A")];
        let pages: Vec<String> = sort_taxi_charts(&records)
            .iter()
            .map(|r| r.page_number.clone())
            .collect();
        assert_eq!(pages, vec!["2A", "2A-1", "2B", "10A"]);
    }

    #[test]
    fn test_taxi_sort_unparsable_label_sorts_first() {
        let records = vec![taxi("a", "2A"), taxi("b", "GEN"), taxi("c", "1")];
        let pages: Vec<String> = sort_taxi_charts(&records)
            .iter()
            .map(|r| r.page_number.clone())
            .collect();
        assert_eq!(pages, vec!["GEN", "1", "2A"]);
    }

    #[test]
    fn test_category_view_routing() {
        let taxi_records = vec![taxi("a", "2B"), taxi("b", "2A")];
        match category_view(Category::Taxi, &taxi_records) {
            CategoryView::Flat(sorted) => {
                assert_eq!(sorted[0].page_number, "2A");
            }
            CategoryView::ByRunway(_) => panic!("taxi must not be runway-grouped"),
        }

        let app_records = vec![app("a", "ILSRWY01")];
        assert!(matches!(
            category_view(Category::App, &app_records),
            CategoryView::ByRunway(_)
        ));
    }
}
