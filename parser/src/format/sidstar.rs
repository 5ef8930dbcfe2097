//! SID/STAR chart display-name formatting.
//!
//! Departure and arrival names concatenate the procedure type, a run of
//! runway designators, and a packed run of 5-letter waypoint identifiers
//! (e.g. `RNAVRWY0136L36R(GUVBAOSUBA)`). Unlike the approach formatter this
//! is not a first-match rule chain: each rewrite below is independent and is
//! applied in sequence to the same working string.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PATTERNS: LazyLock<SidStarPatterns> = LazyLock::new(SidStarPatterns::new);

struct SidStarPatterns {
    type_runway: Regex,
    bare_runway: Regex,
    runway_token: Regex,
    packed_waypoints: Regex,
    paren_space: Regex,
}

impl SidStarPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        Self {
            type_runway: Regex::new(r"(?i)^(RNP|RNAV|ILS|VOR|NDB|LOC)RWY(\d{1,2}[LRC]?(?:\d{2}[LRC]?)*)")
                .expect("static regex must compile"),
            bare_runway: Regex::new(r"(?i)^RWY(\d{1,2}[LRC]?(?:\d{2}[LRC]?)*)")
                .expect("static regex must compile"),
            runway_token: Regex::new(r"\d{2}[LRC]?").expect("static regex must compile"),
            packed_waypoints: Regex::new(r"\(([A-Z]{10,})\)").expect("static regex must compile"),
            paren_space: Regex::new(r"([^\s])\(").expect("static regex must compile"),
        }
    }
}

/// Splits a runway-designator run into 2–3 character tokens joined with "/"
/// (`0136L36R` → `01/36L/36R`). A run too short to tokenize is kept as-is.
fn join_runway_run(run: &str) -> String {
    let tokens: Vec<&str> = PATTERNS
        .runway_token
        .find_iter(run)
        .map(|m| m.as_str())
        .collect();
    if tokens.is_empty() {
        run.to_string()
    } else {
        tokens.join("/")
    }
}

/// Splits a packed run of uppercase letters into 5-character waypoint
/// identifiers.
fn split_waypoint_run(run: &str) -> Vec<&str> {
    // The capture is ASCII-only, so byte indexing is safe.
    let mut chunks = Vec::new();
    let mut rest = run;
    while !rest.is_empty() {
        let cut = rest.len().min(5);
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Formats a raw SID/STAR chart name for display.
///
/// # Examples
///
/// ```
/// use chart_catalog_parser::format_sid_star_chart_name;
///
/// assert_eq!(
///     format_sid_star_chart_name("RNAVRWY0136L36R(GUVBAOSUBA)"),
///     "RNAV RWY 01/36L/36R (GUVBA/OSUBA)"
/// );
/// assert_eq!(format_sid_star_chart_name("RWY18L"), "RWY 18L");
/// ```
pub fn format_sid_star_chart_name(raw: &str) -> String {
    let p = &*PATTERNS;
    let mut formatted = raw.to_string();

    formatted = p
        .type_runway
        .replace(&formatted, |caps: &Captures| {
            format!(
                "{} RWY {}",
                caps[1].to_ascii_uppercase(),
                join_runway_run(&caps[2])
            )
        })
        .into_owned();

    formatted = p
        .bare_runway
        .replace(&formatted, |caps: &Captures| {
            format!("RWY {}", join_runway_run(&caps[1]))
        })
        .into_owned();

    formatted = p
        .packed_waypoints
        .replace_all(&formatted, |caps: &Captures| {
            let chunks = split_waypoint_run(&caps[1]);
            if chunks.len() > 1 {
                format!("({})", chunks.join("/"))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    formatted = p.paren_space.replace_all(&formatted, "$1 (").into_owned();

    formatted
}
