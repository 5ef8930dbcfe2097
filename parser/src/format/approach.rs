//! Approach chart display-name formatting.
//!
//! Raw approach names pack the procedure type, runway, CAT operating
//! minima, a parallel-procedure suffix letter, and a fix identifier into one
//! unbroken token (e.g. `RNP(AR)ILSDMEw(DUMIX)`). Formatting peels the
//! optional pieces off, rewrites the procedure-type prefix against an ordered
//! rule chain (most specific raw prefix first, because several prefixes are
//! substrings of the longer ones), and reassembles the pieces in display
//! order. A name matching no rule passes through unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PATTERNS: LazyLock<AppPatterns> = LazyLock::new(AppPatterns::new);

struct AppPatterns {
    runway_token: Regex,
    trailing_suffix: Regex,
    trailing_paren: Regex,

    cat_lsdme: Regex,
    cat_ilsdme: Regex,
    dme: Regex,
    trailing_ar: Regex,

    rnav_cat: Regex,
    rnav_ils_dme: Regex,
    rnav: Regex,
    rnp_cat: Regex,
    rnp_ar_ils_dme: Regex,
    rnp_ar_ils: Regex,
    rnp_loc_dme: Regex,
    rnp_ils_dme: Regex,
    rnp_ils: Regex,
    rnp: Regex,
    rnp_ar: Regex,
    loc_dme: Regex,
    loc: Regex,
    ils_dme: Regex,
    ils: Regex,
    vor_dme: Regex,
    vor: Regex,
    ndb_dme: Regex,
    ndb: Regex,

    whitespace: Regex,
}

impl AppPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        Self {
            runway_token: Regex::new(r"(?i)RWY\d{2}[LRC]?").expect("static regex must compile"),
            // A w/z/y/x parallel-procedure letter counts only immediately
            // before a parenthesized fix or at the end of the name.
            trailing_suffix: Regex::new(r"(?i)([wzyx])(\(|$)").expect("static regex must compile"),
            trailing_paren: Regex::new(r"\([^)]+\)$").expect("static regex must compile"),

            // The leading I of "ILS" merges into the roman-numeral run in the
            // raw catalog, so the run is captured up to the literal "LSDME".
            cat_lsdme: Regex::new(r"(?i)CAT-?(I+A?I?)LSDME").expect("static regex must compile"),
            cat_ilsdme: Regex::new(r"(?i)CAT-?(I+A?)ILSDME").expect("static regex must compile"),
            dme: Regex::new(r"(?i)DME").expect("static regex must compile"),
            trailing_ar: Regex::new(r"(?i)\(AR\)$").expect("static regex must compile"),

            rnav_cat: Regex::new(r"(?i)^RNAVCAT").expect("static regex must compile"),
            rnav_ils_dme: Regex::new(r"(?i)^RNAVILSDME").expect("static regex must compile"),
            rnav: Regex::new(r"(?i)^RNAV").expect("static regex must compile"),
            rnp_cat: Regex::new(r"(?i)^RNPCAT").expect("static regex must compile"),
            rnp_ar_ils_dme: Regex::new(r"(?i)^RNP\(AR\)ILSDME").expect("static regex must compile"),
            rnp_ar_ils: Regex::new(r"(?i)^RNP\(AR\)ILS").expect("static regex must compile"),
            rnp_loc_dme: Regex::new(r"(?i)^RNPLOCDME").expect("static regex must compile"),
            rnp_ils_dme: Regex::new(r"(?i)^RNPILSDME").expect("static regex must compile"),
            rnp_ils: Regex::new(r"(?i)^RNPILS").expect("static regex must compile"),
            rnp: Regex::new(r"(?i)^RNP").expect("static regex must compile"),
            rnp_ar: Regex::new(r"(?i)^RNP\(AR\)").expect("static regex must compile"),
            loc_dme: Regex::new(r"(?i)^LOCDME").expect("static regex must compile"),
            loc: Regex::new(r"(?i)^LOC").expect("static regex must compile"),
            ils_dme: Regex::new(r"(?i)^ILSDME").expect("static regex must compile"),
            ils: Regex::new(r"(?i)^ILS").expect("static regex must compile"),
            vor_dme: Regex::new(r"(?i)^VORDME").expect("static regex must compile"),
            vor: Regex::new(r"(?i)^VOR").expect("static regex must compile"),
            ndb_dme: Regex::new(r"(?i)^NDBDME").expect("static regex must compile"),
            ndb: Regex::new(r"(?i)^NDB").expect("static regex must compile"),

            whitespace: Regex::new(r"\s+").expect("static regex must compile"),
        }
    }
}

/// Renders a captured CAT roman-numeral run for display.
///
/// A run ending in "A" (or "AI") marks the three-category standard. For the
/// rest, the raw catalog absorbs the leading I of "ILS" into the run, so the
/// run length maps: 4 → I/II, 6 → II/III, 3 → III, 2 → II, 1 → I. An
/// unrecognized run is passed through untouched.
fn cat_roman_display(roman: &str) -> String {
    if roman.ends_with("AI") || roman.ends_with('A') {
        return "I/II/IIIA".to_string();
    }
    match roman.len() {
        4 => "I/II".to_string(),
        6 => "II/III".to_string(),
        3 => "III".to_string(),
        2 => "II".to_string(),
        1 => "I".to_string(),
        _ => roman.to_string(),
    }
}

fn replace_cat(pattern: &Regex, input: &str) -> String {
    pattern
        .replace(input, |caps: &Captures| {
            format!("CAT-{} ILS/DME", cat_roman_display(&caps[1].to_ascii_uppercase()))
        })
        .into_owned()
}

/// Formats a raw approach chart name for display.
///
/// # Examples
///
/// ```
/// use chart_catalog_parser::format_app_chart_name;
///
/// assert_eq!(format_app_chart_name("RNAVILSDME"), "RNAV ILS/DME");
/// assert_eq!(format_app_chart_name("VORDME"), "VOR/DME");
/// assert_eq!(format_app_chart_name("RNP(AR)ILSDMEw"), "RNP (AR) ILS/DME W");
/// assert_eq!(format_app_chart_name("ILSDMEz(DUMIX)"), "ILS/DME Z (DUMIX)");
/// ```
pub fn format_app_chart_name(raw: &str) -> String {
    let p = &*PATTERNS;

    // Runway tokens carry no information once the chart sits in a runway
    // bucket; drop them wherever they appear.
    let mut formatted = p.runway_token.replace_all(raw, "").trim().to_string();

    // Peel the parallel-procedure suffix letter off before touching
    // parentheses; it is re-inserted (uppercased) after the prefix rewrite.
    let mut suffix: Option<char> = None;
    let suffix_span = p
        .trailing_suffix
        .captures(&formatted)
        .and_then(|caps| caps.get(1).map(|m| (m.start(), m.end())));
    if let Some((start, end)) = suffix_span {
        suffix = formatted[start..end].chars().next().map(|c| c.to_ascii_uppercase());
        let rebuilt = format!("{}{}", &formatted[..start], &formatted[end..]);
        formatted = rebuilt.trim().to_string();
    }

    // Peel the trailing parenthesized fix; it goes back verbatim at the end.
    let mut trailing_fix: Option<String> = None;
    if let Some(start) = p.trailing_paren.find(&formatted).map(|m| m.start()) {
        trailing_fix = Some(formatted[start..].to_string());
        formatted.truncate(start);
        formatted.truncate(formatted.trim_end().len());
    }

    let mut suffix_folded = false;

    if p.rnav_cat.is_match(&formatted) {
        formatted = p.rnav.replace(&formatted, "RNAV ").into_owned();
        formatted = replace_cat(&p.cat_lsdme, &formatted);
        if formatted.contains("ILSDME") {
            formatted = replace_cat(&p.cat_ilsdme, &formatted);
        }
    } else if p.rnav_ils_dme.is_match(&formatted) {
        formatted = "RNAV ILS/DME".to_string();
    } else if p.rnav.is_match(&formatted) {
        formatted = p.rnav.replace(&formatted, "RNAV ").into_owned();
        formatted = p.dme.replace(&formatted, "/DME").into_owned();
    } else if p.rnp_cat.is_match(&formatted) {
        formatted = p.rnp.replace(&formatted, "RNP ").into_owned();
        formatted = replace_cat(&p.cat_lsdme, &formatted);
        if formatted.contains("ILSDME") {
            formatted = replace_cat(&p.cat_ilsdme, &formatted);
        }
    } else if p.rnp_ar_ils_dme.is_match(&formatted) {
        formatted = p
            .rnp_ar_ils_dme
            .replace(&formatted, "RNP (AR) ILS/DME")
            .into_owned();
    } else if p.rnp_ar_ils.is_match(&formatted) {
        formatted = p.rnp_ar_ils.replace(&formatted, "RNP (AR) ILS").into_owned();
    } else if p.rnp_loc_dme.is_match(&formatted) {
        formatted = "RNP LOC/DME".to_string();
    } else if p.rnp_ils_dme.is_match(&formatted) {
        let authorization_required = p.trailing_ar.is_match(&formatted);
        formatted = "RNP ILS/DME".to_string();
        if authorization_required {
            formatted.push_str(" (AR)");
        }
    } else if p.rnp_ils.is_match(&formatted) {
        formatted = "RNP ILS".to_string();
    } else if p.rnp.is_match(&formatted) {
        if p.rnp_ar.is_match(&formatted) {
            // The suffix letter belongs before the (AR) marker, not after it.
            formatted = match suffix {
                Some(letter) => format!("RNP {letter} (AR)"),
                None => "RNP (AR)".to_string(),
            };
            suffix_folded = true;
        } else {
            formatted = "RNP".to_string();
        }
    } else if p.loc_dme.is_match(&formatted) {
        formatted = "LOC/DME".to_string();
    } else if p.loc.is_match(&formatted) {
        formatted = "LOC".to_string();
    } else if p.ils_dme.is_match(&formatted) {
        formatted = "ILS/DME".to_string();
    } else if p.ils.is_match(&formatted) {
        formatted = "ILS".to_string();
    } else if p.vor_dme.is_match(&formatted) {
        formatted = "VOR/DME".to_string();
    } else if p.vor.is_match(&formatted) {
        formatted = "VOR".to_string();
    } else if p.ndb_dme.is_match(&formatted) {
        formatted = "NDB/DME".to_string();
    } else if p.ndb.is_match(&formatted) {
        formatted = "NDB".to_string();
    }

    if let Some(letter) = suffix {
        if !suffix_folded {
            formatted.push(' ');
            formatted.push(letter);
        }
    }

    formatted = p.whitespace.replace_all(&formatted, " ").trim().to_string();

    if let Some(fix) = trailing_fix {
        formatted = format!("{formatted} {fix}");
        formatted = p.whitespace.replace_all(&formatted, " ").trim().to_string();
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_roman_display_table() {
        assert_eq!(cat_roman_display("IIIA"), "I/II/IIIA");
        assert_eq!(cat_roman_display("IIAI"), "I/II/IIIA");
        assert_eq!(cat_roman_display("IIII"), "I/II");
        assert_eq!(cat_roman_display("IIIIII"), "II/III");
        assert_eq!(cat_roman_display("III"), "III");
        assert_eq!(cat_roman_display("II"), "II");
        assert_eq!(cat_roman_display("I"), "I");
        assert_eq!(cat_roman_display("IIIII"), "IIIII");
    }

    #[test]
    fn test_basic_procedure_types() {
        assert_eq!(format_app_chart_name("ILSDME"), "ILS/DME");
        assert_eq!(format_app_chart_name("ILS"), "ILS");
        assert_eq!(format_app_chart_name("VORDME"), "VOR/DME");
        assert_eq!(format_app_chart_name("VOR"), "VOR");
        assert_eq!(format_app_chart_name("NDBDME"), "NDB/DME");
        assert_eq!(format_app_chart_name("NDB"), "NDB");
        assert_eq!(format_app_chart_name("LOCDME"), "LOC/DME");
        assert_eq!(format_app_chart_name("LOC"), "LOC");
    }

    #[test]
    fn test_rnav_and_rnp_families() {
        assert_eq!(format_app_chart_name("RNAVILSDME"), "RNAV ILS/DME");
        assert_eq!(format_app_chart_name("RNPILS"), "RNP ILS");
        assert_eq!(format_app_chart_name("RNPILSDME"), "RNP ILS/DME");
        assert_eq!(format_app_chart_name("RNPILSDME(AR)"), "RNP ILS/DME (AR)");
        assert_eq!(format_app_chart_name("RNPLOCDME"), "RNP LOC/DME");
        assert_eq!(format_app_chart_name("RNP(AR)ILS"), "RNP (AR) ILS");
        assert_eq!(format_app_chart_name("RNP(AR)ILSDME"), "RNP (AR) ILS/DME");
    }

    #[test]
    fn test_runway_tokens_are_stripped() {
        assert_eq!(format_app_chart_name("ILSDMERWY36L"), "ILS/DME");
        assert_eq!(format_app_chart_name("RWY01VORDME"), "VOR/DME");
    }

    #[test]
    fn test_suffix_extraction_and_reinsertion() {
        assert_eq!(format_app_chart_name("ILSDMEz"), "ILS/DME Z");
        assert_eq!(format_app_chart_name("RNPILSx"), "RNP ILS X");
        assert_eq!(format_app_chart_name("ILSDMEz(DUMIX)"), "ILS/DME Z (DUMIX)");
    }

    #[test]
    fn test_suffix_folds_before_ar_marker() {
        // The (AR) marker is extracted as the trailing parenthetical and
        // re-appended after the suffix letter.
        assert_eq!(format_app_chart_name("RNP(AR)y"), "RNP Y (AR)");
        assert_eq!(format_app_chart_name("RNP(AR)w(LEGPO)"), "RNP W (AR) (LEGPO)");
        assert_eq!(format_app_chart_name("RNP(AR)ILSDMEw"), "RNP (AR) ILS/DME W");
    }

    #[test]
    fn test_cat_minima_runs() {
        assert_eq!(
            format_app_chart_name("RNAVCAT-IIIILSDME"),
            "RNAV CAT-I/II ILS/DME"
        );
        assert_eq!(
            format_app_chart_name("RNPCAT-IIIILSDMEx"),
            "RNP CAT-I/II ILS/DME X"
        );
        assert_eq!(
            format_app_chart_name("RNAVCAT-IIILSDME"),
            "RNAV CAT-III ILS/DME"
        );
        assert_eq!(
            format_app_chart_name("RNAVCAT-IIIAILSDME"),
            "RNAV CAT-I/II/IIIA ILS/DME"
        );
    }

    #[test]
    fn test_trailing_fix_kept_verbatim() {
        assert_eq!(format_app_chart_name("RNAVRWY18L(ABCDE)"), "RNAV (ABCDE)");
        assert_eq!(format_app_chart_name("VORDME(ELNUN)"), "VOR/DME (ELNUN)");
    }

    #[test]
    fn test_unrecognized_names_pass_through() {
        assert_eq!(format_app_chart_name("目视进近图"), "目视进近图");
        assert_eq!(format_app_chart_name("GLS"), "GLS");
    }
}
