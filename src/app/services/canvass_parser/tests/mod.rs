//! Test fixtures and helpers for canvass parser testing
//!
//! Builds synthetic report pages in the vendor layout: a shared
//! precinct-label column, an embedded turnout column, and one or two
//! office areas whose candidate names run vertically down the header
//! lines above fixed-width underline rules.

use crate::constants::{COLUMN_SEPARATOR, RULE_CHAR};

mod row_tokenizer_tests;

/// An underline run of the given width
pub fn rule(width: usize) -> String {
    std::iter::repeat(RULE_CHAR).take(width).collect()
}

/// A printed line with one office area: label, turnout, office pieces
pub fn line3(label: &str, turnout: &str, office: &str) -> String {
    format!("{label}{COLUMN_SEPARATOR}{turnout}{COLUMN_SEPARATOR}{office}")
}

/// A printed line with two office areas (trailing separator closes the
/// fifth, empty piece)
pub fn line5(label: &str, turnout: &str, left: &str, right: &str) -> String {
    format!(
        "{label}{COLUMN_SEPARATOR}{turnout}{COLUMN_SEPARATOR}{left}{COLUMN_SEPARATOR}{right}{COLUMN_SEPARATOR}"
    )
}

/// A printed page-header line
pub fn page_header(number: usize) -> String {
    format!("LANE COUNTY, OREGON   PRIMARY ELECTION, MAY 18, 2004   PAGE {number:03}")
}

/// One page carrying a single office: DEM GOVERNOR, 5TH DISTRICT with
/// SMITH and JONES written vertically over a 3-run underline (the
/// 9-wide leading rule is not a candidate column).
pub fn single_office_page() -> Vec<String> {
    vec![
        line3("                ", "       ", " DEM GOVERNOR, 5TH DISTRICT"),
        line3("                ", "       ", ""),
        line3("                ", "       ", "      S     J"),
        line3("                ", "       ", "      M     O"),
        line3("                ", "       ", "      I     N"),
        line3("                ", "       ", "      T     E"),
        line3("                ", "       ", "      H     S"),
        line3("  33 PRECINCTS  ", "       ", ""),
        line3(
            &format!(" {}      ", rule(9)),
            &format!(" {} ", rule(5)),
            &format!("    {} {}", rule(5), rule(5)),
        ),
        line3("PRECINCT 12A    ", "  353  ", "   150   203"),
        line3("HARRIS BRIDGE   ", "   88  ", "    42    61"),
        line3("  TOTALS        ", "  441  ", "   192   264"),
    ]
}

/// One page carrying two offices side by side: REP SENATOR (KING) on
/// the left and U S PRESIDENT (BUSH, KERRY) on the right.
pub fn dual_office_page() -> Vec<String> {
    vec![
        line5("                ", "       ", " REP SENATOR   ", " U S PRESIDENT  "),
        line5("                ", "       ", "               ", "                "),
        line5("                ", "       ", "     K         ", "    B     K     "),
        line5("                ", "       ", "     I         ", "    U     E     "),
        line5("                ", "       ", "     N         ", "    S     R     "),
        line5("                ", "       ", "     G         ", "    H     R     "),
        line5("                ", "       ", "               ", "          Y     "),
        line5("  33 PRECINCTS  ", "       ", "               ", "                "),
        line5(
            &format!(" {}      ", rule(9)),
            &format!(" {} ", rule(5)),
            &format!("   {}       ", rule(5)),
            &format!("  {} {}   ", rule(5), rule(5)),
        ),
        line5("PRECINCT 12A    ", "  353  ", "    150        ", "    10    20    "),
        line5("HARRIS BRIDGE   ", "   88  ", "     42        ", "     5     8    "),
        line5("  TOTALS        ", "  441  ", "    192        ", "    15    28    "),
    ]
}

/// A single-office page whose table contains a row with fewer tokens
/// than the candidate count.
pub fn malformed_row_page() -> Vec<String> {
    let mut page = single_office_page();
    page.insert(10, line3("BADROW          ", "       ", ""));
    page
}

/// A complete report with one single-office page
pub fn single_office_report() -> String {
    let mut lines = vec![page_header(1)];
    lines.extend(single_office_page());
    lines.join("\n")
}

/// A complete report with one dual-office page
pub fn dual_office_report() -> String {
    let mut lines = vec![page_header(1)];
    lines.extend(dual_office_page());
    lines.join("\n")
}

/// A report whose first page has a malformed table row and whose second
/// page is well-formed
pub fn mixed_report() -> String {
    let mut lines = vec![page_header(1)];
    lines.extend(malformed_row_page());
    lines.push(page_header(2));
    lines.extend(single_office_page());
    lines.join("\n")
}
