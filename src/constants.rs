//! Application constants for the canvass processor
//!
//! This module contains the structural tokens of the vendor report
//! format, the name normalization tables, and default values used
//! throughout the application.

// =============================================================================
// Report Structure Tokens
// =============================================================================

/// Substring marking a printed page-header line
pub const PAGE_BREAK_MARKER: &str = " PAGE ";

/// Column separator character (byte 0xB3, box-drawing vertical bar)
pub const COLUMN_SEPARATOR: char = '\u{00B3}';

/// Underline rule character (byte 0xC4, box-drawing horizontal rule)
pub const RULE_CHAR: char = '\u{00C4}';

/// Minimum consecutive rule characters that qualify as an underline run
pub const MIN_RULE_RUN: usize = 2;

/// Exact run width marking one candidate column on the underline row.
///
/// The leading rule under the precinct-label column is wider than this,
/// so the width test never selects it.
pub const COLUMN_RULE_WIDTH: usize = 5;

/// Separator piece count indicating a page laid out with two offices
pub const DUAL_OFFICE_PIECES: usize = 5;

/// Lines closing a result table
pub const END_OF_TABLE_PATTERN: &str = "OFFICIAL CANVASS|TOTALS";

/// Underline runs of two or more rule characters
pub const RULE_RUN_PATTERN: &str = "\u{00C4}\u{00C4}+";

/// Embedded turnout sub-column: separator, non-separator run, separator
pub const TURNOUT_COLUMN_PATTERN: &str = "\u{00B3}[^\u{00B3}]+\u{00B3}";

/// District label inside an office title, e.g. ", 5TH DISTRICT"
pub const DISTRICT_PATTERN: &str = r",? (\d\d?)\w?\w? DIST(?:RICT)?";

/// Precinct-count annotation printed inside the header region
pub const PRECINCT_COUNT_PATTERN: &str = r"\d\d? PRECINCTS";

// =============================================================================
// Name Normalization Tables
// =============================================================================

/// Party prefixes that may lead an office title
pub const PARTY_PREFIXES: &[&str] = &["DEM", "REP"];

/// Raw report office name to published display name.
///
/// Offices absent from this table are dropped from the output record
/// set; the report also prints down-ballot races the published office
/// list omits.
pub const OFFICE_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("U S PRESIDENT", "President"),
    ("UNITED STATES SENATOR", "U.S. Senate"),
    ("REP IN CONGRESS", "U.S. House"),
    ("SECRETARY OF STATE", "Secretary of State"),
    ("STATE TREASURER", "State Treasurer"),
    ("ATTORNEY GENERAL", "Attorney General"),
    ("GOVERNOR", "Governor"),
    ("STATE REPRESENTATIVE", "State House"),
    ("SENATOR", "State Senate"),
];

/// Special candidate labels with fixed display names; all other
/// candidates are title-cased.
pub const CANDIDATE_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("WRITE-IN", "Write-in"),
    ("OVER VOTES", "Over Votes"),
    ("UNDER VOTES", "Under Votes"),
];

// =============================================================================
// Output and Election Defaults
// =============================================================================

/// Output CSV columns, in order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "county",
    "precinct",
    "office",
    "district",
    "party",
    "candidate",
    "votes",
];

/// Default county stamped on every output record
pub const DEFAULT_COUNTY: &str = "Lane";

/// Default two-letter state code used in the output filename
pub const DEFAULT_STATE: &str = "or";

/// Default race type used in the output filename
pub const DEFAULT_RACE: &str = "primary";

/// Default election date used in the output filename
pub const DEFAULT_ELECTION_DATE: &str = "2004-05-18";
