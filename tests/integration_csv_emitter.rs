//! Integration tests for record emission from parsed canvasses
//!
//! These tests cover the publication filter, name normalization, and
//! the CSV record layout end to end.

use canvass_processor::app::models::OfficeCanvass;
use canvass_processor::app::services::canvass_parser::CanvassParser;
use canvass_processor::app::services::csv_emitter::CsvEmitter;
use canvass_processor::app::services::office_registry::OfficeRegistry;

const SEP: char = '\u{B3}';
const RULE: char = '\u{C4}';

fn rule(width: usize) -> String {
    std::iter::repeat(RULE).take(width).collect()
}

fn line3(label: &str, turnout: &str, office: &str) -> String {
    format!("{label}{SEP}{turnout}{SEP}{office}")
}

fn governor_report() -> String {
    vec![
        "LANE COUNTY, OREGON   PRIMARY ELECTION, MAY 18, 2004   PAGE 001".to_string(),
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
        line3("  TOTALS        ", "  353  ", "   150   203"),
    ]
    .join("\n")
}

fn emit_to_string(canvasses: &[OfficeCanvass]) -> (String, canvass_processor::app::services::csv_emitter::EmitStats) {
    let registry = OfficeRegistry::new();
    let emitter = CsvEmitter::new(&registry, "Lane");
    let mut out = Vec::new();
    let stats = emitter.emit(canvasses, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), stats)
}

#[test]
fn test_parsed_report_emits_normalized_records() {
    let parser = CanvassParser::new();
    let result = parser.parse_report(&governor_report());
    let (csv_text, stats) = emit_to_string(&result.canvasses);

    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(
        lines[0],
        "county,precinct,office,district,party,candidate,votes"
    );
    assert_eq!(lines[1], "Lane,PRECINCT 12A,Governor,5,DEM,Smith,150");
    assert_eq!(lines[2], "Lane,PRECINCT 12A,Governor,5,DEM,Jones,203");
    assert_eq!(lines.len(), 3);

    assert_eq!(stats.records_written, 2);
    assert_eq!(stats.canvasses_emitted, 1);
    assert_eq!(stats.offices_excluded, 0);
}

#[test]
fn test_unpublished_office_is_excluded_entirely() {
    let mut down_ballot = OfficeCanvass::new(
        "COUNTY DOG CATCHER",
        "",
        "",
        vec!["DOE".to_string()],
    );
    down_ballot.insert_result("PRECINCT 1".to_string(), vec!["7".to_string()]);

    let (csv_text, stats) = emit_to_string(&[down_ballot]);

    // Header row only; the canvass parsed but is not published
    assert_eq!(csv_text.lines().count(), 1);
    assert_eq!(stats.offices_excluded, 1);
    assert_eq!(stats.records_written, 0);
}

#[test]
fn test_special_candidate_labels_use_fixed_display_names() {
    let mut canvass = OfficeCanvass::new(
        "GOVERNOR",
        "DEM",
        "",
        vec![
            "SMITH".to_string(),
            "WRITE-IN".to_string(),
            "OVER VOTES".to_string(),
            "UNDER VOTES".to_string(),
        ],
    );
    canvass.insert_result(
        "PRECINCT 1".to_string(),
        vec![
            "10".to_string(),
            "2".to_string(),
            "0".to_string(),
            "1".to_string(),
        ],
    );

    let (csv_text, _) = emit_to_string(&[canvass]);
    let lines: Vec<&str> = csv_text.lines().collect();

    assert_eq!(lines[1], "Lane,PRECINCT 1,Governor,,DEM,Smith,10");
    assert_eq!(lines[2], "Lane,PRECINCT 1,Governor,,DEM,Write-in,2");
    assert_eq!(lines[3], "Lane,PRECINCT 1,Governor,,DEM,Over Votes,0");
    assert_eq!(lines[4], "Lane,PRECINCT 1,Governor,,DEM,Under Votes,1");
}

#[test]
fn test_records_follow_canvass_then_table_then_column_order() {
    let mut first = OfficeCanvass::new("GOVERNOR", "DEM", "", vec!["A".to_string()]);
    first.insert_result("P2".to_string(), vec!["1".to_string()]);
    first.insert_result("P1".to_string(), vec!["2".to_string()]);

    let mut second = OfficeCanvass::new("SENATOR", "REP", "", vec!["B".to_string()]);
    second.insert_result("P1".to_string(), vec!["3".to_string()]);

    let (csv_text, stats) = emit_to_string(&[first, second]);
    let lines: Vec<&str> = csv_text.lines().collect();

    assert_eq!(lines[1], "Lane,P2,Governor,,DEM,A,1");
    assert_eq!(lines[2], "Lane,P1,Governor,,DEM,A,2");
    assert_eq!(lines[3], "Lane,P1,State Senate,,REP,B,3");
    assert_eq!(stats.records_written, 3);
}

#[test]
fn test_extended_characters_survive_to_utf8_output() {
    // A precinct label with a decoded extended byte (0xE9 -> é)
    let mut canvass = OfficeCanvass::new("GOVERNOR", "", "", vec!["SMITH".to_string()]);
    canvass.insert_result("RIVI\u{E9}RE".to_string(), vec!["4".to_string()]);

    let (csv_text, _) = emit_to_string(&[canvass]);
    assert!(csv_text.contains("RIVI\u{E9}RE"));
}
