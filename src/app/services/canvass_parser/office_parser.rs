//! Office block parsing: one OfficeCanvass from one OfficeBlock
//!
//! Parsing runs as a strict pipeline over the block's lines: turnout
//! sub-column removal, title metadata extraction, header/table boundary
//! scanning, column inference, and row tokenization. Any failure fails
//! the whole block; the caller reports it and continues with the
//! remaining blocks.

use super::column_inference::infer_candidates;
use super::line_classifier::LineClassifier;
use super::row_tokenizer::tokenize_row;
use crate::app::models::{OfficeBlock, OfficeCanvass};
use crate::constants::{
    DISTRICT_PATTERN, PARTY_PREFIXES, PRECINCT_COUNT_PATTERN, TURNOUT_COLUMN_PATTERN,
};
use crate::error::{CanvassError, Result};
use regex::{Captures, Regex};
use tracing::trace;

/// Header/table scanning state, entered after the title and its spacer
/// line are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Header,
    Table,
    Done,
}

/// Parses one office block into an [`OfficeCanvass`].
#[derive(Debug, Clone)]
pub struct OfficeBlockParser {
    classifier: LineClassifier,
    turnout: Regex,
    district: Regex,
    precinct_count: Regex,
}

impl OfficeBlockParser {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
            turnout: Regex::new(TURNOUT_COLUMN_PATTERN).expect("turnout pattern compiles"),
            district: Regex::new(DISTRICT_PATTERN).expect("district pattern compiles"),
            precinct_count: Regex::new(PRECINCT_COUNT_PATTERN)
                .expect("precinct-count pattern compiles"),
        }
    }

    /// Parse a block. Fails with a block-scoped error when the table
    /// structure cannot be recovered.
    pub fn parse(&self, block: &OfficeBlock) -> Result<OfficeCanvass> {
        let lines = self.remove_turnout_columns(&block.lines);
        let title = lines
            .first()
            .map(|line| line.trim().to_string())
            .ok_or_else(|| CanvassError::structural_parse("<empty>", "block has no title line"))?;

        let (office, party, district) = self.parse_title_metadata(&title);
        trace!(%office, %party, %district, "parsed block title");

        let (header, table) = self.scan_regions(&lines, &title)?;
        let header = self.blank_precinct_annotation(header);
        let candidates = infer_candidates(&header, &title)?;

        let mut canvass = OfficeCanvass::new(office, party, district, candidates);
        for line in &table {
            let (precinct, votes) =
                tokenize_row(line, canvass.candidate_count()).ok_or_else(|| {
                    CanvassError::structural_parse(
                        &title,
                        format!(
                            "table row has fewer than {} tokens: '{}'",
                            canvass.candidate_count(),
                            line.trim()
                        ),
                    )
                })?;
            canvass.insert_result(precinct, votes);
        }

        Ok(canvass)
    }

    /// Delete the embedded turnout sub-column span from every line it
    /// appears on. The span is not a candidate column and would corrupt
    /// column inference if left in place.
    fn remove_turnout_columns(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.turnout.replace(line, "").into_owned())
            .collect()
    }

    /// Split the title into raw office name, party prefix, and district
    /// label.
    fn parse_title_metadata(&self, title: &str) -> (String, String, String) {
        let mut office = title.to_string();
        let mut party = String::new();

        if let Some(prefix) = title.get(..3) {
            if PARTY_PREFIXES.contains(&prefix) {
                party = prefix.to_string();
                office = title.get(4..).unwrap_or("").to_string();
            }
        }

        let mut district = String::new();
        let matched = self.district.captures(&office).map(|caps| {
            (
                caps[1].trim_start_matches('0').to_string(),
                caps.get(0).expect("full match").range(),
            )
        });
        if let Some((number, span)) = matched {
            district = number;
            office.replace_range(span, "");
        }

        (office, party, district)
    }

    /// Scan lines after the title and its spacer line into header and
    /// table regions.
    ///
    /// The underline rule line is the last header line. Table lines
    /// accumulate until an end-of-table trailer; a table running to the
    /// end of the block without one is accepted. Blank lines are kept in
    /// the header (they carry grid alignment) and dropped in the table.
    fn scan_regions(&self, lines: &[String], title: &str) -> Result<(Vec<String>, Vec<String>)> {
        let mut header = Vec::new();
        let mut table = Vec::new();
        let mut state = ScanState::Header;

        for line in lines.iter().skip(2) {
            state = match state {
                ScanState::Header => {
                    header.push(line.clone());
                    if self.classifier.has_rule_run(line) {
                        ScanState::Table
                    } else {
                        ScanState::Header
                    }
                }
                ScanState::Table => {
                    if self.classifier.is_end_of_table(line) {
                        ScanState::Done
                    } else {
                        if !line.trim().is_empty() {
                            table.push(line.clone());
                        }
                        ScanState::Table
                    }
                }
                ScanState::Done => break,
            };
        }

        if state == ScanState::Header {
            return Err(CanvassError::structural_parse(
                title,
                "no underline rule found between header and table",
            ));
        }
        Ok((header, table))
    }

    /// Blank out the "NN PRECINCTS" annotation on the second-to-last
    /// header line so it cannot be read as column text. Positions are
    /// preserved by replacing with equal-length spaces.
    fn blank_precinct_annotation(&self, mut header: Vec<String>) -> Vec<String> {
        if header.len() >= 2 {
            let annotated = header.len() - 2;
            let blanked = self
                .precinct_count
                .replace_all(&header[annotated], |caps: &Captures| {
                    " ".repeat(caps[0].len())
                })
                .into_owned();
            header[annotated] = blanked;
        }
        header
    }
}

impl Default for OfficeBlockParser {
    fn default() -> Self {
        Self::new()
    }
}
