//! Column inference from underline rules and the vertical header read
//!
//! The report prints candidate names rotated: each name runs down the
//! header lines within a narrow band of character positions, and the
//! underline row beneath the header marks each candidate column with a
//! fixed-width rule run. Inference scans the underline row for runs of
//! the expected width, then reads each span character position by
//! character position down through a rectangular grid of the header
//! lines.

use crate::constants::{COLUMN_RULE_WIDTH, MIN_RULE_RUN, RULE_CHAR};
use crate::error::{CanvassError, Result};

/// Half-open character-position range of one column on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Rectangular character grid over the header lines.
///
/// Rows are padded with spaces to a common width so every column span
/// can be read without bounds surprises.
#[derive(Debug)]
pub struct HeaderGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl HeaderGrid {
    /// Build a grid from the given lines, padded to `min_width` or the
    /// longest line, whichever is greater.
    pub fn from_lines(lines: &[String], min_width: usize) -> Self {
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(min_width);

        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<char> = line.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect();

        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Read one column span vertically: each character position is read
    /// top-to-bottom through every row, and the per-position strings are
    /// joined left-to-right with spaces before whitespace collapsing.
    pub fn read_down(&self, span: ColumnSpan) -> String {
        let mut text = String::new();
        for pos in span.start..span.end {
            for row in &self.rows {
                text.push(row[pos]);
            }
            text.push(' ');
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// All underline runs of at least [`MIN_RULE_RUN`] characters on a row.
pub fn rule_runs(row: &[char]) -> Vec<ColumnSpan> {
    let mut runs = Vec::new();
    let mut start = None;

    for (offset, &c) in row.iter().enumerate() {
        match (c == RULE_CHAR, start) {
            (true, None) => start = Some(offset),
            (false, Some(run_start)) => {
                if offset - run_start >= MIN_RULE_RUN {
                    runs.push(ColumnSpan {
                        start: run_start,
                        end: offset,
                    });
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(run_start) = start {
        if row.len() - run_start >= MIN_RULE_RUN {
            runs.push(ColumnSpan {
                start: run_start,
                end: row.len(),
            });
        }
    }

    runs
}

/// Candidate names for one header region, in left-to-right column order.
///
/// The last header line is the underline row; only its runs of exactly
/// [`COLUMN_RULE_WIDTH`] characters mark candidate columns. The leading
/// rule under the precinct-label column is wider and never qualifies.
pub fn infer_candidates(header: &[String], block_title: &str) -> Result<Vec<String>> {
    let rule_line = header
        .last()
        .ok_or_else(|| CanvassError::column_inference(block_title, "empty header region"))?;
    let rule_row: Vec<char> = rule_line.chars().collect();

    let spans: Vec<ColumnSpan> = rule_runs(&rule_row)
        .into_iter()
        .filter(|run| run.width() == COLUMN_RULE_WIDTH)
        .collect();

    if spans.is_empty() {
        return Err(CanvassError::column_inference(
            block_title,
            format!(
                "no column rules of width {} on the underline row",
                COLUMN_RULE_WIDTH
            ),
        ));
    }

    let grid = HeaderGrid::from_lines(&header[..header.len() - 1], rule_row.len());
    for span in &spans {
        if span.end > grid.width() {
            return Err(CanvassError::column_inference(
                block_title,
                format!(
                    "header lines too short for column at {}..{}",
                    span.start, span.end
                ),
            ));
        }
    }

    Ok(spans.iter().map(|&span| grid.read_down(span)).collect())
}
