//! Structural line classification for canvass report streams
//!
//! Recognizes the markers the vendor format uses to structure a report:
//! page-break lines, column separators, underline rules, and
//! end-of-table trailers. Classification is purely syntactic; a
//! non-match is an expected outcome, not an error.

use crate::constants::{
    COLUMN_SEPARATOR, END_OF_TABLE_PATTERN, PAGE_BREAK_MARKER, RULE_RUN_PATTERN,
};
use regex::Regex;

/// Line classifier holding the compiled structural patterns.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    end_of_table: Regex,
    rule_run: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            end_of_table: Regex::new(END_OF_TABLE_PATTERN)
                .expect("end-of-table pattern compiles"),
            rule_run: Regex::new(RULE_RUN_PATTERN).expect("rule-run pattern compiles"),
        }
    }

    /// True when the line is a printed page header.
    pub fn is_page_break(&self, line: &str) -> bool {
        line.contains(PAGE_BREAK_MARKER)
    }

    /// Character offsets of every column separator on the line.
    pub fn separator_offsets(&self, line: &str) -> Vec<usize> {
        line.chars()
            .enumerate()
            .filter(|(_, c)| *c == COLUMN_SEPARATOR)
            .map(|(offset, _)| offset)
            .collect()
    }

    /// True when the line contains an underline run of two or more rule
    /// characters.
    pub fn has_rule_run(&self, line: &str) -> bool {
        self.rule_run.is_match(line)
    }

    /// True when the line closes a result table.
    pub fn is_end_of_table(&self, line: &str) -> bool {
        self.end_of_table.is_match(line)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
