//! Core data structures for canvass report processing.
//!
//! Defines the raw per-office text block produced by page segmentation,
//! the parsed canvass for one office, and the flat output record.

use serde::{Deserialize, Serialize};

/// Raw text belonging to exactly one office's canvass table.
///
/// Produced by the page segmenter and consumed exactly once by the
/// office block parser. The first line is the block's title line; every
/// later line belongs to the header or table region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeBlock {
    /// Block lines in original stream order
    pub lines: Vec<String>,
}

impl OfficeBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The block's title line, trimmed.
    pub fn title(&self) -> &str {
        self.lines.first().map(|line| line.trim()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Parsed results for one office: title metadata, candidate columns, and
/// per-precinct vote counts.
///
/// Constructed once from an immutable [`OfficeBlock`] and read-only
/// afterwards. Every result row holds exactly one vote count per
/// candidate, positionally aligned with `candidates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeCanvass {
    /// Raw office name as printed, before normalization
    pub office: String,

    /// Party prefix, empty when non-partisan
    pub party: String,

    /// District number as text with leading zeros stripped, empty when
    /// the office has no district
    pub district: String,

    /// Column headers in left-to-right order; defines the arity of every
    /// result row
    pub candidates: Vec<String>,

    results: Vec<(String, Vec<String>)>,
}

impl OfficeCanvass {
    pub fn new(
        office: impl Into<String>,
        party: impl Into<String>,
        district: impl Into<String>,
        candidates: Vec<String>,
    ) -> Self {
        Self {
            office: office.into(),
            party: party.into(),
            district: district.into(),
            candidates,
            results: Vec::new(),
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Insert one precinct's vote counts. A repeated precinct label
    /// replaces the earlier row while keeping its first-seen position.
    pub fn insert_result(&mut self, precinct: String, votes: Vec<String>) {
        debug_assert_eq!(votes.len(), self.candidates.len());
        match self.results.iter_mut().find(|(label, _)| *label == precinct) {
            Some(entry) => entry.1 = votes,
            None => self.results.push((precinct, votes)),
        }
    }

    /// Result rows in table order: `(precinct label, vote counts)`.
    pub fn results(&self) -> &[(String, Vec<String>)] {
        &self.results
    }

    /// Vote counts for one precinct, aligned with `candidates`.
    pub fn votes_for(&self, precinct: &str) -> Option<&[String]> {
        self.results
            .iter()
            .find(|(label, _)| label == precinct)
            .map(|(_, votes)| votes.as_slice())
    }

    pub fn precinct_count(&self) -> usize {
        self.results.len()
    }
}

/// One flat row of the published record set.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub county: String,
    pub precinct: String,
    pub office: String,
    pub district: String,
    pub party: String,
    pub candidate: String,
    pub votes: String,
}
