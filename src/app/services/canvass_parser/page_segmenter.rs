//! Page segmentation: grouping the raw stream into per-office blocks
//!
//! The segmenter folds the input line sequence into page buffers at
//! page-break markers, then splits each page into one or two office
//! blocks by counting column-separator pieces per line. Dual-office
//! detection is per-line: any 5-piece line marks the whole page as
//! carrying a second office, matching the tabulation vendor's layout
//! policy (including its sensitivity to outlier lines).

use super::line_classifier::LineClassifier;
use crate::app::models::OfficeBlock;
use crate::constants::{COLUMN_SEPARATOR, DUAL_OFFICE_PIECES};
use tracing::debug;

/// Accumulation state threaded through the segmentation fold.
#[derive(Debug, Default)]
struct SegmenterState {
    current_page: Vec<String>,
    blocks: Vec<OfficeBlock>,
}

impl SegmenterState {
    /// Flush the current page buffer into office blocks and reset it.
    fn flush_page(&mut self) {
        if self.current_page.is_empty() {
            return;
        }
        let page = std::mem::take(&mut self.current_page);
        self.blocks.extend(split_page(&page));
    }
}

/// Splits a report stream into per-office text blocks.
#[derive(Debug, Clone, Default)]
pub struct PageSegmenter {
    classifier: LineClassifier,
}

impl PageSegmenter {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Segment a decoded report into office blocks in stream order.
    ///
    /// A page-break line flushes the accumulated page (the page-break
    /// line itself is dropped). End of stream flushes the final buffer
    /// even without a trailing page marker.
    pub fn segment<I, S>(&self, lines: I) -> Vec<OfficeBlock>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = SegmenterState::default();

        for line in lines {
            let line = line.into();
            if self.classifier.is_page_break(&line) {
                state.flush_page();
            } else {
                state.current_page.push(line);
            }
        }
        state.flush_page();

        debug!("segmented stream into {} office blocks", state.blocks.len());
        state.blocks
    }
}

/// Split one raw page into its office blocks.
///
/// Lines yielding a single piece carry no tabular data and are skipped.
/// The left office joins pieces 0 and 2 of every 3-or-more-piece line; a
/// page with any 5-piece line also carries a right office joining pieces
/// 0 and 3 of each such line. A page with no data-bearing lines yields
/// no blocks.
fn split_page(page: &[String]) -> Vec<OfficeBlock> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for line in page {
        let pieces: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
        if pieces.len() == 1 {
            continue;
        }

        if pieces.len() == DUAL_OFFICE_PIECES {
            right.push(format!("{}{}", pieces[0], pieces[3]));
        }
        if pieces.len() >= 3 {
            left.push(format!("{}{}", pieces[0], pieces[2]));
        }
    }

    let mut blocks = Vec::new();
    if !left.is_empty() {
        blocks.push(OfficeBlock::new(left));
    }
    if !right.is_empty() {
        debug!("page carries a second office block");
        blocks.push(OfficeBlock::new(right));
    }
    blocks
}
