//! Core canvass parser orchestration
//!
//! Coordinates report decoding, page segmentation, and per-block
//! parsing, and applies the failure policy: a malformed office block is
//! skipped with a warning while the rest of the report is extracted.

use std::path::Path;
use tracing::{debug, info, warn};

use super::encoding::read_report_file;
use super::office_parser::OfficeBlockParser;
use super::page_segmenter::PageSegmenter;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{OfficeBlock, OfficeCanvass};
use crate::error::Result;

/// Canvass report parser.
///
/// A pure transform from a decoded report stream to parsed canvasses;
/// blocks are processed strictly in stream order and each parse depends
/// only on its own block.
#[derive(Debug, Clone, Default)]
pub struct CanvassParser {
    segmenter: PageSegmenter,
    office_parser: OfficeBlockParser,
}

impl CanvassParser {
    pub fn new() -> Self {
        Self {
            segmenter: PageSegmenter::new(),
            office_parser: OfficeBlockParser::new(),
        }
    }

    /// Read, decode, and parse a report file.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing canvass report: {}", file_path.display());
        let content = read_report_file(file_path)?;
        Ok(self.parse_report(&content))
    }

    /// Segment a decoded report into office blocks without parsing them.
    pub fn segment(&self, content: &str) -> Vec<OfficeBlock> {
        self.segmenter.segment(content.lines())
    }

    /// Parse a single office block.
    pub fn parse_block(&self, block: &OfficeBlock) -> Result<OfficeCanvass> {
        self.office_parser.parse(block)
    }

    /// Parse a full decoded report, collecting per-block failures
    /// instead of aborting the run.
    pub fn parse_report(&self, content: &str) -> ParseResult {
        let blocks = self.segment(content);

        let mut stats = ParseStats::new();
        stats.blocks_found = blocks.len();
        let mut canvasses = Vec::new();

        for block in &blocks {
            match self.parse_block(block) {
                Ok(canvass) => {
                    debug!(
                        "parsed block '{}': {} candidates, {} precincts",
                        block.title(),
                        canvass.candidate_count(),
                        canvass.precinct_count()
                    );
                    canvasses.push(canvass);
                    stats.record_parsed();
                }
                Err(e) => {
                    warn!("skipping block '{}': {}", block.title(), e);
                    stats.record_skipped(block.title(), e.to_string());
                }
            }
        }

        info!(
            "Parsed {} of {} office blocks",
            stats.blocks_parsed, stats.blocks_found
        );
        ParseResult { canvasses, stats }
    }
}
