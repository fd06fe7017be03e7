//! Parse statistics and block-failure reporting
//!
//! Tracks how many office blocks a run found, parsed, and skipped, and
//! carries the skipped-block reasons for the final summary.

use crate::app::models::OfficeCanvass;
use serde::{Deserialize, Serialize};

/// Parsing result with canvasses and statistics.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed office canvasses in stream order
    pub canvasses: Vec<OfficeCanvass>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// One skipped office block and the reason it failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFailure {
    /// The block's title line
    pub block: String,

    /// Failure description
    pub reason: String,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of office blocks the segmenter produced
    pub blocks_found: usize,

    /// Number of blocks parsed into canvasses
    pub blocks_parsed: usize,

    /// Number of blocks skipped due to per-block errors
    pub blocks_skipped: usize,

    /// Skipped blocks with reasons, in stream order
    pub failures: Vec<BlockFailure>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parsed(&mut self) {
        self.blocks_parsed += 1;
    }

    pub fn record_skipped(&mut self, block: impl Into<String>, reason: impl Into<String>) {
        self.blocks_skipped += 1;
        self.failures.push(BlockFailure {
            block: block.into(),
            reason: reason.into(),
        });
    }

    /// Calculate success rate over found blocks as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.blocks_found == 0 {
            0.0
        } else {
            (self.blocks_parsed as f64 / self.blocks_found as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}
