//! Canvass report parser for line-printer tabulation output
//!
//! This module recovers structured election results from the character
//! grid a county tabulation system prints: pages of fixed-width tables
//! whose columns are separated by box-drawing bars and whose header is
//! closed by a horizontal rule.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and report handling
//! - [`encoding`] - 8-bit report byte decoding
//! - [`line_classifier`] - Structural line predicates
//! - [`page_segmenter`] - Page accumulation and office block splitting
//! - [`office_parser`] - OfficeCanvass construction from one block
//! - [`column_inference`] - Column spans and the vertical header read
//! - [`row_tokenizer`] - Precinct/vote-count row splitting
//! - [`stats`] - Parse statistics and block-failure reporting
//!
//! ## Usage
//!
//! ```rust
//! use canvass_processor::app::services::canvass_parser::CanvassParser;
//!
//! let parser = CanvassParser::new();
//! let result = parser.parse_report("boilerplate with no tables\n");
//! assert!(result.canvasses.is_empty());
//! ```

pub mod column_inference;
pub mod encoding;
pub mod line_classifier;
pub mod office_parser;
pub mod page_segmenter;
pub mod parser;
pub mod row_tokenizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_classifier::LineClassifier;
pub use office_parser::OfficeBlockParser;
pub use page_segmenter::PageSegmenter;
pub use parser::CanvassParser;
pub use stats::{BlockFailure, ParseResult, ParseStats};
