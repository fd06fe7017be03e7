//! CSV record emission for parsed canvasses
//!
//! Flattens each [`OfficeCanvass`](crate::app::models::OfficeCanvass)
//! into one output row per precinct and candidate, applying the office
//! publication filter and candidate name normalization at this boundary.
//!
//! Components:
//! - [`writer`] - Record flattening and CSV serialization

pub mod writer;

pub use writer::{CsvEmitter, EmitStats};
