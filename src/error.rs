//! Error handling for canvass report processing.
//!
//! Provides error types with context for report input, per-block
//! structural failures, and output serialization failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvOutput(#[from] csv::Error),

    #[error("structural parse failure in block '{block}': {reason}")]
    StructuralParse { block: String, reason: String },

    #[error("column inference failure in block '{block}': {reason}")]
    ColumnInference { block: String, reason: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl CanvassError {
    /// Create a structural parse error for one office block
    pub fn structural_parse(block: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StructuralParse {
            block: block.into(),
            reason: reason.into(),
        }
    }

    /// Create a column inference error for one office block
    pub fn column_inference(block: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColumnInference {
            block: block.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the failure is scoped to a single office block and the
    /// run continues with the remaining blocks.
    pub fn is_block_scoped(&self) -> bool {
        matches!(
            self,
            Self::StructuralParse { .. } | Self::ColumnInference { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CanvassError>;
