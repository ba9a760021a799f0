use crate::entities::dataset::VesselDataset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        /// Trimmed header names as found in the source.
        found: Vec<String>,
    },

    #[error("Malformed input: {message}")]
    Malformed { line: Option<u64>, message: String },

    #[error("Row {row}: {column} value '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: {message}")]
    InvalidField { row: usize, message: String },
}

/// Anything that can hand over a complete vessel table.
///
/// Implementations must fail the whole load on the first bad row; a partial
/// dataset is never returned.
pub trait VesselSource {
    fn load(&self) -> Result<VesselDataset, IngestError>;
}
