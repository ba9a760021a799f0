use crate::entities::dataset::ScoredDataset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report: {0}")]
    Encode(String),
}

/// Destination for the sorted, scored table.
pub trait ReportSink {
    fn publish(&self, report: &ScoredDataset) -> Result<(), ExportError>;
}
