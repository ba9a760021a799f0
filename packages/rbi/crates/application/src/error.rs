use domain::{ExportError, IngestError, ValidationResult};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Validation failed with {} error(s)", .0.errors().count())]
    Validation(ValidationResult),

    #[error(transparent)]
    Export(#[from] ExportError),
}
