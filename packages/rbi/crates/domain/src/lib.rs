pub mod entities;
pub mod ports;
pub mod scoring;
pub mod validation;

pub use entities::assessment::{RiskAssessment, RiskCategory};
pub use entities::dataset::{ScoredDataset, ScoredVessel, SourceRow, VesselDataset};
pub use entities::vessel::VesselRecord;
pub use ports::report_sink::{ExportError, ReportSink};
pub use ports::vessel_source::{IngestError, VesselSource};
pub use scoring::scorer::RiskScorer;
pub use validation::{ValidationIssue, ValidationLevel, ValidationResult, VesselValidator};
