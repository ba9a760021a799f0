pub mod assess_usecase;
pub mod error;
pub mod report;

pub use assess_usecase::{assess_fleet, export_report, score_dataset, validate_source, AssessOptions};
pub use error::ReportError;
pub use report::{InspectionReport, PriorityItem, RecommendedAction, ScoreBand};
