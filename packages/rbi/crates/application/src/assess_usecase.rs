use crate::error::ReportError;
use crate::report::InspectionReport;
use chrono::Utc;
use domain::scoring::sort_by_priority;
use domain::{
    ReportSink, RiskScorer, ScoredDataset, ScoredVessel, ValidationResult, VesselDataset,
    VesselSource, VesselValidator,
};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessOptions {
    /// Maximum entries on the priority action list.
    pub priority_limit: usize,
    /// Treat plausibility warnings as errors and refuse to score.
    pub strict: bool,
}

impl Default for AssessOptions {
    fn default() -> Self {
        Self {
            priority_limit: 5,
            strict: false,
        }
    }
}

/// Load, validate, score and rank a fleet, then assemble the report.
///
/// Nothing is scored unless the whole source loads and validation passes.
pub fn assess_fleet(
    source: &impl VesselSource,
    options: &AssessOptions,
) -> Result<InspectionReport, ReportError> {
    let dataset = source.load()?;
    let validation = check(&dataset, options.strict)?;

    let scored = score_dataset(dataset, &RiskScorer::new());
    info!(vessels = scored.len(), "scored and ranked fleet");

    Ok(InspectionReport::build(
        scored,
        validation,
        options.priority_limit,
        Utc::now(),
    ))
}

/// Runs the load and validation steps only.
pub fn validate_source(
    source: &impl VesselSource,
    strict: bool,
) -> Result<ValidationResult, ReportError> {
    let dataset = source.load()?;
    let validation = VesselValidator::validate(&dataset);
    Ok(if strict {
        validation.promote_warnings()
    } else {
        validation
    })
}

/// Scores every row and sorts highest risk first. Input order breaks ties.
pub fn score_dataset(dataset: VesselDataset, scorer: &RiskScorer) -> ScoredDataset {
    let mut vessels: Vec<ScoredVessel> = dataset
        .rows
        .into_iter()
        .map(|row| ScoredVessel {
            assessment: scorer.assess(&row.record),
            record: row.record,
            cells: row.cells,
        })
        .collect();
    sort_by_priority(&mut vessels);

    ScoredDataset {
        columns: dataset.columns,
        vessels,
    }
}

pub fn export_report(report: &InspectionReport, sink: &impl ReportSink) -> Result<(), ReportError> {
    sink.publish(&report.vessels)?;
    Ok(())
}

fn check(dataset: &VesselDataset, strict: bool) -> Result<ValidationResult, ReportError> {
    let mut validation = VesselValidator::validate(dataset);
    if strict {
        validation = validation.promote_warnings();
    }

    for issue in validation.warnings() {
        warn!(field = %issue.field, "{}", issue.message);
    }

    if validation.has_errors() {
        return Err(ReportError::Validation(validation));
    }
    Ok(validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExportError, IngestError, RiskCategory, VesselRecord};
    use std::cell::RefCell;

    struct FixedSource(VesselDataset);

    impl VesselSource for FixedSource {
        fn load(&self) -> Result<VesselDataset, IngestError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl VesselSource for FailingSource {
        fn load(&self) -> Result<VesselDataset, IngestError> {
            Err(IngestError::MissingColumns {
                missing: vec!["Age".to_string()],
                found: vec!["VesselID".to_string()],
            })
        }
    }

    #[derive(Default)]
    struct MemorySink(RefCell<Vec<ScoredDataset>>);

    impl ReportSink for MemorySink {
        fn publish(&self, report: &ScoredDataset) -> Result<(), ExportError> {
            self.0.borrow_mut().push(report.clone());
            Ok(())
        }
    }

    fn fleet() -> FixedSource {
        FixedSource(VesselDataset::from_records(vec![
            VesselRecord::new("V-101", 3.0, 10.0, 100.0),
            VesselRecord::new("V-102", 3.0, 20.0, 100.0),
            VesselRecord::new("V-103", 0.5, 5.0, 50.0),
        ]))
    }

    #[test]
    fn test_assess_fleet_ranks_and_summarizes() {
        let report = assess_fleet(&fleet(), &AssessOptions::default()).unwrap();

        let ids: Vec<&str> = report
            .vessels
            .vessels
            .iter()
            .map(|v| v.record.vessel_id.as_str())
            .collect();
        assert_eq!(ids, vec!["V-102", "V-101", "V-103"]);
        assert_eq!(report.summary.high_risk_assets, 1);
        assert_eq!(report.priority.len(), 1);
        assert_eq!(report.priority[0].risk_category, RiskCategory::High);
    }

    #[test]
    fn test_ingest_errors_stop_the_run() {
        let err = assess_fleet(&FailingSource, &AssessOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Missing required columns: Age");
    }

    #[test]
    fn test_negative_input_warns_but_scores() {
        let source = FixedSource(VesselDataset::from_records(vec![VesselRecord::new(
            "V-9", -1.0, 5.0, 50.0,
        )]));
        let report = assess_fleet(&source, &AssessOptions::default()).unwrap();

        assert!(report.validation.has_warnings());
        assert_eq!(report.vessels.vessels[0].assessment.risk_score, -1.5);
    }

    #[test]
    fn test_strict_mode_refuses_negative_input() {
        let source = FixedSource(VesselDataset::from_records(vec![VesselRecord::new(
            "V-9", -1.0, 5.0, 50.0,
        )]));
        let options = AssessOptions {
            strict: true,
            ..AssessOptions::default()
        };

        match assess_fleet(&source, &options) {
            Err(ReportError::Validation(result)) => assert_eq!(result.errors().count(), 1),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_export_publishes_sorted_table() {
        let report = assess_fleet(&fleet(), &AssessOptions::default()).unwrap();
        let sink = MemorySink::default();

        export_report(&report, &sink).unwrap();

        let published = sink.0.borrow();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].vessels[0].record.vessel_id, "V-102");
    }

    #[test]
    fn test_validate_source_in_strict_mode() {
        let source = FixedSource(VesselDataset::from_records(vec![VesselRecord::new(
            "", 1.0, 5.0, 50.0,
        )]));
        assert!(validate_source(&source, false).unwrap().valid);
        assert!(!validate_source(&source, true).unwrap().valid);
    }
}
