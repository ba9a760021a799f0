use crate::entities::dataset::VesselDataset;
use crate::entities::vessel::{VesselRecord, AGE, CORROSION_RATE, OPERATING_PRESSURE, VESSEL_ID};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Error,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Warning,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_info(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level: ValidationLevel::Info,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.level == ValidationLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.level == ValidationLevel::Warning)
    }

    /// Strict mode: every warning becomes an error.
    pub fn promote_warnings(mut self) -> Self {
        for issue in &mut self.issues {
            if issue.level == ValidationLevel::Warning {
                issue.level = ValidationLevel::Error;
                self.valid = false;
            }
        }
        self
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical-plausibility checks on parsed vessel data.
///
/// The scorer accepts any `f64`; this pass only reports what an engineer
/// should look at. Negative or non-finite measurements and blank vessel IDs
/// are warnings, never errors, unless the caller promotes them.
pub struct VesselValidator;

impl VesselValidator {
    pub fn validate(dataset: &VesselDataset) -> ValidationResult {
        let mut result = ValidationResult::new();

        if dataset.is_empty() {
            result.add_info("dataset", "No vessel rows found; the report will be empty");
        }

        for (index, row) in dataset.rows.iter().enumerate() {
            Self::validate_record(&row.record, index + 1, &mut result);
        }

        debug!(
            rows = dataset.len(),
            issues = result.issues.len(),
            "validated vessel dataset"
        );
        result
    }

    /// `row` is 1-based and counts data rows only (the header is not row 1).
    pub fn validate_record(record: &VesselRecord, row: usize, result: &mut ValidationResult) {
        if record.vessel_id.trim().is_empty() {
            result.add_warning(
                format!("row {}: {}", row, VESSEL_ID),
                "Vessel identifier is blank; the asset cannot be traced in the report",
            );
        }

        let measurements = [
            (CORROSION_RATE, record.corrosion_rate),
            (AGE, record.age),
            (OPERATING_PRESSURE, record.operating_pressure),
        ];

        for (column, value) in measurements {
            if !value.is_finite() {
                result.add_warning(
                    format!("row {}: {}", row, column),
                    format!("{} is not a finite number ({}); the score is undefined", column, value),
                );
            } else if value < 0.0 {
                result.add_warning(
                    format!("row {}: {}", row, column),
                    format!(
                        "{} is negative ({}); the score is physically meaningless",
                        column, value
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_record_has_no_issues() {
        let mut result = ValidationResult::new();
        VesselValidator::validate_record(&VesselRecord::new("V-1", 0.2, 12.0, 80.0), 1, &mut result);
        assert!(result.valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_negative_and_non_finite_are_warnings() {
        let mut result = ValidationResult::new();
        VesselValidator::validate_record(
            &VesselRecord::new("V-2", -0.1, f64::INFINITY, 10.0),
            3,
            &mut result,
        );

        assert!(result.valid);
        assert!(!result.has_errors());
        let fields: Vec<&str> = result.warnings().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["row 3: CorrosionRate", "row 3: Age"]);
    }

    #[test]
    fn test_zero_is_not_negative() {
        let mut result = ValidationResult::new();
        VesselValidator::validate_record(&VesselRecord::new("V-3", 0.0, -0.0, 0.0), 1, &mut result);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_promote_warnings_invalidates() {
        let mut result = ValidationResult::new();
        result.add_warning("row 1: Age", "negative");
        result.add_info("dataset", "note");

        let strict = result.promote_warnings();
        assert!(!strict.valid);
        assert_eq!(strict.errors().count(), 1);
        assert_eq!(strict.issues[1].level, ValidationLevel::Info);
    }

    #[test]
    fn test_empty_dataset_is_informational() {
        let result = VesselValidator::validate(&VesselDataset::default());
        assert!(result.valid);
        assert_eq!(result.issues[0].level, ValidationLevel::Info);
    }
}
