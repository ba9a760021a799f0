use crate::ui::diagnostic;
use rbi::application::ReportError;
use rbi::domain::{ExportError, IngestError, ValidationResult};
use rbi_config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    Usage(String),

    #[error("No input file given and the sample register {} does not exist", .0.display())]
    SampleMissing(PathBuf),

    #[error("{error}")]
    Input { source_name: String, error: IngestError },

    #[error("Validation failed with {} error(s)", .0.errors().count())]
    Validation(ValidationResult),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl CliError {
    pub fn from_report(err: ReportError, source_name: &str) -> Self {
        match err {
            ReportError::Ingest(error) => CliError::Input {
                source_name: source_name.to_string(),
                error,
            },
            ReportError::Validation(result) => CliError::Validation(result),
            ReportError::Export(e) => CliError::Export(e),
        }
    }

    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => {
                Some("Check rbi.toml (or the file given with --config) for syntax errors or unknown keys.".to_string())
            }
            CliError::SampleMissing(_) => {
                Some("Pass a register with --input <file.csv>.".to_string())
            }
            CliError::Input { error, .. } => match error {
                IngestError::Io { .. } => Some("Check the path passed with --input.".to_string()),
                IngestError::MissingColumns { .. } => None,
                _ => Some("Correct the source file and re-run; no partial report is produced.".to_string()),
            },
            CliError::Validation(_) => Some(
                "Correct the flagged values, or drop --strict to score them with warnings.".to_string(),
            ),
            _ => None,
        }
    }

    pub fn render(&self) {
        match self {
            CliError::Input {
                source_name,
                error: IngestError::MissingColumns { missing, found },
            } => {
                diagnostic::report_missing_columns(source_name, found, missing);
                return;
            }
            CliError::Validation(result) => {
                eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
                diagnostic::render_issues(result);
            }
            _ => {
                eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
            }
        }

        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_errors_keep_their_source_name() {
        let err = CliError::from_report(
            ReportError::Ingest(IngestError::InvalidNumber {
                row: 4,
                column: "Age".to_string(),
                value: "old".to_string(),
            }),
            "fleet.csv",
        );

        match &err {
            CliError::Input { source_name, .. } => assert_eq!(source_name, "fleet.csv"),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.to_string(), "Row 4: Age value 'old' is not a number");
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_missing_columns_rely_on_the_diagnostic_help() {
        let err = CliError::Input {
            source_name: "fleet.csv".to_string(),
            error: IngestError::MissingColumns {
                missing: vec!["Age".to_string()],
                found: vec!["VesselID".to_string()],
            },
        };
        assert_eq!(err.suggestion(), None);
    }
}
