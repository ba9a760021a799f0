use domain::ValidationResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the report is printed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Report settings. The scoring formula is not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RbiConfig {
    /// Register used when no input file is given.
    #[serde(default = "default_sample_data")]
    pub sample_data: PathBuf,

    /// File name of the CSV export.
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Entries on the priority action list.
    #[serde(default = "default_priority_limit")]
    pub priority_limit: usize,

    /// Promote plausibility warnings (negative or non-finite inputs) to errors.
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RbiConfig {
    fn default() -> Self {
        Self {
            sample_data: default_sample_data(),
            export_file: default_export_file(),
            priority_limit: default_priority_limit(),
            strict: false,
            format: OutputFormat::default(),
        }
    }
}

impl RbiConfig {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.priority_limit == 0 {
            result.add_error("priority_limit", "must be at least 1");
        }

        if self.export_file.trim().is_empty() {
            result.add_error("export_file", "must not be empty");
        } else if !self.export_file.to_ascii_lowercase().ends_with(".csv") {
            result.add_warning("export_file", "export is CSV; consider a .csv extension");
        }

        result
    }
}

fn default_sample_data() -> PathBuf {
    PathBuf::from("data/vessels.csv")
}

fn default_export_file() -> String {
    "RBI_Prioritized_Inspection_Report.csv".to_string()
}

fn default_priority_limit() -> usize {
    5
}
