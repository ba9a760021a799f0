use crate::app::error::CliError;
use crate::ui::{self, diagnostic};
use anyhow::Result;
use clap::Parser;
use rbi::application::validate_source;
use rbi::infrastructure::CsvVesselSource;
use std::path::PathBuf;

/// Check a register's columns and values without producing a report.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Path to the vessel register (CSV)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    pub fn execute(self, strict_default: bool) -> Result<()> {
        let source = CsvVesselSource::from_path(&self.input);
        let strict = self.strict || strict_default;
        ui::info(format!("Validating {}", source.describe()));

        let result = validate_source(&source, strict)
            .map_err(|e| CliError::from_report(e, &source.describe()))?;

        if result.has_errors() {
            return Err(CliError::Validation(result).into());
        }

        diagnostic::render_issues(&result);
        if result.has_warnings() {
            ui::warn(format!(
                "{} is usable but has warnings; scores for flagged rows are physically meaningless.",
                source.describe()
            ));
        } else {
            ui::success(format!("{} passed validation.", source.describe()));
        }
        Ok(())
    }
}
