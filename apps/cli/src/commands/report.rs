use crate::app::error::CliError;
use crate::ui::{self, diagnostic, Icon};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rbi::application::{assess_fleet, export_report, AssessOptions, InspectionReport};
use rbi::infrastructure::{CsvReportFile, CsvVesselSource};
use rbi_config::{OutputFormat, RbiConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Score a vessel register and produce the prioritized inspection report.
#[derive(Parser, Debug)]
pub struct ReportCommand {
    /// Vessel register (CSV). Falls back to the configured sample data.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the prioritized CSV export
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Entries on the priority action list
    #[arg(long)]
    pub top: Option<usize>,

    /// Terminal output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Refuse to score negative or non-finite measurements
    #[arg(long)]
    pub strict: bool,

    /// Skip writing the CSV export
    #[arg(long)]
    pub no_export: bool,
}

/// Settings after merging flags over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub input: PathBuf,
    pub using_sample: bool,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub options: AssessOptions,
}

impl ReportCommand {
    pub fn plan(&self, config: &RbiConfig) -> Result<ReportPlan, CliError> {
        let priority_limit = self.top.unwrap_or(config.priority_limit);
        if priority_limit == 0 {
            return Err(CliError::Usage("--top must be at least 1".to_string()));
        }

        let (input, using_sample) = match &self.input {
            Some(path) => (path.clone(), false),
            None if config.sample_data.exists() => (config.sample_data.clone(), true),
            None => return Err(CliError::SampleMissing(config.sample_data.clone())),
        };

        let output = if self.no_export {
            None
        } else {
            Some(
                self.output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.export_file)),
            )
        };

        Ok(ReportPlan {
            input,
            using_sample,
            output,
            format: self.format.map(Into::into).unwrap_or(config.format),
            options: AssessOptions {
                priority_limit,
                strict: self.strict || config.strict,
            },
        })
    }

    pub fn execute(self, config: &RbiConfig) -> Result<()> {
        let plan = self.plan(config)?;
        let interactive = plan.format == OutputFormat::Table;

        if interactive {
            cliclack::intro(console::style(" RBI Risk Prioritization ").on_cyan().black())?;
            if plan.using_sample {
                cliclack::log::info(format!(
                    "No input given; using sample vessel data from {}",
                    plan.input.display()
                ))?;
            }
        }

        let source = CsvVesselSource::from_path(&plan.input);
        let report = assess_fleet(&source, &plan.options)
            .map_err(|e| CliError::from_report(e, &source.describe()))?;

        match plan.format {
            OutputFormat::Table => {
                if report.validation.has_warnings() {
                    cliclack::log::warning(format!(
                        "{} plausibility warning(s); affected scores are physically meaningless",
                        report.validation.warnings().count()
                    ))?;
                    diagnostic::render_issues(&report.validation);
                }
                println!("{}", ui::report::render(&report));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        if let Some(path) = &plan.output {
            write_export(&report, path)?;
            if interactive {
                cliclack::outro(format!(
                    "{} Prioritized inspection report saved to {}",
                    Icon::Download,
                    path.display()
                ))?;
            } else {
                ui::success(format!("Report saved to {}", path.display()));
            }
        } else if interactive {
            cliclack::outro("Report complete (export skipped).")?;
        }

        Ok(())
    }
}

fn write_export(report: &InspectionReport, path: &Path) -> Result<(), CliError> {
    export_report(report, &CsvReportFile::new(path))
        .map_err(|e| CliError::from_report(e, &path.display().to_string()))
}
