use crate::ui::{Icon, Theme};
use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use rbi::domain::{ValidationIssue, ValidationLevel, ValidationResult};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Missing required columns: {}", .missing.join(", "))]
#[diagnostic(
    code(rbi::input::missing_columns),
    help("The header row must name VesselID, CorrosionRate, Age and OperatingPressure (surrounding spaces and letter case are ignored).")
)]
pub struct MissingColumnsError {
    pub missing: Vec<String>,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("required columns missing from this header")]
    pub span: SourceSpan,
}

impl MissingColumnsError {
    pub fn new(source_name: &str, found: &[String], missing: &[String]) -> Self {
        let header = found.join(",");
        let span = SourceSpan::new(SourceOffset::from(0), header.len());

        Self {
            missing: missing.to_vec(),
            src: NamedSource::new(source_name, header),
            span,
        }
    }
}

pub fn report_missing_columns(source_name: &str, found: &[String], missing: &[String]) {
    let err = MissingColumnsError::new(source_name, found, missing);
    eprintln!("{:?}", miette::Report::new(err));
}

pub fn format_issue(issue: &ValidationIssue) -> String {
    let tag = match issue.level {
        ValidationLevel::Error => Theme::error(format!("{} error", Icon::Cross)),
        ValidationLevel::Warning => Theme::warning(format!("{}warning", Icon::Warning)),
        ValidationLevel::Info => Theme::primary(format!("{}info", Icon::Info)),
    };
    format!("{} {} {}", tag, Theme::bold(&issue.field), issue.message)
}

pub fn render_issues(result: &ValidationResult) {
    for issue in &result.issues {
        eprintln!("  {}", format_issue(issue));
    }
}
