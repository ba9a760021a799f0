use domain::ports::report_sink::{ExportError, ReportSink};
use domain::ScoredDataset;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Encodes a scored table as CSV: original columns, then `RiskScore` and
/// `RiskCategory`, one row per vessel in the order given.
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn write<W: Write>(report: &ScoredDataset, out: W) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(out);

        writer
            .write_record(report.export_columns())
            .map_err(encode)?;
        for vessel in &report.vessels {
            writer
                .write_record(report.export_row(vessel))
                .map_err(encode)?;
        }

        writer
            .flush()
            .map_err(|e| ExportError::Encode(e.to_string()))
    }

    pub fn to_string(report: &ScoredDataset) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        Self::write(report, &mut buf)?;
        String::from_utf8(buf).map_err(|e| ExportError::Encode(e.to_string()))
    }
}

/// Writes the report to a file on disk, replacing any previous export.
#[derive(Debug, Clone)]
pub struct CsvReportFile {
    path: PathBuf,
}

impl CsvReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for CsvReportFile {
    fn publish(&self, report: &ScoredDataset) -> Result<(), ExportError> {
        let file = File::create(&self.path).map_err(|source| ExportError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        CsvReportWriter::write(report, file)?;
        info!(path = %self.path.display(), rows = report.len(), "exported prioritized report");
        Ok(())
    }
}

fn encode(err: csv::Error) -> ExportError {
    ExportError::Encode(err.to_string())
}
