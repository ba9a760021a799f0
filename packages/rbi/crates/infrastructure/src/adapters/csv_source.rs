use domain::entities::dataset::{RISK_CATEGORY, RISK_SCORE};
use domain::entities::vessel::{
    AGE, CORROSION_RATE, OPERATING_PRESSURE, REQUIRED_COLUMNS, VESSEL_ID,
};
use domain::ports::vessel_source::{IngestError, VesselSource};
use domain::{
    RiskAssessment, RiskCategory, ScoredDataset, ScoredVessel, SourceRow, VesselDataset,
    VesselRecord,
};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the CSV text comes from.
#[derive(Debug, Clone)]
pub enum CsvInput {
    File(PathBuf),
    Text(String),
}

/// Reads the vessel register from comma-separated text with a header row.
///
/// Header names are trimmed; required columns match exactly first and then
/// ignoring ASCII case. Any bad row fails the whole load.
#[derive(Debug, Clone)]
pub struct CsvVesselSource {
    input: CsvInput,
}

impl CsvVesselSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: CsvInput::File(path.into()),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            input: CsvInput::Text(text.into()),
        }
    }

    /// Human-readable origin, used in log lines and error messages.
    pub fn describe(&self) -> String {
        match &self.input {
            CsvInput::File(path) => path.display().to_string(),
            CsvInput::Text(_) => "<inline>".to_string(),
        }
    }

    /// Parses a previously exported report, keeping its scores as written.
    pub fn load_scored(&self) -> Result<ScoredDataset, IngestError> {
        match &self.input {
            CsvInput::File(path) => read_scored(self.open(path)?),
            CsvInput::Text(text) => read_scored(text.as_bytes()),
        }
    }

    fn open(&self, path: &Path) -> Result<File, IngestError> {
        File::open(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

impl VesselSource for CsvVesselSource {
    fn load(&self) -> Result<VesselDataset, IngestError> {
        let dataset = match &self.input {
            CsvInput::File(path) => read_vessels(self.open(path)?)?,
            CsvInput::Text(text) => read_vessels(text.as_bytes())?,
        };
        debug!(source = %self.describe(), rows = dataset.len(), "loaded vessel register");
        Ok(dataset)
    }
}

/// Reads vessel rows from any CSV reader.
pub fn read_vessels<R: Read>(rdr: R) -> Result<VesselDataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let columns = read_header(&mut reader)?;
    let idx = resolve(&columns, &REQUIRED_COLUMNS)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(malformed)?;
        let row = i + 1;
        rows.push(SourceRow {
            record: parse_record(&record, &idx, row)?,
            cells: record.iter().map(String::from).collect(),
        });
    }

    Ok(VesselDataset { columns, rows })
}

/// Reads an exported report: the vessel columns plus `RiskScore` and
/// `RiskCategory`.
pub fn read_scored<R: Read>(rdr: R) -> Result<ScoredDataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let columns = read_header(&mut reader)?;
    let idx = resolve(
        &columns,
        &[VESSEL_ID, CORROSION_RATE, AGE, OPERATING_PRESSURE, RISK_SCORE, RISK_CATEGORY],
    )?;

    let mut vessels = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(malformed)?;
        let row = i + 1;
        let risk_score = parse_number(&record, idx[4], RISK_SCORE, row)?;
        let risk_category = cell(&record, idx[5])
            .parse::<RiskCategory>()
            .map_err(|e| IngestError::InvalidField {
                row,
                message: e.to_string(),
            })?;

        vessels.push(ScoredVessel {
            record: parse_record(&record, &idx[..4], row)?,
            assessment: RiskAssessment {
                risk_score,
                risk_category,
            },
            cells: record.iter().map(String::from).collect(),
        });
    }

    Ok(ScoredDataset { columns, vessels })
}

fn read_header<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<String>, IngestError> {
    let header = reader.headers().map_err(malformed)?;
    let columns: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(IngestError::Malformed {
            line: Some(1),
            message: "source is empty; expected a header row".to_string(),
        });
    }
    Ok(columns)
}

/// Maps each wanted name to its column index, or lists every missing one.
fn resolve(columns: &[String], wanted: &[&str]) -> Result<Vec<usize>, IngestError> {
    let mut found = Vec::with_capacity(wanted.len());
    let mut missing = Vec::new();

    for name in wanted {
        match find_column(columns, name) {
            Some(i) => found.push(i),
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(found)
    } else {
        Err(IngestError::MissingColumns {
            missing,
            found: columns.to_vec(),
        })
    }
}

fn find_column(columns: &[String], name: &str) -> Option<usize> {
    columns
        .iter()
        .position(|c| c == name)
        .or_else(|| columns.iter().position(|c| c.eq_ignore_ascii_case(name)))
}

fn parse_record(
    record: &csv::StringRecord,
    idx: &[usize],
    row: usize,
) -> Result<VesselRecord, IngestError> {
    Ok(VesselRecord {
        vessel_id: cell(record, idx[0]).trim().to_string(),
        corrosion_rate: parse_number(record, idx[1], CORROSION_RATE, row)?,
        age: parse_number(record, idx[2], AGE, row)?,
        operating_pressure: parse_number(record, idx[3], OPERATING_PRESSURE, row)?,
    })
}

fn parse_number(
    record: &csv::StringRecord,
    i: usize,
    column: &str,
    row: usize,
) -> Result<f64, IngestError> {
    let raw = cell(record, i);
    raw.trim().parse::<f64>().map_err(|_| IngestError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn cell(record: &csv::StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}

fn malformed(err: csv::Error) -> IngestError {
    let line = err.position().map(|p| p.line());
    let message = match line {
        Some(l) => format!("line {}: {}", l, err),
        None => err.to_string(),
    };
    IngestError::Malformed { line, message }
}
