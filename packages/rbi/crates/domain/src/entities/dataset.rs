use super::assessment::RiskAssessment;
use super::vessel::{VesselRecord, REQUIRED_COLUMNS};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const RISK_SCORE: &str = "RiskScore";
pub const RISK_CATEGORY: &str = "RiskCategory";

/// A vessel row together with the raw cells it was read from.
///
/// `cells` is aligned with the owning dataset's `columns` so that export can
/// reproduce the source table, including columns the scorer never looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    pub record: VesselRecord,
    pub cells: Vec<String>,
}

/// Everything a vessel source produced for one report run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VesselDataset {
    pub columns: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl VesselDataset {
    /// Builds a dataset with only the required columns.
    pub fn from_records(records: Vec<VesselRecord>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| SourceRow {
                cells: vec![
                    record.vessel_id.clone(),
                    record.corrosion_rate.to_string(),
                    record.age.to_string(),
                    record.operating_pressure.to_string(),
                ],
                record,
            })
            .collect();

        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVessel {
    pub record: VesselRecord,
    pub assessment: RiskAssessment,
    #[serde(skip)]
    pub cells: Vec<String>,
}

/// The augmented table: source columns plus the two derived fields.
///
/// Serializes as the export header and, per vessel, the parsed record, its
/// assessment and the export cells, so columns the scorer ignores survive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoredDataset {
    pub columns: Vec<String>,
    pub vessels: Vec<ScoredVessel>,
}

impl ScoredDataset {
    /// Header for export. Existing `RiskScore`/`RiskCategory` columns keep
    /// their position; missing ones are appended in that order.
    pub fn export_columns(&self) -> Vec<String> {
        let mut columns = self.columns.clone();
        for derived in [RISK_SCORE, RISK_CATEGORY] {
            if position_of(&columns, derived).is_none() {
                columns.push(derived.to_string());
            }
        }
        columns
    }

    /// Cells of one vessel laid out under [`Self::export_columns`].
    pub fn export_row(&self, vessel: &ScoredVessel) -> Vec<String> {
        let columns = self.export_columns();
        let mut row: Vec<String> = (0..columns.len())
            .map(|i| vessel.cells.get(i).cloned().unwrap_or_default())
            .collect();

        if let Some(i) = position_of(&columns, RISK_SCORE) {
            row[i] = format!("{:.2}", vessel.assessment.risk_score);
        }
        if let Some(i) = position_of(&columns, RISK_CATEGORY) {
            row[i] = vessel.assessment.risk_category.to_string();
        }
        row
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }
}

#[derive(Serialize)]
struct VesselEntry<'a> {
    #[serde(flatten)]
    vessel: &'a ScoredVessel,
    cells: Vec<String>,
}

impl Serialize for ScoredDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let vessels: Vec<VesselEntry<'_>> = self
            .vessels
            .iter()
            .map(|vessel| VesselEntry {
                vessel,
                cells: self.export_row(vessel),
            })
            .collect();

        let mut state = serializer.serialize_struct("ScoredDataset", 2)?;
        state.serialize_field("columns", &self.export_columns())?;
        state.serialize_field("vessels", &vessels)?;
        state.end()
    }
}

fn position_of(columns: &[String], name: &str) -> Option<usize> {
    columns
        .iter()
        .position(|c| c.trim().eq_ignore_ascii_case(name))
}
