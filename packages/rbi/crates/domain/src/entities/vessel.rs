use serde::{Deserialize, Serialize};

/// Column names every vessel source must provide, in reporting order.
pub const VESSEL_ID: &str = "VesselID";
pub const CORROSION_RATE: &str = "CorrosionRate";
pub const AGE: &str = "Age";
pub const OPERATING_PRESSURE: &str = "OperatingPressure";

pub const REQUIRED_COLUMNS: [&str; 4] = [VESSEL_ID, CORROSION_RATE, AGE, OPERATING_PRESSURE];

/// A single pressure vessel as read from the inspection register.
///
/// Units follow the register: corrosion rate in mm/year, age in years and
/// operating pressure in the plant's pressure unit. Nothing here is range
/// checked; see [`crate::validation`] for the physical-plausibility pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub vessel_id: String,
    pub corrosion_rate: f64,
    pub age: f64,
    pub operating_pressure: f64,
}

impl VesselRecord {
    pub fn new(vessel_id: &str, corrosion_rate: f64, age: f64, operating_pressure: f64) -> Self {
        Self {
            vessel_id: vessel_id.to_string(),
            corrosion_rate,
            age,
            operating_pressure,
        }
    }
}
