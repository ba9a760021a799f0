use super::rounding::round_to_cents;
use crate::entities::assessment::{RiskAssessment, RiskCategory};
use crate::entities::vessel::VesselRecord;

/// Weight applied to corrosion rate (mm/year).
pub const CORROSION_WEIGHT: f64 = 2.0;
/// Per-year weight once a vessel is past [`AGE_THRESHOLD`].
pub const AGE_WEIGHT: f64 = 0.3;
/// Age in years above which the age penalty applies (strictly greater).
pub const AGE_THRESHOLD: f64 = 15.0;
/// Weight applied to operating pressure.
pub const PRESSURE_WEIGHT: f64 = 0.01;

/// Rounded scores strictly above this are HIGH.
pub const HIGH_THRESHOLD: f64 = 7.5;
/// Rounded scores strictly above this (and not HIGH) are MEDIUM.
pub const MEDIUM_THRESHOLD: f64 = 4.0;

/// Deterministic RBI scorer.
///
/// ```text
/// score = corrosion_rate * 2.0
///       + (age > 15 ? 0.3 * age : 0)
///       + pressure * 0.01
/// ```
///
/// The sum is rounded to two decimals (see [`round_to_cents`]) and the
/// category is read off the rounded value. The function is total: negative
/// or non-finite inputs yield a defined, physically meaningless result and
/// never an error. NaN scores land in LOW because every comparison fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, corrosion_rate: f64, age: f64, pressure: f64) -> RiskAssessment {
        score(corrosion_rate, age, pressure)
    }

    pub fn assess(&self, record: &VesselRecord) -> RiskAssessment {
        score(record.corrosion_rate, record.age, record.operating_pressure)
    }
}

pub fn score(corrosion_rate: f64, age: f64, pressure: f64) -> RiskAssessment {
    let age_penalty = if age > AGE_THRESHOLD { AGE_WEIGHT * age } else { 0.0 };
    let raw = corrosion_rate * CORROSION_WEIGHT + age_penalty + pressure * PRESSURE_WEIGHT;
    let risk_score = round_to_cents(raw);

    RiskAssessment {
        risk_score,
        risk_category: categorize(risk_score),
    }
}

/// Boundary values belong to the lower category.
pub fn categorize(risk_score: f64) -> RiskCategory {
    if risk_score > HIGH_THRESHOLD {
        RiskCategory::High
    } else if risk_score > MEDIUM_THRESHOLD {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenarios() {
        let a = score(3.0, 10.0, 100.0);
        assert_eq!(a.risk_score, 7.0);
        assert_eq!(a.risk_category, RiskCategory::Medium);

        let b = score(3.0, 20.0, 100.0);
        assert_eq!(b.risk_score, 13.0);
        assert_eq!(b.risk_category, RiskCategory::High);

        let c = score(0.5, 5.0, 50.0);
        assert_eq!(c.risk_score, 1.5);
        assert_eq!(c.risk_category, RiskCategory::Low);
    }

    #[test]
    fn test_age_penalty_is_strict() {
        assert_eq!(score(0.0, 15.0, 0.0).risk_score, 0.0);
        assert_eq!(score(0.0, 15.01, 0.0).risk_score, 4.5);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(categorize(7.5), RiskCategory::Medium);
        assert_eq!(categorize(7.51), RiskCategory::High);
        assert_eq!(categorize(4.0), RiskCategory::Low);
        assert_eq!(categorize(4.01), RiskCategory::Medium);
    }

    #[test]
    fn test_category_is_read_from_rounded_score() {
        // 750.1 * 0.01 = 7.501, which rounds down onto the MEDIUM boundary.
        let a = score(0.0, 0.0, 750.1);
        assert_eq!(a.risk_score, 7.5);
        assert_eq!(a.risk_category, RiskCategory::Medium);
    }

    #[test]
    fn test_nan_input_is_low() {
        let a = score(f64::NAN, 1.0, 1.0);
        assert!(a.risk_score.is_nan());
        assert_eq!(a.risk_category, RiskCategory::Low);
    }

    #[test]
    fn test_assess_reads_record_fields() {
        let record = VesselRecord::new("V-101", 3.0, 20.0, 100.0);
        assert_eq!(RiskScorer::new().assess(&record), score(3.0, 20.0, 100.0));
    }
}
