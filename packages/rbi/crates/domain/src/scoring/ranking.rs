use crate::entities::dataset::ScoredVessel;
use std::cmp::Ordering;

/// Descending numeric order with NaN after every number.
///
/// Equal scores (including `0.0` and `-0.0`) compare `Equal`, so a stable
/// sort keeps their input order.
pub fn priority_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort, highest risk first.
pub fn sort_by_priority(vessels: &mut [ScoredVessel]) {
    vessels.sort_by(|a, b| priority_order(a.assessment.risk_score, b.assessment.risk_score));
}
