use chrono::{DateTime, Utc};
use domain::{RiskCategory, ScoredDataset, ScoredVessel, ValidationResult};
use serde::Serialize;
use std::fmt;

/// Display band for scores and averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Critical,
    Elevated,
    Nominal,
}

impl ScoreBand {
    /// Fleet average: strictly above 10 is critical, strictly above 5 elevated.
    pub fn for_average(average: f64) -> Self {
        if average > 10.0 {
            ScoreBand::Critical
        } else if average > 5.0 {
            ScoreBand::Elevated
        } else {
            ScoreBand::Nominal
        }
    }

    /// Table cell: 10 and above is critical, 5 and above elevated.
    pub fn for_score(score: f64) -> Self {
        if score >= 10.0 {
            ScoreBand::Critical
        } else if score >= 5.0 {
            ScoreBand::Elevated
        } else {
            ScoreBand::Nominal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendedAction {
    #[serde(rename = "INSPECT WITHIN 7 DAYS - CRITICAL")]
    InspectWithin7Days,
    #[serde(rename = "INSPECT WITHIN 30 DAYS")]
    InspectWithin30Days,
    #[serde(rename = "ROUTINE INSPECTION")]
    RoutineInspection,
}

impl RecommendedAction {
    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::High => RecommendedAction::InspectWithin7Days,
            RiskCategory::Medium => RecommendedAction::InspectWithin30Days,
            RiskCategory::Low => RecommendedAction::RoutineInspection,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RecommendedAction::InspectWithin7Days => "INSPECT WITHIN 7 DAYS - CRITICAL",
            RecommendedAction::InspectWithin30Days => "INSPECT WITHIN 30 DAYS",
            RecommendedAction::RoutineInspection => "ROUTINE INSPECTION",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub total_assets: usize,
    pub high_risk_assets: usize,
    pub average_score: f64,
    pub average_band: ScoreBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: RiskCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityItem {
    pub vessel_id: String,
    pub risk_score: f64,
    pub risk_category: RiskCategory,
    pub action: RecommendedAction,
}

impl From<&ScoredVessel> for PriorityItem {
    fn from(vessel: &ScoredVessel) -> Self {
        Self {
            vessel_id: vessel.record.vessel_id.clone(),
            risk_score: vessel.assessment.risk_score,
            risk_category: vessel.assessment.risk_category,
            action: RecommendedAction::for_category(vessel.assessment.risk_category),
        }
    }
}

/// Everything one report run shows: built once, rendered by the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ExecutiveSummary,
    /// Always HIGH, MEDIUM, LOW, zero-filled.
    pub distribution: Vec<CategoryCount>,
    pub priority: Vec<PriorityItem>,
    pub vessels: ScoredDataset,
    pub validation: ValidationResult,
}

impl InspectionReport {
    /// `scored` must already be in priority order.
    pub fn build(
        scored: ScoredDataset,
        validation: ValidationResult,
        priority_limit: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at,
            summary: summarize(&scored.vessels),
            distribution: distribution(&scored.vessels),
            priority: priority_list(&scored.vessels, priority_limit),
            vessels: scored,
            validation,
        }
    }
}

pub fn summarize(vessels: &[ScoredVessel]) -> ExecutiveSummary {
    let total_assets = vessels.len();
    let high_risk_assets = count(vessels, RiskCategory::High);
    let average_score = if total_assets == 0 {
        0.0
    } else {
        vessels.iter().map(|v| v.assessment.risk_score).sum::<f64>() / total_assets as f64
    };

    ExecutiveSummary {
        total_assets,
        high_risk_assets,
        average_score,
        average_band: ScoreBand::for_average(average_score),
    }
}

pub fn distribution(vessels: &[ScoredVessel]) -> Vec<CategoryCount> {
    RiskCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: count(vessels, category),
        })
        .collect()
}

/// Up to `limit` HIGH vessels; when there are none, the top `limit` overall.
pub fn priority_list(vessels: &[ScoredVessel], limit: usize) -> Vec<PriorityItem> {
    let any_high = vessels
        .iter()
        .any(|v| v.assessment.risk_category == RiskCategory::High);

    vessels
        .iter()
        .filter(|v| !any_high || v.assessment.risk_category == RiskCategory::High)
        .take(limit)
        .map(PriorityItem::from)
        .collect()
}

fn count(vessels: &[ScoredVessel], category: RiskCategory) -> usize {
    vessels
        .iter()
        .filter(|v| v.assessment.risk_category == category)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::scoring::score;
    use domain::VesselRecord;
    use pretty_assertions::assert_eq;

    fn vessel(id: &str, c: f64, a: f64, p: f64) -> ScoredVessel {
        ScoredVessel {
            record: VesselRecord::new(id, c, a, p),
            assessment: score(c, a, p),
            cells: Vec::new(),
        }
    }

    fn ids(items: &[PriorityItem]) -> Vec<&str> {
        items.iter().map(|i| i.vessel_id.as_str()).collect()
    }

    #[test]
    fn test_summary_counts_and_average() {
        let vessels = vec![
            vessel("H", 3.0, 20.0, 100.0),
            vessel("M", 3.0, 10.0, 100.0),
            vessel("L", 0.5, 5.0, 50.0),
        ];
        let summary = summarize(&vessels);

        assert_eq!(summary.total_assets, 3);
        assert_eq!(summary.high_risk_assets, 1);
        assert!((summary.average_score - 7.166_666).abs() < 1e-5);
        assert_eq!(summary.average_band, ScoreBand::Elevated);
    }

    #[test]
    fn test_empty_summary_averages_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.average_band, ScoreBand::Nominal);
    }

    #[test]
    fn test_distribution_is_zero_filled_in_fixed_order() {
        let counts = distribution(&[vessel("L", 0.5, 5.0, 50.0)]);
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: RiskCategory::High, count: 0 },
                CategoryCount { category: RiskCategory::Medium, count: 0 },
                CategoryCount { category: RiskCategory::Low, count: 1 },
            ]
        );
    }

    #[test]
    fn test_priority_list_keeps_only_high_when_present() {
        let vessels = vec![
            vessel("H1", 3.0, 20.0, 100.0),
            vessel("M1", 3.0, 10.0, 100.0),
            vessel("H2", 4.0, 0.0, 0.0),
        ];
        let items = priority_list(&vessels, 5);

        assert_eq!(ids(&items), vec!["H1", "H2"]);
        assert_eq!(items[0].action.to_string(), "INSPECT WITHIN 7 DAYS - CRITICAL");
    }

    #[test]
    fn test_priority_list_falls_back_to_top_overall() {
        let vessels: Vec<ScoredVessel> = (0..7)
            .map(|i| vessel(&format!("L{}", i), 0.1, 1.0, 10.0))
            .collect();
        let items = priority_list(&vessels, 5);

        assert_eq!(ids(&items), vec!["L0", "L1", "L2", "L3", "L4"]);
        assert_eq!(items[0].action, RecommendedAction::RoutineInspection);
    }

    #[test]
    fn test_bands_use_different_edges_for_cells_and_average() {
        assert_eq!(ScoreBand::for_score(10.0), ScoreBand::Critical);
        assert_eq!(ScoreBand::for_average(10.0), ScoreBand::Elevated);
        assert_eq!(ScoreBand::for_score(5.0), ScoreBand::Elevated);
        assert_eq!(ScoreBand::for_average(5.0), ScoreBand::Nominal);
    }
}
