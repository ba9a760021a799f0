use domain::entities::assessment::RiskCategory;
use domain::scoring::{score, sort_by_priority, RiskScorer};
use domain::{ScoredVessel, VesselRecord};

#[test]
fn test_scoring_is_deterministic() {
    let inputs = [
        (3.0, 10.0, 100.0),
        (0.37, 22.5, 412.0),
        (-1.0, 16.0, 0.0),
        (1e9, 1e9, 1e9),
        (0.1, 15.0, 0.3),
    ];

    for (c, a, p) in inputs {
        let first = score(c, a, p);
        let second = score(c, a, p);
        assert_eq!(first.risk_score.to_bits(), second.risk_score.to_bits());
        assert_eq!(first.risk_category, second.risk_category);
    }
}

#[test]
fn test_category_boundaries_through_the_formula() {
    // Pressure alone: p * 0.01 lands exactly on the thresholds after rounding.
    assert_eq!(score(0.0, 0.0, 750.0).risk_score, 7.5);
    assert_eq!(score(0.0, 0.0, 750.0).risk_category, RiskCategory::Medium);
    assert_eq!(score(0.0, 0.0, 751.0).risk_score, 7.51);
    assert_eq!(score(0.0, 0.0, 751.0).risk_category, RiskCategory::High);
    assert_eq!(score(0.0, 0.0, 400.0).risk_score, 4.0);
    assert_eq!(score(0.0, 0.0, 400.0).risk_category, RiskCategory::Low);
    assert_eq!(score(0.0, 0.0, 401.0).risk_score, 4.01);
    assert_eq!(score(0.0, 0.0, 401.0).risk_category, RiskCategory::Medium);
}

#[test]
fn test_old_vessel_with_light_corrosion_ranks_high() {
    // 0.2 * 2 + 0.3 * 25 + 40 * 0.01 = 0.4 + 7.5 + 0.4
    let a = score(0.2, 25.0, 40.0);
    assert_eq!(a.risk_score, 8.3);
    assert_eq!(a.risk_category, RiskCategory::High);
}

#[test]
fn test_fleet_is_ranked_highest_first() {
    let scorer = RiskScorer::new();
    let fleet = vec![
        VesselRecord::new("V-LOW", 0.5, 5.0, 50.0),
        VesselRecord::new("V-HIGH", 3.0, 20.0, 100.0),
        VesselRecord::new("V-MED", 3.0, 10.0, 100.0),
    ];

    let mut scored: Vec<ScoredVessel> = fleet
        .into_iter()
        .map(|record| ScoredVessel {
            assessment: scorer.assess(&record),
            record,
            cells: Vec::new(),
        })
        .collect();
    sort_by_priority(&mut scored);

    let order: Vec<(&str, f64)> = scored
        .iter()
        .map(|v| (v.record.vessel_id.as_str(), v.assessment.risk_score))
        .collect();
    assert_eq!(order, vec![("V-HIGH", 13.0), ("V-MED", 7.0), ("V-LOW", 1.5)]);
}
