use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Three-tier triage class derived from the rounded risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    High,
    Medium,
    Low,
}

impl RiskCategory {
    /// Reporting order: most urgent first.
    pub const ALL: [RiskCategory; 3] = [RiskCategory::High, RiskCategory::Medium, RiskCategory::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::High => "HIGH",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::Low => "LOW",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown risk category '{0}' (expected HIGH, MEDIUM or LOW)")]
pub struct UnknownCategory(pub String);

impl FromStr for RiskCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(RiskCategory::High),
            "MEDIUM" => Ok(RiskCategory::Medium),
            "LOW" => Ok(RiskCategory::Low),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Result of scoring one vessel. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Rounded to two decimals.
    pub risk_score: f64,
    pub risk_category: RiskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("high".parse::<RiskCategory>().unwrap(), RiskCategory::High);
        assert_eq!(" Medium ".parse::<RiskCategory>().unwrap(), RiskCategory::Medium);
        assert_eq!("LOW".parse::<RiskCategory>().unwrap(), RiskCategory::Low);
        assert!("SEVERE".parse::<RiskCategory>().is_err());
    }

    #[test]
    fn test_display_matches_reporting_order() {
        let names: Vec<String> = RiskCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["HIGH", "MEDIUM", "LOW"]);
    }
}
