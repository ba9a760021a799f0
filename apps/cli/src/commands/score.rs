use crate::ui::{self, Icon, Theme};
use anyhow::Result;
use clap::Parser;
use rbi::domain::{RiskScorer, ValidationResult, VesselRecord, VesselValidator};

/// Score a single asset from its three measurements.
#[derive(Parser, Debug)]
pub struct ScoreCommand {
    /// Wall-loss rate (mm/year)
    #[arg(short, long, allow_negative_numbers = true)]
    pub corrosion_rate: f64,

    /// Years in service
    #[arg(short, long, allow_negative_numbers = true)]
    pub age: f64,

    /// Operating pressure
    #[arg(short, long, allow_negative_numbers = true)]
    pub pressure: f64,

    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScoreCommand {
    pub fn execute(self) -> Result<()> {
        let record = VesselRecord::new("-", self.corrosion_rate, self.age, self.pressure);

        let mut validation = ValidationResult::new();
        VesselValidator::validate_record(&record, 1, &mut validation);
        for issue in validation.warnings() {
            ui::warn(&issue.message);
        }

        let assessment = RiskScorer::new().assess(&record);
        tracing::debug!(?assessment, "scored single asset");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            return Ok(());
        }

        println!(
            "{} Risk score: {}  Category: {}",
            Icon::Category(assessment.risk_category),
            Theme::bold(format!("{:.2}", assessment.risk_score)),
            Theme::category(assessment.risk_category, assessment.risk_category)
        );
        Ok(())
    }
}
