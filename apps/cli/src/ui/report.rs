use crate::ui::{Icon, Theme};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use rbi::application::report::{CategoryCount, ExecutiveSummary};
use rbi::application::{InspectionReport, PriorityItem, ScoreBand};
use rbi::domain::entities::dataset::{RISK_CATEGORY, RISK_SCORE};
use rbi::domain::{RiskCategory, ScoredDataset};

const BAR_WIDTH: usize = 32;

/// Renders the full terminal report.
pub fn render(report: &InspectionReport) -> String {
    let mut sections = vec![
        banner(),
        legend(),
        heading(Icon::Chart, "Executive Summary"),
        summary_table(&report.summary).to_string(),
        Theme::muted("Higher scores indicate higher inspection priority."),
        heading(Icon::Chart, "Inspection Risk Distribution"),
        distribution_chart(&report.distribution),
        heading(Icon::Target, "Asset Prioritization Table"),
        vessel_table(&report.vessels).to_string(),
        Theme::warning("IMMEDIATE INSPECTION REQUIRED for all HIGH RISK assets"),
        heading(Icon::Alert, "Critical Inspection Priority List"),
    ];

    if report.summary.high_risk_assets > 0 {
        sections.push(Theme::error(format!(
            "ALERT: {} HIGH-RISK VESSELS IDENTIFIED. Immediate inspection required.",
            report.summary.high_risk_assets
        )));
    }

    sections.extend([
        priority_table(&report.priority).to_string(),
        Theme::muted("Supports inspection planning only and does not override statutory inspection requirements."),
        format!("\n{}", disclaimer()),
        Theme::muted(format!(
            "Deterministic RBI logic • Generated {}",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )),
    ]);

    sections.join("\n")
}

fn heading(icon: Icon, title: &str) -> String {
    format!("\n{} {}", icon, Theme::primary(title))
}

fn banner() -> String {
    format!(
        "{}\n{}",
        Theme::error(format!(
            "{}SAFETY-CRITICAL ENGINEERING TOOL: ENGINEER VERIFICATION MANDATORY",
            Icon::Shield
        )),
        Theme::muted("Inspection-prioritization support only. All decisions must be reviewed by a qualified engineer.")
    )
}

/// What each category asks of the inspection planner.
fn legend_text(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::High => "IMMEDIATE ATTENTION REQUIRED",
        RiskCategory::Medium => "SCHEDULE INSPECTION",
        RiskCategory::Low => "ROUTINE MONITORING",
    }
}

fn legend() -> String {
    let lines: Vec<String> = RiskCategory::ALL
        .iter()
        .map(|&category| {
            format!(
                "{} {}",
                Icon::Category(category),
                Theme::category(category, format!("{}: {}", category, legend_text(category)))
            )
        })
        .collect();
    format!("\n{} {}\n{}", Icon::Info, Theme::primary("Risk Levels"), lines.join("\n"))
}

fn disclaimer() -> String {
    format!(
        "{}\n{}",
        Theme::warning(format!("{}DECISION SUPPORT ONLY", Icon::Warning)),
        Theme::muted("Inspection scheduling and certification remain the responsibility of qualified personnel. All HIGH-risk assets require engineer verification.")
    )
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn summary_table(summary: &ExecutiveSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total Assets", "High-Risk Assets", "Average Risk Score"]);

    let high = Cell::new(summary.high_risk_assets).set_alignment(CellAlignment::Center);
    let high = if summary.high_risk_assets > 0 {
        high.fg(Theme::category_color(RiskCategory::High))
            .add_attribute(Attribute::Bold)
    } else {
        high
    };

    table.add_row(vec![
        Cell::new(summary.total_assets).set_alignment(CellAlignment::Center),
        high,
        Cell::new(format!("{:.2}", summary.average_score))
            .set_alignment(CellAlignment::Center)
            .fg(Theme::band_color(summary.average_band))
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// One horizontal bar per category, scaled to the largest count.
pub fn distribution_chart(counts: &[CategoryCount]) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

    counts
        .iter()
        .map(|entry| {
            let width = if max == 0 {
                0
            } else {
                (entry.count * BAR_WIDTH).div_ceil(max)
            };
            format!(
                "{} {:<6} {} {}",
                Icon::Category(entry.category),
                entry.category,
                Theme::category(entry.category, "█".repeat(width)),
                entry.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn vessel_table(dataset: &ScoredDataset) -> Table {
    let columns = dataset.export_columns();
    let mut table = new_table();
    table.set_header(columns.clone());

    for vessel in &dataset.vessels {
        let row = dataset.export_row(vessel);
        let cells: Vec<Cell> = columns
            .iter()
            .zip(row)
            .map(|(column, value)| {
                if column.eq_ignore_ascii_case(RISK_SCORE) {
                    Cell::new(value)
                        .set_alignment(CellAlignment::Right)
                        .fg(Theme::band_color(ScoreBand::for_score(vessel.assessment.risk_score)))
                        .add_attribute(Attribute::Bold)
                } else if column.eq_ignore_ascii_case(RISK_CATEGORY) {
                    category_cell(vessel.assessment.risk_category)
                } else {
                    Cell::new(value)
                }
            })
            .collect();
        table.add_row(cells);
    }
    table
}

pub fn priority_table(items: &[PriorityItem]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["VesselID", "RiskScore", "RiskCategory", "Recommended Action"]);

    for item in items {
        table.add_row(vec![
            Cell::new(&item.vessel_id),
            Cell::new(format!("{:.2}", item.risk_score)).set_alignment(CellAlignment::Right),
            category_cell(item.risk_category),
            Cell::new(item.action.to_string())
                .fg(Theme::category_color(item.risk_category))
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn category_cell(category: RiskCategory) -> Cell {
    Cell::new(format!("{} {}", Icon::Category(category), category))
        .fg(Theme::category_color(category))
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rbi::application::score_dataset;
    use rbi::domain::{RiskScorer, ValidationResult, VesselDataset, VesselRecord};

    fn sample_report() -> InspectionReport {
        let dataset = VesselDataset::from_records(vec![
            VesselRecord::new("V-101", 3.0, 10.0, 100.0),
            VesselRecord::new("V-102", 3.0, 20.0, 100.0),
            VesselRecord::new("V-103", 0.5, 5.0, 50.0),
        ]);
        InspectionReport::build(
            score_dataset(dataset, &RiskScorer::new()),
            ValidationResult::new(),
            5,
            Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_render_contains_every_section() {
        let text = render(&sample_report());

        for expected in [
            "Executive Summary",
            "Inspection Risk Distribution",
            "Asset Prioritization Table",
            "Critical Inspection Priority List",
            "HIGH: IMMEDIATE ATTENTION REQUIRED",
            "MEDIUM: SCHEDULE INSPECTION",
            "LOW: ROUTINE MONITORING",
            "INSPECT WITHIN 7 DAYS - CRITICAL",
            "V-102",
            "13.00",
            "2026-10-16 08:30 UTC",
        ] {
            assert!(text.contains(expected), "missing '{}' in report", expected);
        }
    }

    #[test]
    fn test_legend_precedes_summary() {
        let text = render(&sample_report());
        let legend = text.find("Risk Levels").unwrap();
        let summary = text.find("Executive Summary").unwrap();
        assert!(legend < summary);
    }

    #[test]
    fn test_vessel_table_lists_rows_in_priority_order() {
        let report = sample_report();
        let text = vessel_table(&report.vessels).to_string();

        let first = text.find("V-102").unwrap();
        let second = text.find("V-101").unwrap();
        let third = text.find("V-103").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_distribution_bars_scale_to_largest_count() {
        let counts = vec![
            CategoryCount { category: RiskCategory::High, count: 4 },
            CategoryCount { category: RiskCategory::Medium, count: 2 },
            CategoryCount { category: RiskCategory::Low, count: 0 },
        ];
        let chart = distribution_chart(&counts);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
        assert_eq!(lines[2].matches('█').count(), 0);
        assert!(lines[2].ends_with(" 0"));
    }
}
