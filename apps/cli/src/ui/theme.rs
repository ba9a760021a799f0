use comfy_table::Color;
use owo_colors::OwoColorize;
use rbi::application::ScoreBand;
use rbi::domain::RiskCategory;
use std::fmt;

/// The central theme definition for the RBI CLI.
/// Red, orange and green carry the urgency of each risk tier.
pub struct Theme;

impl Theme {
    /// Primary color (Cyan) - headings, structure.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.cyan().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", text.bold())
    }

    /// Success Color (Green)
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    /// Warning Color (Orange/Yellow)
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    /// Error Color (Red)
    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Muted/Dimmed Color - metadata, timestamps.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }

    pub fn category(category: RiskCategory, text: impl fmt::Display) -> String {
        match category {
            RiskCategory::High => Self::error(text),
            RiskCategory::Medium => Self::warning(text),
            RiskCategory::Low => Self::success(text),
        }
    }

    /// Cell color for comfy-table, which styles cells itself.
    pub fn category_color(category: RiskCategory) -> Color {
        match category {
            RiskCategory::High => Color::Red,
            RiskCategory::Medium => Color::Rgb { r: 255, g: 140, b: 0 },
            RiskCategory::Low => Color::Green,
        }
    }

    pub fn band_color(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Critical => Color::Red,
            ScoreBand::Elevated => Color::Rgb { r: 210, g: 105, b: 30 },
            ScoreBand::Nominal => Color::DarkGreen,
        }
    }
}

/// Standardized icons.
/// Usage: `println!("{} Exported", Icon::Download)`
pub enum Icon {
    Shield,
    Check,
    Cross,
    Warning,
    Info,
    Alert,
    Chart,
    Target,
    Download,
    Category(RiskCategory),
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::Check => "✔",
            Icon::Cross => "✖",
            Icon::Warning => "⚠️ ",
            Icon::Info => "ℹ️ ",
            Icon::Alert => "🚨",
            Icon::Chart => "📊",
            Icon::Target => "🎯",
            Icon::Download => "📥",
            Icon::Category(RiskCategory::High) => "🔴",
            Icon::Category(RiskCategory::Medium) => "🟠",
            Icon::Category(RiskCategory::Low) => "🟢",
        };
        write!(f, "{}", icon)
    }
}
