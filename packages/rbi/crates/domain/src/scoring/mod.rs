pub mod ranking;
pub mod rounding;
pub mod scorer;

pub use ranking::{priority_order, sort_by_priority};
pub use rounding::round_to_cents;
pub use scorer::{categorize, score, RiskScorer};
