// [libs/domain/models/src/score.rs]
use crate::enums::{IndicatorKind, RiskBand};
use serde::{Deserialize, Serialize};

/// A single active indicator contributing to the cumulative score (§4.2).
/// Inactive indicators never appear here — only active ones are carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreIndicator {
    pub kind: IndicatorKind,
    pub weight: u32,
    pub description: String,
    pub evidence: String,
}

/// The cumulative-score result: `total = min(100, sum of active weights)`,
/// `band` the closed-interval lookup over `total` (§4.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub indicators: Vec<ScoreIndicator>,
    pub band: RiskBand,
}

impl ScoreBreakdown {
    pub fn from_indicators(indicators: Vec<ScoreIndicator>) -> Self {
        let raw_total: u32 = indicators.iter().map(|i| i.weight).sum();
        let total = raw_total.min(100);
        let band = RiskBand::from_total(total);
        Self { total, indicators, band }
    }
}
