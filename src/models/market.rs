//! Chart pattern and market regime models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// A detected chart setup from the fixed pattern catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    pub name: String,
    pub direction: PatternDirection,
    /// Reliability score in [0, 100]
    pub reliability: Decimal,
    pub price_target: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketRegime {
    TrendUp,
    TrendDown,
    Range,
    HighVolatility,
    LowVolatility,
}

impl MarketRegime {
    pub fn is_trending(&self) -> bool {
        matches!(self, MarketRegime::TrendUp | MarketRegime::TrendDown)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeClassification {
    pub regime: MarketRegime,
    /// Confidence in [0, 100]
    pub confidence: Decimal,
}
