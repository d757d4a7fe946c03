//! Indicator value structs and the normalized reading model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

/// Directional lean derived from an indicator's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivedSignal {
    Buy,
    Sell,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStrength {
    Weak,
    Moderate,
    Strong,
}

impl SignalStrength {
    /// Contribution multiplier used by the confluence scorer.
    pub fn multiplier(&self) -> f64 {
        match self {
            SignalStrength::Weak => 0.4,
            SignalStrength::Moderate => 0.7,
            SignalStrength::Strong => 1.0,
        }
    }
}

/// A single indicator's interpreted output for one evaluation.
///
/// Produced fresh on every evaluation and never mutated; the scorer
/// consumes these rather than the raw indicator structs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub name: String,
    pub category: IndicatorCategory,
    pub value: Decimal,
    pub signal: DerivedSignal,
    pub strength: SignalStrength,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: Decimal,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: Decimal,
    pub signal: Decimal,
    pub histogram: Decimal,
    pub periods: (u32, u32, u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: Decimal,
    pub middle: Decimal,
    pub lower: Decimal,
    pub period: u32,
    pub std_dev: Decimal,
}

impl BollingerBandsIndicator {
    /// Band width relative to the middle band, used by the regime detector.
    pub fn relative_width(&self) -> Decimal {
        if self.middle.is_zero() {
            return Decimal::ZERO;
        }
        (self.upper - self.lower) / self.middle
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: Decimal,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: Decimal,
    pub d: Decimal,
    pub k_period: u32,
    pub d_period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VwapIndicator {
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: Decimal,
    pub plus_di: Decimal,
    pub minus_di: Decimal,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaSpreadIndicator {
    pub fast: Decimal,
    pub slow: Decimal,
    /// (fast - slow) / slow
    pub spread: Decimal,
    pub fast_period: u32,
    pub slow_period: u32,
}
