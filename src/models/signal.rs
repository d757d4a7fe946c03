//! Signal output model and the timeframe axis.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
    Long,
    Short,
    Neutral,
}

impl SignalDirection {
    /// +1 for Long, -1 for Short, 0 for Neutral.
    pub fn sign(&self) -> i32 {
        match self {
            SignalDirection::Long => 1,
            SignalDirection::Short => -1,
            SignalDirection::Neutral => 0,
        }
    }
}

/// Evaluation timeframes, ordered shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    M5,
    M15,
    H1,
    H4,
    D1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
        }
    }

    pub fn candle_duration(&self) -> Duration {
        match self {
            Timeframe::M5 => Duration::minutes(5),
            Timeframe::M15 => Duration::minutes(15),
            Timeframe::H1 => Duration::hours(1),
            Timeframe::H4 => Duration::hours(4),
            Timeframe::D1 => Duration::days(1),
        }
    }

    /// Adjacent timeframes consulted for multi-timeframe confluence.
    pub fn adjacent(&self) -> Vec<Timeframe> {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        let mut out = Vec::with_capacity(2);
        if idx > 0 {
            out.push(Self::ALL[idx - 1]);
        }
        if idx + 1 < Self::ALL.len() {
            out.push(Self::ALL[idx + 1]);
        }
        out
    }

    /// Number of candles in a year, the Sharpe annualization base.
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Timeframe::M5 => 105_120.0,
            Timeframe::M15 => 35_040.0,
            Timeframe::H1 => 8_760.0,
            Timeframe::H4 => 2_190.0,
            Timeframe::D1 => 365.0,
        }
    }
}

/// One contributing factor in a signal's score, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// An immutable signal snapshot for one (symbol, timeframe) pair.
///
/// A new Signal replaces the previous one wholesale; nothing downstream
/// ever mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub direction: SignalDirection,
    /// Clamped to [25, 95] for directional signals, 50 when degraded
    pub confidence: Decimal,
    pub entry_price: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub risk_reward_ratio: Decimal,
    pub reasons: Vec<SignalReason>,
    pub timestamp: DateTime<Utc>,
}
