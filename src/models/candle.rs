//! OHLCV candle model and series checks.

use crate::models::signal::Timeframe;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLCV bar. Immutable once produced by the data feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Candle {
    pub fn new(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Typical price used by volume-weighted measures.
    pub fn typical_price(&self) -> Decimal {
        (self.high + self.low + self.close) / Decimal::from(3)
    }
}

/// Result of validating a candle series against its timeframe.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesCheck {
    /// Timestamps strictly increasing
    pub ordered: bool,
    /// Count of spacing gaps wider than one candle duration
    pub gaps: usize,
}

/// Check ordering and flag gaps in a candle series.
///
/// Gaps are allowed (thin markets drop bars) but callers must know about
/// them; an out-of-order series is a feed defect.
pub fn check_series(candles: &[Candle], timeframe: Timeframe) -> SeriesCheck {
    let expected = timeframe.candle_duration();
    let mut ordered = true;
    let mut gaps = 0;

    for pair in candles.windows(2) {
        let delta = pair[1].timestamp - pair[0].timestamp;
        if delta <= chrono::Duration::zero() {
            ordered = false;
        } else if delta > expected {
            gaps += 1;
        }
    }

    SeriesCheck { ordered, gaps }
}
