//! ATR (Average True Range) indicator

use crate::indicators::error::{require_candles, Result};
use crate::models::candle::Candle;
use crate::models::indicators::AtrIndicator;
use crate::precision::stats;

/// Calculate ATR over `period` true ranges.
///
/// True range = max(high - low, |high - prevClose|, |low - prevClose|).
/// Needs `period + 1` candles for the first previous close.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Result<AtrIndicator> {
    let p = period as usize;
    require_candles(candles.len(), p + 1)?;

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    for pair in candles.windows(2) {
        tr_values.push(stats::true_range(pair[1].high, pair[1].low, pair[0].close));
    }

    Ok(AtrIndicator {
        value: stats::sma(&tr_values, p)?,
        period,
    })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Result<AtrIndicator> {
    calculate_atr(candles, 14)
}
