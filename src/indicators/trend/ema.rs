//! EMA (Exponential Moving Average) indicator

use crate::indicators::error::{require_candles, Result};
use crate::models::candle::Candle;
use crate::models::indicators::EmaSpreadIndicator;
use crate::precision::{self, stats};
use rust_decimal::Decimal;

/// Calculate the EMA of closes for a specific period.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Result<Decimal> {
    require_candles(candles.len(), period as usize)?;
    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
    Ok(stats::ema(&closes, period as usize)?)
}

/// Calculate a fast/slow EMA pair and their relative spread.
///
/// The spread ((fast - slow) / slow) is the moving-average distance the
/// regime classifier reads; its sign is the trend lean.
pub fn calculate_ema_spread(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
) -> Result<EmaSpreadIndicator> {
    require_candles(candles.len(), slow_period as usize)?;
    let fast = calculate_ema(candles, fast_period)?;
    let slow = calculate_ema(candles, slow_period)?;
    let spread = precision::div(precision::sub(fast, slow)?, slow)?;

    Ok(EmaSpreadIndicator {
        fast,
        slow,
        spread,
        fast_period,
        slow_period,
    })
}

/// Calculate the EMA spread with default periods (20, 50)
pub fn calculate_ema_spread_default(candles: &[Candle]) -> Result<EmaSpreadIndicator> {
    calculate_ema_spread(candles, 20, 50)
}
