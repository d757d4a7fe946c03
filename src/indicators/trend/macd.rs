//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::error::{require_candles, IndicatorError, Result};
use crate::models::candle::Candle;
use crate::models::indicators::MacdIndicator;
use crate::precision::{self, stats};
use rust_decimal::Decimal;

/// Calculate MACD line, signal line and histogram.
///
/// MACD line = EMA(fast) - EMA(slow) per bar; signal line = EMA of the
/// MACD line over `signal_period`; histogram = line - signal. Needs
/// `slow_period + signal_period - 1` candles so the signal line has a
/// full window of MACD values to smooth.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Result<MacdIndicator> {
    let fast = fast_period as usize;
    let slow = slow_period as usize;
    let signal = signal_period as usize;
    if fast >= slow {
        return Err(IndicatorError::InvariantViolation(format!(
            "fast period {} must be shorter than slow period {}",
            fast_period, slow_period
        )));
    }
    require_candles(candles.len(), slow + signal - 1)?;

    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
    let fast_series = stats::ema_series(&closes, fast)?;
    let slow_series = stats::ema_series(&closes, slow)?;

    // Both series end at the latest bar; align their tails. The MACD line
    // exists from the first bar the slow EMA exists for.
    let mut macd_series = Vec::with_capacity(slow_series.len());
    let tail_offset = fast_series.len() - slow_series.len();
    for (i, slow_value) in slow_series.iter().enumerate() {
        let fast_value = fast_series[i + tail_offset];
        macd_series.push(precision::sub(fast_value, *slow_value)?);
    }

    let signal_line = stats::ema(&macd_series, signal)?;
    let macd_line = macd_series[macd_series.len() - 1];
    let histogram = precision::sub(macd_line, signal_line)?;

    Ok(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram,
        periods: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Result<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
