//! Stochastic oscillator (%K / %D)

use crate::indicators::error::{require_candles, IndicatorError, Result};
use crate::models::candle::Candle;
use crate::models::indicators::StochasticIndicator;
use crate::precision::{self, stats, validate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculate the stochastic oscillator.
///
/// %K = (close - lowestLow) / (highestHigh - lowestLow) * 100 over
/// `k_period`; %D = SMA of the last `d_period` %K values. Needs
/// `k_period + d_period - 1` candles. A flat window (high == low) reads
/// as 50 rather than failing.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
) -> Result<StochasticIndicator> {
    if k_period == 0 || d_period == 0 {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            got: 0,
        });
    }
    let kp = k_period as usize;
    let dp = d_period as usize;
    require_candles(candles.len(), kp + dp - 1)?;

    let mut k_values = Vec::with_capacity(dp);
    for offset in (0..dp).rev() {
        let end = candles.len() - offset;
        let window = &candles[end - kp..end];
        k_values.push(percent_k(window)?);
    }

    let k = k_values[dp - 1];
    let d = stats::sma(&k_values, dp)?;

    let bounds = Some((Decimal::ZERO, dec!(100)));
    Ok(StochasticIndicator {
        k: validate(k, bounds)?,
        d: validate(d, bounds)?,
        k_period,
        d_period,
    })
}

/// Calculate the stochastic with default periods (14, 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Result<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}

fn percent_k(window: &[Candle]) -> Result<Decimal> {
    let close = window[window.len() - 1].close;
    let mut lowest = window[0].low;
    let mut highest = window[0].high;
    for candle in &window[1..] {
        lowest = lowest.min(candle.low);
        highest = highest.max(candle.high);
    }

    let range = precision::sub(highest, lowest)?;
    if range.is_zero() {
        return Ok(dec!(50));
    }
    Ok(precision::mul(
        precision::div(precision::sub(close, lowest)?, range)?,
        dec!(100),
    )?)
}
