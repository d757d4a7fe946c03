//! RSI (Relative Strength Index) indicator

use crate::indicators::error::{require_candles, Result};
use crate::models::candle::Candle;
use crate::models::indicators::RsiIndicator;
use crate::precision::{self, validate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculate RSI with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS)), RS = smoothed gain / smoothed loss.
/// Needs `period + 1` candles (one extra for the first price change).
/// Returns exactly 100 when the smoothed loss is zero.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Result<RsiIndicator> {
    let p = period as usize;
    require_candles(candles.len(), p + 1)?;

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);
    for pair in candles.windows(2) {
        let change = precision::sub(pair[1].close, pair[0].close)?;
        if change > Decimal::ZERO {
            gains.push(change);
            losses.push(Decimal::ZERO);
        } else {
            gains.push(Decimal::ZERO);
            losses.push(change.abs());
        }
    }

    // Wilder smoothing: seed with the plain average of the first window,
    // then avg = (prev * (period - 1) + current) / period for the rest.
    let period_dec = Decimal::from(period);
    let seed_gain: Decimal = gains[..p].iter().copied().sum();
    let seed_loss: Decimal = losses[..p].iter().copied().sum();
    let mut avg_gain = precision::div(seed_gain, period_dec)?;
    let mut avg_loss = precision::div(seed_loss, period_dec)?;

    let carry = Decimal::from(period - 1);
    for i in p..gains.len() {
        avg_gain = precision::div(avg_gain * carry + gains[i], period_dec)?;
        avg_loss = precision::div(avg_loss * carry + losses[i], period_dec)?;
    }

    let value = if avg_loss.is_zero() {
        dec!(100)
    } else {
        let rs = precision::div(avg_gain, avg_loss)?;
        let hundred = dec!(100);
        precision::sub(hundred, precision::div(hundred, Decimal::ONE + rs)?)?
    };

    Ok(RsiIndicator {
        value: validate(value, Some((Decimal::ZERO, dec!(100))))?,
        period,
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Result<RsiIndicator> {
    calculate_rsi(candles, 14)
}
