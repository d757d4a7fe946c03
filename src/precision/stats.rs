//! Statistical primitives over decimal slices.

use super::{div, MathError, Result};
use rust_decimal::{Decimal, MathematicalOps};

/// Simple moving average over the trailing `period` values.
pub fn sma(values: &[Decimal], period: usize) -> Result<Decimal> {
    window(values, period)?;
    let sum: Decimal = values[values.len() - period..].iter().copied().sum();
    div(sum, Decimal::from(period))
}

/// Exponential moving average over the whole slice.
///
/// Seeded with the SMA of the first `period` values, then smoothed
/// recursively with k = 2 / (period + 1). Needs at least `period` values.
pub fn ema(values: &[Decimal], period: usize) -> Result<Decimal> {
    ema_series(values, period).map(|series| series[series.len() - 1])
}

/// Full EMA series, one value per input bar from index `period - 1` on.
///
/// MACD needs the whole line series (its signal line is an EMA of it), so
/// the recursion is exposed rather than just the final value.
pub fn ema_series(values: &[Decimal], period: usize) -> Result<Vec<Decimal>> {
    window(values, period)?;
    let k = div(Decimal::TWO, Decimal::from(period + 1))?;
    let seed: Decimal = values[..period].iter().copied().sum();
    let mut current = div(seed, Decimal::from(period))?;

    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(current);
    for value in &values[period..] {
        current = current + k * (*value - current);
        series.push(current);
    }
    Ok(series)
}

/// Population standard deviation of the trailing `period` values.
pub fn stddev(values: &[Decimal], period: usize) -> Result<Decimal> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let mut sum_sq = Decimal::ZERO;
    for value in window {
        let diff = *value - mean;
        sum_sq += diff * diff;
    }
    let variance = div(sum_sq, Decimal::from(period))?;
    variance.sqrt().ok_or(MathError::NonFinite)
}

/// True range of a bar given the previous close.
pub fn true_range(high: Decimal, low: Decimal, prev_close: Decimal) -> Decimal {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

fn window(values: &[Decimal], period: usize) -> Result<()> {
    if period == 0 || values.len() < period {
        return Err(MathError::InsufficientValues {
            required: period.max(1),
            got: values.len(),
        });
    }
    Ok(())
}
