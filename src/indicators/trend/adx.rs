//! ADX (Average Directional Index) indicator

use crate::indicators::error::{require_candles, Result};
use crate::models::candle::Candle;
use crate::models::indicators::AdxIndicator;
use crate::precision::{self, stats, validate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculate ADX with +DI / -DI.
///
/// Directional movement and true range are averaged over rolling
/// `period` windows to form a DX series; ADX is the SMA of the last
/// `period` DX values. Needs `2 * period` candles.
pub fn calculate_adx(candles: &[Candle], period: u32) -> Result<AdxIndicator> {
    let p = period as usize;
    require_candles(candles.len(), 2 * p)?;

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        tr_values.push(stats::true_range(curr.high, curr.low, prev.close));

        let up_move = curr.high - prev.high;
        let down_move = prev.low - curr.low;
        if up_move > down_move && up_move > Decimal::ZERO {
            plus_dm.push(up_move);
        } else {
            plus_dm.push(Decimal::ZERO);
        }
        if down_move > up_move && down_move > Decimal::ZERO {
            minus_dm.push(down_move);
        } else {
            minus_dm.push(Decimal::ZERO);
        }
    }

    // DX per rolling window, then ADX as the average of the last window.
    let mut dx_series = Vec::new();
    let mut last_plus_di = Decimal::ZERO;
    let mut last_minus_di = Decimal::ZERO;
    for end in p..=tr_values.len() {
        let atr = stats::sma(&tr_values[..end], p)?;
        let plus_avg = stats::sma(&plus_dm[..end], p)?;
        let minus_avg = stats::sma(&minus_dm[..end], p)?;

        let (plus_di, minus_di) = if atr.is_zero() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            (
                precision::mul(precision::div(plus_avg, atr)?, dec!(100))?,
                precision::mul(precision::div(minus_avg, atr)?, dec!(100))?,
            )
        };
        last_plus_di = plus_di;
        last_minus_di = minus_di;

        let di_sum = plus_di + minus_di;
        let dx = if di_sum.is_zero() {
            Decimal::ZERO
        } else {
            precision::mul(precision::div((plus_di - minus_di).abs(), di_sum)?, dec!(100))?
        };
        dx_series.push(dx);
    }

    let adx = stats::sma(&dx_series, p)?;

    Ok(AdxIndicator {
        value: validate(adx, Some((Decimal::ZERO, dec!(100))))?,
        plus_di: last_plus_di,
        minus_di: last_minus_di,
        period,
    })
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(candles: &[Candle]) -> Result<AdxIndicator> {
    calculate_adx(candles, 14)
}
