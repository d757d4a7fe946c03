//! Bollinger Bands indicator

use crate::indicators::error::{require_candles, IndicatorError, Result};
use crate::models::candle::Candle;
use crate::models::indicators::BollingerBandsIndicator;
use crate::precision::{self, stats};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Calculate Bollinger Bands.
///
/// Middle = SMA(period); bands = middle ± std_dev · stddev(period).
/// Band ordering (lower < middle < upper, equal only when the window has
/// zero variance) is enforced; a violation means the computation itself
/// is broken.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: Decimal,
) -> Result<BollingerBandsIndicator> {
    let p = period as usize;
    require_candles(candles.len(), p)?;

    let closes: Vec<Decimal> = candles.iter().map(|c| c.close).collect();
    let middle = stats::sma(&closes, p)?;
    let deviation = stats::stddev(&closes, p)?;

    let offset = precision::mul(std_dev, deviation)?;
    let upper = precision::add(middle, offset)?;
    let lower = precision::sub(middle, offset)?;

    if deviation.is_zero() || std_dev.is_zero() {
        if lower != middle || upper != middle {
            return Err(IndicatorError::InvariantViolation(format!(
                "flat window must collapse bands, got lower={} middle={} upper={}",
                lower, middle, upper
            )));
        }
    } else if !(lower < middle && middle < upper) {
        return Err(IndicatorError::InvariantViolation(format!(
            "band ordering broken: lower={} middle={} upper={}",
            lower, middle, upper
        )));
    }

    Ok(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Result<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, dec!(2))
}
