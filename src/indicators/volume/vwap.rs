//! VWAP (Volume-Weighted Average Price) indicator

use crate::indicators::error::{require_candles, IndicatorError, Result};
use crate::models::candle::Candle;
use crate::models::indicators::VwapIndicator;
use crate::precision;
use rust_decimal::Decimal;

/// Calculate VWAP over the supplied window.
///
/// Σ(typical price · volume) / Σ(volume). A window with zero total
/// volume has no defined VWAP and fails rather than producing a
/// division artifact.
pub fn calculate_vwap(candles: &[Candle]) -> Result<VwapIndicator> {
    require_candles(candles.len(), 1)?;

    let mut weighted_sum = Decimal::ZERO;
    let mut volume_sum = Decimal::ZERO;
    for candle in candles {
        weighted_sum = precision::add(
            weighted_sum,
            precision::mul(candle.typical_price(), candle.volume)?,
        )?;
        volume_sum = precision::add(volume_sum, candle.volume)?;
    }

    if volume_sum.is_zero() {
        return Err(IndicatorError::ZeroVolume);
    }

    Ok(VwapIndicator {
        value: precision::div(weighted_sum, volume_sum)?,
    })
}
