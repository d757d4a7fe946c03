//! Market regime classification from trend-strength and volatility measures.

use crate::indicators::error::Result;
use crate::indicators::trend::{calculate_adx_default, calculate_ema_spread_default};
use crate::indicators::volatility::{calculate_atr_default, calculate_bollinger_bands_default};
use crate::models::candle::Candle;
use crate::models::market::{MarketRegime, RegimeClassification};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ADX_TRENDING: Decimal = dec!(25);
const ADX_RANGING: Decimal = dec!(20);
const MIN_TREND_SPREAD: Decimal = dec!(0.005);
const NARROW_BAND_WIDTH: Decimal = dec!(0.04);
const HIGH_VOL_ATR_RATIO: Decimal = dec!(0.03);
const LOW_VOL_ATR_RATIO: Decimal = dec!(0.005);

/// Classify the prevailing regime from recent candles.
///
/// High directional movement plus a wide MA spread reads as trending;
/// low directional movement plus a narrow band reads as range-bound. An
/// ATR/price ratio above the high-volatility threshold overrides either
/// label, because the scorer weights volatile markets differently
/// regardless of their trend shape.
pub fn classify_regime(candles: &[Candle]) -> Result<RegimeClassification> {
    let adx = calculate_adx_default(candles)?;
    let spread = calculate_ema_spread_default(candles)?;
    let atr = calculate_atr_default(candles)?;
    let bands = calculate_bollinger_bands_default(candles)?;

    let last_close = candles[candles.len() - 1].close;
    let atr_ratio = if last_close.is_zero() {
        Decimal::ZERO
    } else {
        atr.value / last_close
    };

    if atr_ratio >= HIGH_VOL_ATR_RATIO {
        let over = (atr_ratio / HIGH_VOL_ATR_RATIO).min(dec!(2));
        return Ok(RegimeClassification {
            regime: MarketRegime::HighVolatility,
            confidence: (dec!(50) * over).min(dec!(100)),
        });
    }

    if adx.value >= ADX_TRENDING && spread.spread.abs() >= MIN_TREND_SPREAD {
        let regime = if spread.spread > Decimal::ZERO {
            MarketRegime::TrendUp
        } else {
            MarketRegime::TrendDown
        };
        // Confidence grows as ADX clears the trending threshold.
        let confidence = (dec!(50) + (adx.value - ADX_TRENDING) * dec!(2)).min(dec!(95));
        return Ok(RegimeClassification { regime, confidence });
    }

    if atr_ratio > Decimal::ZERO && atr_ratio <= LOW_VOL_ATR_RATIO {
        return Ok(RegimeClassification {
            regime: MarketRegime::LowVolatility,
            confidence: dec!(60),
        });
    }

    if adx.value < ADX_RANGING && bands.relative_width() <= NARROW_BAND_WIDTH {
        let confidence = (dec!(55) + (ADX_RANGING - adx.value) * dec!(2)).min(dec!(90));
        return Ok(RegimeClassification {
            regime: MarketRegime::Range,
            confidence,
        });
    }

    // Between the trend and range thresholds nothing is clear-cut.
    Ok(RegimeClassification {
        regime: MarketRegime::Range,
        confidence: dec!(40),
    })
}
