//! Fixed catalogue of chart setups scanned on every evaluation.
//!
//! Three named setups: reversal at an RSI extreme, a Bollinger band
//! breakout, and a trend continuation. Each match carries a reliability
//! score in [0, 100] and a directional lean; the scorer only ever uses
//! them to adjust confidence, never to flip a direction.

use crate::indicators::trend::calculate_macd;
use crate::models::candle::Candle;
use crate::models::indicators::{
    BollingerBandsIndicator, EmaSpreadIndicator, MacdIndicator, RsiIndicator,
};
use crate::models::market::{PatternDirection, PatternMatch};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const RSI_OVERBOUGHT: Decimal = dec!(70);
const RSI_OVERSOLD: Decimal = dec!(30);
const VOLUME_LOOKBACK: usize = 20;

/// Indicator context the pattern scanner reads. Unavailable indicators
/// simply disable the setups that need them.
#[derive(Debug, Default)]
pub struct PatternInputs<'a> {
    pub rsi: Option<&'a RsiIndicator>,
    pub bollinger: Option<&'a BollingerBandsIndicator>,
    pub ema_spread: Option<&'a EmaSpreadIndicator>,
    pub macd: Option<&'a MacdIndicator>,
}

/// Scan recent candles for the pattern catalogue.
pub fn detect_patterns(candles: &[Candle], inputs: &PatternInputs) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    if candles.len() < 2 {
        return matches;
    }

    if let Some(pattern) = reversal_at_extreme(candles, inputs) {
        matches.push(pattern);
    }
    if let Some(pattern) = band_breakout(candles, inputs) {
        matches.push(pattern);
    }
    if let Some(pattern) = trend_continuation(candles, inputs) {
        matches.push(pattern);
    }
    matches
}

/// RSI beyond 70/30 with the latest close turning against the prior bar.
fn reversal_at_extreme(candles: &[Candle], inputs: &PatternInputs) -> Option<PatternMatch> {
    let rsi = inputs.rsi?;
    let last = &candles[candles.len() - 1];
    let prev = &candles[candles.len() - 2];
    let target = inputs.bollinger.map(|b| b.middle);

    if rsi.value >= RSI_OVERBOUGHT && last.close < prev.close {
        let excursion = rsi.value - RSI_OVERBOUGHT;
        return Some(PatternMatch {
            name: "reversal-at-extreme".to_string(),
            direction: PatternDirection::Bearish,
            reliability: extreme_reliability(excursion),
            price_target: target,
        });
    }
    if rsi.value <= RSI_OVERSOLD && last.close > prev.close {
        let excursion = RSI_OVERSOLD - rsi.value;
        return Some(PatternMatch {
            name: "reversal-at-extreme".to_string(),
            direction: PatternDirection::Bullish,
            reliability: extreme_reliability(excursion),
            price_target: target,
        });
    }
    None
}

/// Close beyond an outer Bollinger band on above-average volume.
fn band_breakout(candles: &[Candle], inputs: &PatternInputs) -> Option<PatternMatch> {
    let bands = inputs.bollinger?;
    let last = &candles[candles.len() - 1];
    let band_width = bands.upper - bands.lower;
    if band_width <= Decimal::ZERO {
        return None;
    }

    let volume_confirmed = above_average_volume(candles);
    let (direction, penetration, target) = if last.close > bands.upper {
        (
            PatternDirection::Bullish,
            last.close - bands.upper,
            bands.upper + band_width,
        )
    } else if last.close < bands.lower {
        (
            PatternDirection::Bearish,
            bands.lower - last.close,
            bands.lower - band_width,
        )
    } else {
        return None;
    };

    let depth = (penetration / band_width * dec!(100)).min(dec!(30));
    let base = if volume_confirmed { dec!(55) } else { dec!(40) };
    Some(PatternMatch {
        name: "band-breakout".to_string(),
        direction,
        reliability: (base + depth).min(dec!(100)),
        price_target: Some(target),
    })
}

/// Fast EMA on the trend side of the slow EMA with the MACD histogram
/// expanding the same way since the prior bar.
fn trend_continuation(candles: &[Candle], inputs: &PatternInputs) -> Option<PatternMatch> {
    let spread = inputs.ema_spread?;
    let macd = inputs.macd?;
    let (fast, slow, signal) = macd.periods;
    let prev_macd = calculate_macd(&candles[..candles.len() - 1], fast, slow, signal).ok()?;

    let bullish = spread.spread > Decimal::ZERO
        && macd.histogram > Decimal::ZERO
        && macd.histogram > prev_macd.histogram;
    let bearish = spread.spread < Decimal::ZERO
        && macd.histogram < Decimal::ZERO
        && macd.histogram < prev_macd.histogram;
    if !bullish && !bearish {
        return None;
    }

    // Wider EMA separation reads as a more established trend.
    let separation = (spread.spread.abs() * dec!(1000)).min(dec!(35));
    Some(PatternMatch {
        name: "trend-continuation".to_string(),
        direction: if bullish {
            PatternDirection::Bullish
        } else {
            PatternDirection::Bearish
        },
        reliability: (dec!(50) + separation).min(dec!(100)),
        price_target: None,
    })
}

fn extreme_reliability(excursion: Decimal) -> Decimal {
    (dec!(50) + excursion * dec!(1.5)).min(dec!(95))
}

fn above_average_volume(candles: &[Candle]) -> bool {
    let lookback = candles.len().min(VOLUME_LOOKBACK);
    if lookback < 2 {
        return false;
    }
    let window = &candles[candles.len() - lookback..];
    let sum: Decimal = window.iter().map(|c| c.volume).sum();
    let average = sum / Decimal::from(lookback);
    candles[candles.len() - 1].volume > average
}
