//! Direction thresholds and ATR-derived trade levels.

use crate::config::Config;
use crate::indicators::error::{IndicatorError, Result};
use crate::models::signal::SignalDirection;
use crate::precision;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const CONFIDENCE_FLOOR: Decimal = dec!(25);
pub const CONFIDENCE_CEILING: Decimal = dec!(95);

/// Entry, protective stop and target for a signal.
#[derive(Debug, Clone)]
pub struct TradeLevels {
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    pub risk_reward: Decimal,
}

/// LONG above the positive threshold, SHORT below the symmetric negative
/// one, NEUTRAL in between.
pub fn direction_from_score(raw_score: f64, threshold: f64) -> SignalDirection {
    if raw_score >= threshold {
        SignalDirection::Long
    } else if raw_score <= -threshold {
        SignalDirection::Short
    } else {
        SignalDirection::Neutral
    }
}

/// confidence = clamp(50 + raw, 25, 95)
pub fn confidence_from_score(raw_score: f64) -> Result<Decimal> {
    let raw = precision::from_f64(raw_score)?;
    let confidence = precision::add(dec!(50), raw)?;
    Ok(confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING))
}

/// Derive stop/target from the latest ATR.
///
/// LONG: stop = entry - stop_mult·ATR, target = entry + target_mult·ATR;
/// SHORT mirrored. NEUTRAL keeps symmetric reference levels one ATR out.
/// The entry always lands strictly between stop and target. A dead-flat
/// window has no range to scale levels from, so the distance falls back
/// to 0.1% of entry to keep the ratio defined.
pub fn levels_from_atr(
    entry: Decimal,
    atr: Decimal,
    direction: SignalDirection,
    config: &Config,
) -> Result<TradeLevels> {
    let basis = if atr > Decimal::ZERO {
        atr
    } else {
        precision::mul(entry, dec!(0.001))?
    };
    if basis <= Decimal::ZERO {
        return Err(IndicatorError::InvariantViolation(format!(
            "cannot derive trade levels around entry {}",
            entry
        )));
    }

    let stop_distance = precision::mul(basis, precision::from_f64(config.stop_atr_multiple)?)?;
    let target_distance = precision::mul(basis, precision::from_f64(config.target_atr_multiple)?)?;

    let (stop_loss, take_profit) = match direction {
        SignalDirection::Long => (
            precision::sub(entry, stop_distance)?,
            precision::add(entry, target_distance)?,
        ),
        SignalDirection::Short => (
            precision::add(entry, stop_distance)?,
            precision::sub(entry, target_distance)?,
        ),
        SignalDirection::Neutral => (
            precision::sub(entry, basis)?,
            precision::add(entry, basis)?,
        ),
    };

    let risk = precision::sub(entry, stop_loss)?.abs();
    let reward = precision::sub(take_profit, entry)?.abs();
    let risk_reward = precision::div(reward, risk)?;

    Ok(TradeLevels {
        entry,
        stop_loss,
        take_profit,
        risk_reward,
    })
}
