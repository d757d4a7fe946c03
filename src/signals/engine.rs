//! Main signal evaluation pipeline.

use crate::analysis::patterns::{detect_patterns, PatternInputs};
use crate::analysis::regime::classify_regime;
use crate::config::Config;
use crate::indicators::error::{IndicatorError, Result};
use crate::indicators::momentum::{calculate_rsi_default, calculate_stochastic_default};
use crate::indicators::trend::{
    calculate_adx_default, calculate_ema_spread_default, calculate_macd_default,
};
use crate::indicators::volatility::{calculate_atr_default, calculate_bollinger_bands_default};
use crate::indicators::volume::calculate_vwap;
use crate::models::candle::{check_series, Candle};
use crate::models::market::RegimeClassification;
use crate::models::signal::{Signal, SignalDirection, SignalReason, Timeframe};
use crate::signals::aggregation::{score, ScoreInputs};
use crate::signals::decision::{confidence_from_score, direction_from_score, levels_from_atr};
use crate::signals::scoring;
use crate::signals::weights::AdaptiveWeightTracker;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::{debug, warn};

/// Total indicators the pipeline attempts per evaluation.
const INDICATOR_COUNT: usize = 8;

/// A signal plus the indicator names that actually moved its score,
/// kept for outcome attribution after the signal's horizon elapses.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub signal: Signal,
    pub contributors: Vec<String>,
}

/// Stateless evaluator; the only state it touches is the weight table
/// snapshot it takes at the start of each evaluation.
pub struct SignalEngine {
    config: Config,
    weights: Arc<AdaptiveWeightTracker>,
}

impl SignalEngine {
    pub fn new(config: Config, weights: Arc<AdaptiveWeightTracker>) -> Self {
        Self { config, weights }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate one (symbol, timeframe) pair.
    ///
    /// `adjacent` carries the most recent signals for neighbouring
    /// timeframes of the same symbol, if any. Too little history for
    /// most indicators degrades to a NEUTRAL signal at confidence 50
    /// rather than failing; computation defects propagate.
    pub fn evaluate(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        candles: &[Candle],
        adjacent: &[Signal],
    ) -> Result<Signal> {
        self.evaluate_detailed(symbol, timeframe, candles, adjacent)
            .map(|evaluation| evaluation.signal)
    }

    pub fn evaluate_detailed(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        candles: &[Candle],
        adjacent: &[Signal],
    ) -> Result<Evaluation> {
        if candles.is_empty() {
            return Err(IndicatorError::InsufficientData {
                required: 1,
                got: 0,
            });
        }

        let series = check_series(candles, timeframe);
        if !series.ordered {
            return Err(IndicatorError::InvariantViolation(format!(
                "candle series for {}/{} is not time-ordered",
                symbol,
                timeframe.as_str()
            )));
        }
        if series.gaps > 0 {
            warn!(
                symbol = %symbol,
                timeframe = %timeframe.as_str(),
                gaps = series.gaps,
                "candle series has {} gaps",
                series.gaps
            );
        }

        let entry_price = candles[candles.len() - 1].close;
        let last_candle = &candles[candles.len() - 1];

        let rsi = optional(calculate_rsi_default(candles), "RSI")?;
        let stochastic = optional(calculate_stochastic_default(candles), "Stochastic")?;
        let macd = optional(calculate_macd_default(candles), "MACD")?;
        let ema_spread = optional(calculate_ema_spread_default(candles), "EMA")?;
        let adx = optional(calculate_adx_default(candles), "ADX")?;
        let bollinger = optional(calculate_bollinger_bands_default(candles), "Bollinger")?;
        let atr = optional(calculate_atr_default(candles), "ATR")?;
        let vwap = optional(calculate_vwap(candles), "VWAP")?;

        let mut readings = Vec::with_capacity(INDICATOR_COUNT);
        if let Some(ref value) = rsi {
            readings.push(scoring::interpret_rsi(value));
        }
        if let Some(ref value) = stochastic {
            readings.push(scoring::interpret_stochastic(value));
        }
        if let Some(ref value) = macd {
            readings.push(scoring::interpret_macd(value));
        }
        if let Some(ref value) = ema_spread {
            readings.push(scoring::interpret_ema_spread(value));
        }
        if let Some(ref value) = adx {
            readings.push(scoring::interpret_adx(value));
        }
        if let Some(ref value) = bollinger {
            readings.push(scoring::interpret_bollinger(value, last_candle));
        }
        if let Some(ref value) = atr {
            readings.push(scoring::interpret_atr(value));
        }
        if let Some(ref value) = vwap {
            readings.push(scoring::interpret_vwap(value, last_candle));
        }

        let atr_value = atr.as_ref().map(|a| a.value).unwrap_or(Decimal::ZERO);

        if readings.len() < self.config.min_indicators {
            debug!(
                symbol = %symbol,
                timeframe = %timeframe.as_str(),
                available = readings.len(),
                required = self.config.min_indicators,
                "degrading to NEUTRAL: insufficient indicator history"
            );
            return self.degraded(symbol, timeframe, entry_price, atr_value, readings.len());
        }

        let pattern_inputs = PatternInputs {
            rsi: rsi.as_ref(),
            bollinger: bollinger.as_ref(),
            ema_spread: ema_spread.as_ref(),
            macd: macd.as_ref(),
        };
        let patterns = detect_patterns(candles, &pattern_inputs);
        let regime = optional_regime(classify_regime(candles))?;

        let snapshot = self.weights.snapshot();
        let breakdown = score(
            &self.config,
            &ScoreInputs {
                readings: &readings,
                patterns: &patterns,
                regime: regime.as_ref(),
                adjacent,
                weights: &snapshot,
            },
        );

        let direction =
            direction_from_score(breakdown.raw_score, self.config.direction_threshold);
        let confidence = confidence_from_score(breakdown.raw_score)?;
        let levels = levels_from_atr(entry_price, atr_value, direction, &self.config)?;

        debug!(
            symbol = %symbol,
            timeframe = %timeframe.as_str(),
            direction = ?direction,
            raw_score = breakdown.raw_score,
            confidence = %confidence,
            "evaluated signal"
        );

        Ok(Evaluation {
            signal: Signal {
                symbol: symbol.to_string(),
                timeframe,
                direction,
                confidence,
                entry_price: levels.entry,
                stop_loss: levels.stop_loss,
                take_profit: levels.take_profit,
                risk_reward_ratio: levels.risk_reward,
                reasons: breakdown.reasons,
                timestamp: Utc::now(),
            },
            contributors: breakdown.contributors,
        })
    }

    fn degraded(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        entry_price: Decimal,
        atr_value: Decimal,
        available: usize,
    ) -> Result<Evaluation> {
        let levels =
            levels_from_atr(entry_price, atr_value, SignalDirection::Neutral, &self.config)?;
        Ok(Evaluation {
            signal: Signal {
                symbol: symbol.to_string(),
                timeframe,
                direction: SignalDirection::Neutral,
                confidence: dec!(50),
                entry_price: levels.entry,
                stop_loss: levels.stop_loss,
                take_profit: levels.take_profit,
                risk_reward_ratio: levels.risk_reward,
                reasons: vec![SignalReason {
                    description: format!(
                        "degraded input: only {} of {} indicators available",
                        available, INDICATOR_COUNT
                    ),
                    weight: 0.0,
                }],
                timestamp: Utc::now(),
            },
            contributors: Vec::new(),
        })
    }
}

/// Treat missing history (and an undefined VWAP) as "indicator
/// unavailable"; anything else is a computation defect and propagates.
fn optional<T>(result: Result<T>, name: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(IndicatorError::InsufficientData { required, got }) => {
            debug!(
                indicator = name,
                required, got, "indicator unavailable: insufficient data"
            );
            Ok(None)
        }
        Err(IndicatorError::ZeroVolume) => {
            warn!(indicator = name, "indicator unavailable: zero volume window");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn optional_regime(
    result: Result<RegimeClassification>,
) -> Result<Option<RegimeClassification>> {
    match result {
        Ok(classification) => Ok(Some(classification)),
        Err(IndicatorError::InsufficientData { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
