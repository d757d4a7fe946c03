//! Unit tests for the signal engine

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::config::Config;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;
use signatrix::models::signal::{Signal, SignalDirection, SignalReason, Timeframe};
use signatrix::signals::engine::SignalEngine;
use signatrix::signals::weights::AdaptiveWeightTracker;
use std::sync::Arc;

fn engine() -> SignalEngine {
    let config = Config::default();
    let weights = Arc::new(AdaptiveWeightTracker::new(config.weights.clone()));
    SignalEngine::new(config, weights)
}

fn uptrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            let base = dec!(100) + Decimal::from(i as u32) * dec!(0.5);
            Candle::new(
                base,
                base + dec!(0.3),
                base - dec!(0.2),
                base + dec!(0.1),
                dec!(1000) + Decimal::from(i as u32) * dec!(10),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn adjacent_signal(direction: SignalDirection, timeframe: Timeframe) -> Signal {
    Signal {
        symbol: "BTC-PERP".to_string(),
        timeframe,
        direction,
        confidence: dec!(80),
        entry_price: dec!(100),
        stop_loss: dec!(97),
        take_profit: dec!(105),
        risk_reward_ratio: dec!(1.66),
        reasons: Vec::new(),
        timestamp: Utc::now(),
    }
}

#[test]
fn test_empty_series_is_an_error() {
    let result = engine().evaluate("BTC-PERP", Timeframe::H1, &[], &[]);
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData { .. })
    ));
}

#[test]
fn test_short_series_degrades_to_neutral() {
    // Too little history for most indicators: NEUTRAL at confidence 50
    // with a reason noting the degraded input, never an error.
    let candles = uptrend_candles(10);
    let signal = engine()
        .evaluate("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    assert_eq!(signal.direction, SignalDirection::Neutral);
    assert_eq!(signal.confidence, dec!(50));
    assert!(signal.reasons[0].description.contains("degraded input"));
}

#[test]
fn test_full_history_produces_bounded_signal() {
    let candles = uptrend_candles(120);
    let signal = engine()
        .evaluate("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    assert!(signal.confidence >= dec!(25));
    assert!(signal.confidence <= dec!(95));
    assert!(signal.risk_reward_ratio > dec!(0));
    assert!(!signal.reasons.is_empty());
}

#[test]
fn test_evaluation_is_deterministic() {
    let candles = uptrend_candles(120);
    let engine = engine();
    let first = engine
        .evaluate("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    let second = engine
        .evaluate("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    assert_eq!(first.direction, second.direction);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.entry_price, second.entry_price);
    assert_eq!(first.stop_loss, second.stop_loss);
    assert_eq!(first.take_profit, second.take_profit);
}

#[test]
fn test_unordered_series_is_a_defect() {
    let mut candles = uptrend_candles(120);
    candles.swap(10, 50);
    let result = engine().evaluate("BTC-PERP", Timeframe::H1, &candles, &[]);
    assert!(matches!(
        result,
        Err(IndicatorError::InvariantViolation(_))
    ));
}

#[test]
fn test_agreeing_timeframe_never_lowers_confidence() {
    let candles = uptrend_candles(120);
    let engine = engine();

    let alone = engine
        .evaluate("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    if alone.direction == SignalDirection::Neutral {
        return;
    }

    let agree = engine
        .evaluate(
            "BTC-PERP",
            Timeframe::H1,
            &candles,
            &[adjacent_signal(alone.direction, Timeframe::H4)],
        )
        .unwrap();
    let conflict_direction = if alone.direction == SignalDirection::Long {
        SignalDirection::Short
    } else {
        SignalDirection::Long
    };
    let conflict = engine
        .evaluate(
            "BTC-PERP",
            Timeframe::H1,
            &candles,
            &[adjacent_signal(conflict_direction, Timeframe::H4)],
        )
        .unwrap();

    // Confidence is a directional gauge around 50; compare conviction,
    // the distance from the midline.
    let conviction = |s: &Signal| (s.confidence - dec!(50)).abs();
    assert!(conviction(&agree) >= conviction(&alone));
    assert!(conviction(&conflict) <= conviction(&alone));
}

#[test]
fn test_contributors_are_reported() {
    let candles = uptrend_candles(120);
    let config = Config::default();
    let weights = Arc::new(AdaptiveWeightTracker::new(config.weights.clone()));
    let engine = SignalEngine::new(config, weights);
    let evaluation = engine
        .evaluate_detailed("BTC-PERP", Timeframe::H1, &candles, &[])
        .unwrap();
    // Every contributor must appear in the reasons trace.
    for name in &evaluation.contributors {
        assert!(
            evaluation
                .signal
                .reasons
                .iter()
                .any(|r: &SignalReason| r.description.starts_with(name.as_str())),
            "missing reason for contributor {}",
            name
        );
    }
}
