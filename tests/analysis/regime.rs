//! Unit tests for regime classification

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::analysis::regime::classify_regime;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;
use signatrix::models::market::MarketRegime;

fn build_candles<F>(count: usize, price_at: F) -> Vec<Candle>
where
    F: Fn(usize) -> (Decimal, Decimal, Decimal),
{
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            let (close, high, low) = price_at(i);
            Candle::new(
                close,
                high,
                low,
                close,
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_steady_uptrend_classifies_trend_up() {
    let candles = build_candles(80, |i| {
        let base = dec!(100) + Decimal::from(i as u32) * dec!(0.6);
        (base, base + dec!(0.3), base - dec!(0.2))
    });
    let classification = classify_regime(&candles).unwrap();
    assert_eq!(classification.regime, MarketRegime::TrendUp);
    assert!(classification.confidence > dec!(50));
}

#[test]
fn test_steady_downtrend_classifies_trend_down() {
    let candles = build_candles(80, |i| {
        let base = dec!(200) - Decimal::from(i as u32) * dec!(0.6);
        (base, base + dec!(0.2), base - dec!(0.3))
    });
    let classification = classify_regime(&candles).unwrap();
    assert_eq!(classification.regime, MarketRegime::TrendDown);
}

#[test]
fn test_wild_swings_classify_high_volatility() {
    // Ranges near 10% of price push the ATR/price ratio past the
    // high-volatility threshold regardless of trend shape.
    let candles = build_candles(80, |i| {
        let swing = if i % 2 == 0 { dec!(4) } else { dec!(-4) };
        let base = dec!(100) + swing;
        (base, base + dec!(6), base - dec!(6))
    });
    let classification = classify_regime(&candles).unwrap();
    assert_eq!(classification.regime, MarketRegime::HighVolatility);
}

#[test]
fn test_quiet_oscillation_classifies_range() {
    let candles = build_candles(80, |i| {
        let wobble = Decimal::from(i as u32 % 3) * dec!(0.2);
        let base = dec!(100) + wobble;
        (base, base + dec!(0.7), base - dec!(0.7))
    });
    let classification = classify_regime(&candles).unwrap();
    assert!(matches!(
        classification.regime,
        MarketRegime::Range | MarketRegime::LowVolatility
    ));
}

#[test]
fn test_regime_needs_history() {
    let candles = build_candles(30, |i| {
        let base = dec!(100) + Decimal::from(i as u32);
        (base, base + dec!(0.5), base - dec!(0.5))
    });
    assert!(matches!(
        classify_regime(&candles),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
