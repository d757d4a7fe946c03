//! Unit tests for ATR indicator

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::indicators::volatility::calculate_atr;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;

fn constant_range_candles(count: usize, range: Decimal) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            Candle::new(
                dec!(100),
                dec!(100) + range,
                dec!(100),
                dec!(100),
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_atr_constant_range() {
    // Every bar spans exactly 2 with no gaps between closes.
    let candles = constant_range_candles(20, dec!(2));
    let atr = calculate_atr(&candles, 14).unwrap();
    assert_eq!(atr.value, dec!(2));
}

#[test]
fn test_atr_is_non_negative() {
    let candles = constant_range_candles(20, dec!(0.5));
    let atr = calculate_atr(&candles, 14).unwrap();
    assert!(atr.value >= Decimal::ZERO);
}

#[test]
fn test_atr_insufficient_data() {
    let candles = constant_range_candles(14, dec!(1));
    assert!(matches!(
        calculate_atr(&candles, 14),
        Err(IndicatorError::InsufficientData {
            required: 15,
            got: 14
        })
    ));
}
