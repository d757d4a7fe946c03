//! Unit tests for MACD indicator

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::indicators::trend::calculate_macd;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;

fn candles_from_closes(closes: &[Decimal]) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(closes.len() as i64);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + dec!(0.2),
                close - dec!(0.2),
                close,
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_macd_uptrend_line_positive() {
    let closes: Vec<Decimal> = (0..60).map(|i| dec!(100) + Decimal::from(i)).collect();
    let candles = candles_from_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert!(macd.macd > Decimal::ZERO);
}

#[test]
fn test_macd_histogram_identity() {
    let closes: Vec<Decimal> = (0..60)
        .map(|i| dec!(100) + Decimal::from(i % 9) - Decimal::from(i % 4))
        .collect();
    let candles = candles_from_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert_eq!(macd.histogram, macd.macd - macd.signal);
}

#[test]
fn test_macd_constant_series_is_zero() {
    let closes = vec![dec!(250); 60];
    let candles = candles_from_closes(&closes);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert_eq!(macd.macd, Decimal::ZERO);
    assert_eq!(macd.signal, Decimal::ZERO);
    assert_eq!(macd.histogram, Decimal::ZERO);
}

#[test]
fn test_macd_insufficient_data() {
    let closes: Vec<Decimal> = (0..30).map(Decimal::from).collect();
    let candles = candles_from_closes(&closes);
    assert!(matches!(
        calculate_macd(&candles, 12, 26, 9),
        Err(IndicatorError::InsufficientData {
            required: 34,
            got: 30
        })
    ));
}
