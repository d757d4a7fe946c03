//! Unit tests for Bollinger Bands indicator

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::indicators::volatility::calculate_bollinger_bands;
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
                close + dec!(0.1),
                close - dec!(0.1),
                close,
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_bollinger_band_ordering() {
    let closes: Vec<Decimal> = (0..30)
        .map(|i| dec!(100) + Decimal::from(i % 5))
        .collect();
    let candles = candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, dec!(2)).unwrap();
    assert!(bands.lower < bands.middle);
    assert!(bands.middle < bands.upper);
}

#[test]
fn test_bollinger_constant_series_collapses_bands() {
    // Zero variance: upper == middle == lower.
    let closes = vec![dec!(100); 25];
    let candles = candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, dec!(2)).unwrap();
    assert_eq!(bands.upper, dec!(100));
    assert_eq!(bands.middle, dec!(100));
    assert_eq!(bands.lower, dec!(100));
}

#[test]
fn test_bollinger_middle_is_sma() {
    let closes: Vec<Decimal> = (1..=20).map(Decimal::from).collect();
    let candles = candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, dec!(2)).unwrap();
    assert_eq!(bands.middle, dec!(10.5));
}

#[test]
fn test_bollinger_insufficient_data() {
    let closes: Vec<Decimal> = (1..=10).map(Decimal::from).collect();
    let candles = candles_from_closes(&closes);
    assert!(matches!(
        calculate_bollinger_bands(&candles, 20, dec!(2)),
        Err(IndicatorError::InsufficientData {
            required: 20,
            got: 10
        })
    ));
}
