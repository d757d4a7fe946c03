//! Unit tests for the stochastic oscillator

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::indicators::momentum::calculate_stochastic;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;

fn ramp_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            let base = dec!(100) + Decimal::from(i as u32);
            Candle::new(
                base,
                base + dec!(0.5),
                base - dec!(0.5),
                base,
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn flat_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            Candle::new(
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(1000),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_stochastic_bounds() {
    let candles = ramp_candles(40);
    let stoch = calculate_stochastic(&candles, 14, 3).unwrap();
    assert!(stoch.k >= Decimal::ZERO && stoch.k <= dec!(100));
    assert!(stoch.d >= Decimal::ZERO && stoch.d <= dec!(100));
}

#[test]
fn test_stochastic_rising_series_reads_high() {
    // Close sits at the top of its range in a steady ramp.
    let candles = ramp_candles(40);
    let stoch = calculate_stochastic(&candles, 14, 3).unwrap();
    assert!(stoch.k > dec!(90));
}

#[test]
fn test_stochastic_flat_window_reads_midline() {
    let candles = flat_candles(30);
    let stoch = calculate_stochastic(&candles, 14, 3).unwrap();
    assert_eq!(stoch.k, dec!(50));
    assert_eq!(stoch.d, dec!(50));
}

#[test]
fn test_stochastic_insufficient_data() {
    let candles = ramp_candles(10);
    assert!(matches!(
        calculate_stochastic(&candles, 14, 3),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
