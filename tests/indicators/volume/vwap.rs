//! Unit tests for VWAP indicator

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use signatrix::indicators::volume::calculate_vwap;
use signatrix::indicators::IndicatorError;
use signatrix::models::candle::Candle;

#[test]
fn test_vwap_single_candle_is_typical_price() {
    let candle = Candle::new(
        dec!(100),
        dec!(102),
        dec!(98),
        dec!(100),
        dec!(500),
        Utc::now(),
    );
    let vwap = calculate_vwap(&[candle]).unwrap();
    assert_eq!(vwap.value, dec!(100));
}

#[test]
fn test_vwap_weights_by_volume() {
    let start = Utc::now();
    let candles = vec![
        // Typical price 100 with 3x the volume of the 200 bar.
        Candle::new(dec!(100), dec!(100), dec!(100), dec!(100), dec!(300), start),
        Candle::new(
            dec!(200),
            dec!(200),
            dec!(200),
            dec!(200),
            dec!(100),
            start + Duration::hours(1),
        ),
    ];
    let vwap = calculate_vwap(&candles).unwrap();
    assert_eq!(vwap.value, dec!(125));
}

#[test]
fn test_vwap_zero_volume_is_an_error() {
    let candles = vec![Candle::new(
        dec!(100),
        dec!(101),
        dec!(99),
        dec!(100),
        dec!(0),
        Utc::now(),
    )];
    assert!(matches!(
        calculate_vwap(&candles),
        Err(IndicatorError::ZeroVolume)
    ));
}
