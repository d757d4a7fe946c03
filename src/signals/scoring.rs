//! Interpretation of raw indicator values into normalized readings.
//!
//! Each interpreter maps one indicator's output to a buy/sell/neutral
//! lean plus a strength grade; the aggregation layer turns those into
//! signed score contributions.

use crate::models::candle::Candle;
use crate::models::indicators::{
    AdxIndicator, AtrIndicator, BollingerBandsIndicator, DerivedSignal, EmaSpreadIndicator,
    IndicatorCategory, IndicatorReading, MacdIndicator, RsiIndicator, SignalStrength,
    StochasticIndicator, VwapIndicator,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn interpret_rsi(rsi: &RsiIndicator) -> IndicatorReading {
    let (signal, strength) = if rsi.value <= dec!(30) {
        let strength = if rsi.value <= dec!(20) {
            SignalStrength::Strong
        } else {
            SignalStrength::Moderate
        };
        (DerivedSignal::Buy, strength)
    } else if rsi.value >= dec!(70) {
        let strength = if rsi.value >= dec!(80) {
            SignalStrength::Strong
        } else {
            SignalStrength::Moderate
        };
        (DerivedSignal::Sell, strength)
    } else {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    };

    IndicatorReading {
        name: "RSI".to_string(),
        category: IndicatorCategory::Momentum,
        value: rsi.value,
        signal,
        strength,
    }
}

pub fn interpret_stochastic(stoch: &StochasticIndicator) -> IndicatorReading {
    let (signal, strength) = if stoch.k <= dec!(20) {
        // %D agreeing with %K in the extreme zone is the stronger read.
        let strength = if stoch.d <= dec!(20) {
            SignalStrength::Strong
        } else {
            SignalStrength::Moderate
        };
        (DerivedSignal::Buy, strength)
    } else if stoch.k >= dec!(80) {
        let strength = if stoch.d >= dec!(80) {
            SignalStrength::Strong
        } else {
            SignalStrength::Moderate
        };
        (DerivedSignal::Sell, strength)
    } else {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    };

    IndicatorReading {
        name: "Stochastic".to_string(),
        category: IndicatorCategory::Momentum,
        value: stoch.k,
        signal,
        strength,
    }
}

pub fn interpret_macd(macd: &MacdIndicator) -> IndicatorReading {
    let (signal, strength) = if macd.macd > macd.signal && macd.histogram > Decimal::ZERO {
        (DerivedSignal::Buy, histogram_strength(macd))
    } else if macd.macd < macd.signal && macd.histogram < Decimal::ZERO {
        (DerivedSignal::Sell, histogram_strength(macd))
    } else {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    };

    IndicatorReading {
        name: "MACD".to_string(),
        category: IndicatorCategory::Momentum,
        value: macd.histogram,
        signal,
        strength,
    }
}

fn histogram_strength(macd: &MacdIndicator) -> SignalStrength {
    if macd.macd.is_zero() {
        return SignalStrength::Weak;
    }
    let ratio = macd.histogram.abs() / macd.macd.abs();
    if ratio >= dec!(0.5) {
        SignalStrength::Strong
    } else if ratio >= dec!(0.2) {
        SignalStrength::Moderate
    } else {
        SignalStrength::Weak
    }
}

pub fn interpret_ema_spread(spread: &EmaSpreadIndicator) -> IndicatorReading {
    let magnitude = spread.spread.abs();
    let (signal, strength) = if magnitude < dec!(0.001) {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    } else {
        let strength = if magnitude >= dec!(0.02) {
            SignalStrength::Strong
        } else if magnitude >= dec!(0.005) {
            SignalStrength::Moderate
        } else {
            SignalStrength::Weak
        };
        let signal = if spread.spread > Decimal::ZERO {
            DerivedSignal::Buy
        } else {
            DerivedSignal::Sell
        };
        (signal, strength)
    };

    IndicatorReading {
        name: "EMA".to_string(),
        category: IndicatorCategory::Trend,
        value: spread.spread,
        signal,
        strength,
    }
}

pub fn interpret_adx(adx: &AdxIndicator) -> IndicatorReading {
    // ADX itself is directionless; the DI pair supplies the lean once
    // trend strength is established.
    let (signal, strength) = if adx.value < dec!(20) {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    } else {
        let strength = if adx.value >= dec!(40) {
            SignalStrength::Strong
        } else {
            SignalStrength::Moderate
        };
        let signal = if adx.plus_di > adx.minus_di {
            DerivedSignal::Buy
        } else if adx.minus_di > adx.plus_di {
            DerivedSignal::Sell
        } else {
            DerivedSignal::Neutral
        };
        (signal, strength)
    };

    IndicatorReading {
        name: "ADX".to_string(),
        category: IndicatorCategory::Trend,
        value: adx.value,
        signal,
        strength,
    }
}

pub fn interpret_bollinger(
    bands: &BollingerBandsIndicator,
    last_candle: &Candle,
) -> IndicatorReading {
    let close = last_candle.close;
    let (signal, strength) = if close <= bands.lower {
        (DerivedSignal::Buy, SignalStrength::Strong)
    } else if close >= bands.upper {
        (DerivedSignal::Sell, SignalStrength::Strong)
    } else {
        let width = bands.upper - bands.lower;
        if width.is_zero() {
            (DerivedSignal::Neutral, SignalStrength::Weak)
        } else {
            // Position within the bands, 0 at the lower band, 1 at the upper.
            let position = (close - bands.lower) / width;
            if position <= dec!(0.2) {
                (DerivedSignal::Buy, SignalStrength::Moderate)
            } else if position >= dec!(0.8) {
                (DerivedSignal::Sell, SignalStrength::Moderate)
            } else {
                (DerivedSignal::Neutral, SignalStrength::Weak)
            }
        }
    };

    IndicatorReading {
        name: "Bollinger".to_string(),
        category: IndicatorCategory::Volatility,
        value: bands.middle,
        signal,
        strength,
    }
}

pub fn interpret_atr(atr: &AtrIndicator) -> IndicatorReading {
    // Pure volatility measure: counted as an available reading but never
    // carries a directional lean.
    IndicatorReading {
        name: "ATR".to_string(),
        category: IndicatorCategory::Volatility,
        value: atr.value,
        signal: DerivedSignal::Neutral,
        strength: SignalStrength::Weak,
    }
}

pub fn interpret_vwap(vwap: &VwapIndicator, last_candle: &Candle) -> IndicatorReading {
    let close = last_candle.close;
    let (signal, strength) = if vwap.value.is_zero() {
        (DerivedSignal::Neutral, SignalStrength::Weak)
    } else {
        let distance = ((close - vwap.value) / vwap.value).abs();
        if close > vwap.value {
            let strength = if distance >= dec!(0.01) {
                SignalStrength::Moderate
            } else {
                SignalStrength::Weak
            };
            (DerivedSignal::Buy, strength)
        } else if close < vwap.value {
            let strength = if distance >= dec!(0.01) {
                SignalStrength::Moderate
            } else {
                SignalStrength::Weak
            };
            (DerivedSignal::Sell, strength)
        } else {
            (DerivedSignal::Neutral, SignalStrength::Weak)
        }
    };

    IndicatorReading {
        name: "VWAP".to_string(),
        category: IndicatorCategory::Volume,
        value: vwap.value,
        signal,
        strength,
    }
}
