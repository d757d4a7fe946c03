//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod market;
pub mod risk;
pub mod signal;

pub use candle::{check_series, Candle, SeriesCheck};
pub use indicators::{
    AdxIndicator, AtrIndicator, BollingerBandsIndicator, DerivedSignal, EmaSpreadIndicator,
    IndicatorCategory, IndicatorReading, MacdIndicator, RsiIndicator, SignalStrength,
    StochasticIndicator, VwapIndicator,
};
pub use market::{MarketRegime, PatternDirection, PatternMatch, RegimeClassification};
pub use risk::{RiskAssessment, RiskLevel};
pub use signal::{Signal, SignalDirection, SignalReason, Timeframe};
