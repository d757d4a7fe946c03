//! Signal confidence and risk engine for crypto candle series.
//!
//! The crate turns time-ordered candles into a directional signal
//! (LONG/SHORT/NEUTRAL) with a bounded confidence score and ATR-derived
//! entry/stop/target levels, then turns that signal into distributional
//! risk metrics through a seedable Monte Carlo simulation.

pub mod config;
pub mod logging;
pub mod precision;
pub mod models;
pub mod indicators;
pub mod analysis;
pub mod signals;
pub mod risk;
pub mod core;
pub mod services;

pub use config::Config;
pub use models::risk::{RiskAssessment, RiskLevel};
pub use models::signal::{Signal, SignalDirection, Timeframe};
pub use risk::{assess_risk, RiskError};
pub use signals::engine::SignalEngine;
pub use signals::weights::AdaptiveWeightTracker;
