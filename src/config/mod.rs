//! Environment-driven configuration for the signal engine.
//!
//! Every calibration knob the scorer uses (category budgets, regime
//! multipliers, thresholds) lives here rather than at the use sites, so
//! tuning never requires touching the scoring code.

use serde::{Deserialize, Serialize};
use std::env;

/// Get the current environment name (defaults to "sandbox")
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Per-category share of the 100-point confidence budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBudgets {
    pub trend: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume: f64,
    /// Maximum bonus added when a detected pattern agrees with the raw score
    pub pattern_bonus: f64,
    /// Maximum bonus/penalty from adjacent-timeframe agreement
    pub timeframe_bonus: f64,
}

impl Default for CategoryBudgets {
    fn default() -> Self {
        Self {
            trend: 35.0,
            momentum: 25.0,
            volatility: 12.0,
            volume: 8.0,
            pattern_bonus: 15.0,
            timeframe_bonus: 15.0,
        }
    }
}

/// Regime-dependent re-weighting multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeMultipliers {
    /// Applied to trend/momentum contributions in trending regimes
    pub trending_boost: f64,
    /// Applied to oscillator contributions in range-bound regimes
    pub range_oscillator_boost: f64,
    /// Flat confidence discount in high-volatility regimes
    pub high_volatility_discount: f64,
}

impl Default for RegimeMultipliers {
    fn default() -> Self {
        Self {
            trending_boost: 1.25,
            range_oscillator_boost: 1.3,
            high_volatility_discount: 0.7,
        }
    }
}

/// Bounds and window for the adaptive indicator weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightConfig {
    pub floor: f64,
    pub ceiling: f64,
    /// Weight used for an indicator with no recorded outcomes yet
    pub default_weight: f64,
    /// Rolling outcome window length
    pub window: usize,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            floor: 0.01,
            ceiling: 0.5,
            default_weight: 0.2,
            window: 20,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub symbols: Vec<String>,
    /// Evaluation cadence in seconds
    pub evaluation_interval_seconds: u64,
    /// Per-evaluation time budget in milliseconds
    pub evaluation_timeout_ms: u64,
    /// Raw score needed before a LONG/SHORT direction is declared
    pub direction_threshold: f64,
    /// Minimum available indicator readings before degrading to NEUTRAL
    pub min_indicators: usize,
    /// ATR multiple between entry and stop
    pub stop_atr_multiple: f64,
    /// ATR multiple between entry and target
    pub target_atr_multiple: f64,
    pub budgets: CategoryBudgets,
    pub regime: RegimeMultipliers,
    pub weights: WeightConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: vec!["BTC-PERP".to_string()],
            evaluation_interval_seconds: 180,
            evaluation_timeout_ms: 5_000,
            direction_threshold: 10.0,
            min_indicators: 3,
            stop_atr_multiple: 1.5,
            target_atr_multiple: 2.5,
            budgets: CategoryBudgets::default(),
            regime: RegimeMultipliers::default(),
            weights: WeightConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        if let Ok(symbols) = env::var("SYMBOLS") {
            let parsed: Vec<String> = symbols
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.symbols = parsed;
            }
        }
        if let Some(interval) = parse_var("EVALUATION_INTERVAL_SECONDS") {
            config.evaluation_interval_seconds = interval;
        }
        if let Some(timeout) = parse_var("EVALUATION_TIMEOUT_MS") {
            config.evaluation_timeout_ms = timeout;
        }
        if let Some(threshold) = parse_var("DIRECTION_THRESHOLD") {
            config.direction_threshold = threshold;
        }
        if let Some(min) = parse_var("MIN_INDICATORS") {
            config.min_indicators = min;
        }

        config
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
