//! Distributional risk metrics produced by the Monte Carlo simulator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Derived risk profile for a signal. Never mutated after creation.
///
/// Values are fractional returns over the simulated horizon (0.02 = +2%),
/// except `sharpe_ratio` which is annualized by the signal's timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub expected_return: f64,
    /// 5th-percentile loss in the signaled direction (positive magnitude)
    pub value_at_risk_95: f64,
    pub sharpe_ratio: f64,
    /// Worst peak-to-trough decline across simulated paths
    pub max_drawdown: f64,
    /// Fraction of paths finishing beyond breakeven in the signaled direction
    pub win_probability: f64,
    /// 2.5th / 97.5th percentile bounds of the return distribution
    pub confidence_interval_95: (f64, f64),
    pub risk_level: RiskLevel,
}
