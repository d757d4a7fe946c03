//! Monte Carlo simulation of a signal's return distribution.
//!
//! Paths follow geometric Brownian steps over the holding horizon; the
//! Gaussian increments come from an explicitly seeded RNG so a given
//! seed reproduces byte-identical output.

use crate::models::risk::{RiskAssessment, RiskLevel};
use crate::models::signal::{Signal, SignalDirection};
use crate::risk::{Result, RiskError};
use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Holding horizon in candles of the signal's timeframe.
pub const HOLDING_PERIOD_BARS: usize = 24;

/// Simulate the signal's holding horizon and derive distributional risk
/// metrics from the outcome paths.
///
/// `volatility` is the per-candle return standard deviation (e.g.
/// ATR/price). Returns are measured as P&L in the signaled direction,
/// so a SHORT profits when the simulated price falls. Drift comes from
/// the signal's confidence edge: confidence 50 simulates a driftless
/// market, higher conviction tilts the distribution the signaled way.
pub fn assess_risk(
    signal: &Signal,
    volatility: f64,
    iterations: u32,
    seed: Option<u64>,
) -> Result<RiskAssessment> {
    if iterations == 0 {
        return Err(RiskError::InvalidParameters(
            "iterations must be positive".to_string(),
        ));
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(RiskError::InvalidParameters(format!(
            "volatility estimate must be finite and non-negative, got {}",
            volatility
        )));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| RiskError::InvalidParameters(e.to_string()))?;

    // P&L sign convention: +1 means the position profits when price rises.
    // A NEUTRAL signal simulates the long convention with zero edge.
    let direction_sign = match signal.direction {
        SignalDirection::Short => -1.0,
        SignalDirection::Long | SignalDirection::Neutral => 1.0,
    };
    // Confidence is a directional gauge around the 50 midline, so
    // conviction is its distance from 50 regardless of direction.
    let confidence = signal.confidence.to_f64().unwrap_or(50.0);
    let edge = ((confidence - 50.0).abs() / 50.0).min(1.0);
    let horizon_vol = volatility * (HOLDING_PERIOD_BARS as f64).sqrt();
    let step_drift = direction_sign * edge * horizon_vol * 0.5 / HOLDING_PERIOD_BARS as f64;

    let mut returns = Vec::with_capacity(iterations as usize);
    let mut worst_drawdown = 0.0_f64;

    for _ in 0..iterations {
        let mut log_price = 0.0_f64;
        let mut peak_equity = 1.0_f64;
        let mut path_drawdown = 0.0_f64;

        for _ in 0..HOLDING_PERIOD_BARS {
            let z: f64 = normal.sample(&mut rng);
            log_price += step_drift + volatility * z;

            let equity = 1.0 + direction_sign * (log_price.exp() - 1.0);
            if equity > peak_equity {
                peak_equity = equity;
            } else if peak_equity > 0.0 {
                let drawdown = (peak_equity - equity) / peak_equity;
                if drawdown > path_drawdown {
                    path_drawdown = drawdown;
                }
            }
        }

        returns.push(direction_sign * (log_price.exp() - 1.0));
        if path_drawdown > worst_drawdown {
            worst_drawdown = path_drawdown;
        }
    }

    returns.sort_by(|a, b| a.total_cmp(b));

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    let p5 = percentile(&returns, 0.05);
    let lower = percentile(&returns, 0.025);
    let upper = percentile(&returns, 0.975);
    let value_at_risk_95 = (-p5).max(0.0);

    let wins = returns.iter().filter(|&&r| r > 0.0).count();
    let win_probability = wins as f64 / n;

    let horizons_per_year =
        signal.timeframe.periods_per_year() / HOLDING_PERIOD_BARS as f64;
    let sharpe_ratio = if stddev > 0.0 {
        mean / stddev * horizons_per_year.sqrt()
    } else {
        0.0
    };

    let risk_level = grade_risk(value_at_risk_95, win_probability);

    debug!(
        symbol = %signal.symbol,
        iterations,
        expected_return = mean,
        value_at_risk_95,
        win_probability,
        "risk assessment complete"
    );

    Ok(RiskAssessment {
        expected_return: mean,
        value_at_risk_95,
        sharpe_ratio,
        max_drawdown: worst_drawdown,
        win_probability,
        confidence_interval_95: (lower, upper),
        risk_level,
    })
}

/// Linear-interpolated percentile over a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        return sorted[low];
    }
    let fraction = rank - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}

/// Fixed VaR/win-probability bands.
fn grade_risk(value_at_risk_95: f64, win_probability: f64) -> RiskLevel {
    if value_at_risk_95 <= 0.02 && win_probability >= 0.55 {
        RiskLevel::Low
    } else if value_at_risk_95 <= 0.05 && win_probability >= 0.45 {
        RiskLevel::Moderate
    } else if value_at_risk_95 <= 0.10 {
        RiskLevel::High
    } else {
        RiskLevel::Extreme
    }
}
