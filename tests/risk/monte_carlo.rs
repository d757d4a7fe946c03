//! Unit tests for the Monte Carlo risk simulator

use chrono::Utc;
use rust_decimal_macros::dec;
use signatrix::models::signal::{Signal, SignalDirection, Timeframe};
use signatrix::risk::{assess_risk, RiskError, HOLDING_PERIOD_BARS};

fn long_signal(confidence: rust_decimal::Decimal) -> Signal {
    Signal {
        symbol: "BTC-PERP".to_string(),
        timeframe: Timeframe::H1,
        direction: SignalDirection::Long,
        confidence,
        entry_price: dec!(100),
        stop_loss: dec!(97),
        take_profit: dec!(105),
        risk_reward_ratio: dec!(1.66),
        reasons: Vec::new(),
        timestamp: Utc::now(),
    }
}

fn short_signal(confidence: rust_decimal::Decimal) -> Signal {
    Signal {
        direction: SignalDirection::Short,
        stop_loss: dec!(103),
        take_profit: dec!(95),
        ..long_signal(confidence)
    }
}

#[test]
fn test_zero_iterations_rejected() {
    let result = assess_risk(&long_signal(dec!(70)), 0.01, 0, Some(1));
    assert!(matches!(result, Err(RiskError::InvalidParameters(_))));
}

#[test]
fn test_negative_volatility_rejected() {
    let result = assess_risk(&long_signal(dec!(70)), -0.01, 1_000, Some(1));
    assert!(matches!(result, Err(RiskError::InvalidParameters(_))));
}

#[test]
fn test_non_finite_volatility_rejected() {
    for volatility in [f64::NAN, f64::INFINITY] {
        let result = assess_risk(&long_signal(dec!(70)), volatility, 1_000, Some(1));
        assert!(matches!(result, Err(RiskError::InvalidParameters(_))));
    }
}

#[test]
fn test_fixed_seed_reproduces_identical_output() {
    let signal = long_signal(dec!(70));
    let first = assess_risk(&signal, 0.01, 2_000, Some(42)).unwrap();
    let second = assess_risk(&signal, 0.01, 2_000, Some(42)).unwrap();
    assert_eq!(first.expected_return, second.expected_return);
    assert_eq!(first.value_at_risk_95, second.value_at_risk_95);
    assert_eq!(first.sharpe_ratio, second.sharpe_ratio);
    assert_eq!(first.max_drawdown, second.max_drawdown);
    assert_eq!(first.win_probability, second.win_probability);
    assert_eq!(first.confidence_interval_95, second.confidence_interval_95);
    assert_eq!(first.risk_level, second.risk_level);
}

#[test]
fn test_different_seeds_diverge() {
    let signal = long_signal(dec!(70));
    let first = assess_risk(&signal, 0.01, 2_000, Some(1)).unwrap();
    let second = assess_risk(&signal, 0.01, 2_000, Some(2)).unwrap();
    assert_ne!(first.expected_return, second.expected_return);
}

#[test]
fn test_metrics_are_coherent() {
    let assessment = assess_risk(&long_signal(dec!(80)), 0.02, 5_000, Some(7)).unwrap();
    assert!(assessment.value_at_risk_95 >= 0.0);
    assert!(assessment.max_drawdown >= 0.0);
    assert!((0.0..=1.0).contains(&assessment.win_probability));
    let (lower, upper) = assessment.confidence_interval_95;
    assert!(lower <= upper);
    assert!(assessment.expected_return >= lower);
    assert!(assessment.expected_return <= upper);
}

#[test]
fn test_confidence_edge_tilts_short_pnl_positive() {
    // A high-conviction SHORT drifts the simulated market down, which is
    // positive P&L in the signaled direction.
    let assessment = assess_risk(&short_signal(dec!(90)), 0.01, 20_000, Some(11)).unwrap();
    assert!(assessment.expected_return > 0.0);
    assert!(assessment.win_probability > 0.5);
}

#[test]
fn test_expected_return_converges_to_analytic_mean() {
    // Confidence 50 means zero drift: terminal return is lognormal with
    // E[r] = exp(H * vol^2 / 2) - 1 for H holding steps.
    let volatility = 0.01;
    let assessment =
        assess_risk(&long_signal(dec!(50)), volatility, 100_000, Some(99)).unwrap();
    let analytic =
        (HOLDING_PERIOD_BARS as f64 * volatility * volatility / 2.0).exp() - 1.0;
    assert!(
        (assessment.expected_return - analytic).abs() < 1e-3,
        "expected {} to be within 1e-3 of {}",
        assessment.expected_return,
        analytic
    );
}
