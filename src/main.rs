use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use signatrix::config::Config;
use signatrix::logging::init_logging;
use signatrix::models::candle::Candle;
use signatrix::models::signal::Timeframe;
use signatrix::risk::assess_risk;
use signatrix::signals::engine::SignalEngine;
use signatrix::signals::weights::AdaptiveWeightTracker;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    let weights = Arc::new(AdaptiveWeightTracker::new(config.weights.clone()));
    let engine = SignalEngine::new(config, weights);

    let candles = build_uptrend_candles(120);
    let signal = engine.evaluate("BTC-PERP", Timeframe::H1, &candles, &[])?;
    print_signal(&signal);

    let volatility = 0.01;
    let assessment = assess_risk(&signal, volatility, 1_000, Some(42))?;
    println!("Risk profile:");
    println!("  Expected return: {:.4}%", assessment.expected_return * 100.0);
    println!("  VaR (95%): {:.4}%", assessment.value_at_risk_95 * 100.0);
    println!("  Sharpe: {:.2}", assessment.sharpe_ratio);
    println!("  Max drawdown: {:.4}%", assessment.max_drawdown * 100.0);
    println!("  Win probability: {:.2}%", assessment.win_probability * 100.0);
    println!(
        "  95% CI: [{:.4}%, {:.4}%]",
        assessment.confidence_interval_95.0 * 100.0,
        assessment.confidence_interval_95.1 * 100.0
    );
    println!("  Risk level: {:?}", assessment.risk_level);

    Ok(())
}

fn build_uptrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::hours(count as i64);
    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        let base = dec!(100) + Decimal::from(i as u32) * dec!(0.5);
        candles.push(Candle::new(
            base,
            base + dec!(0.4),
            base - dec!(0.3),
            base + dec!(0.2),
            dec!(1000) + Decimal::from(i as u32) * dec!(10),
            start + Duration::hours(i as i64),
        ));
    }
    candles
}

fn print_signal(signal: &signatrix::models::signal::Signal) {
    println!("Signal for {} ({}):", signal.symbol, signal.timeframe.as_str());
    println!("  Direction: {:?}", signal.direction);
    println!("  Confidence: {}%", signal.confidence);
    println!("  Entry: {}", signal.entry_price);
    println!("  Stop loss: {}", signal.stop_loss);
    println!("  Take profit: {}", signal.take_profit);
    println!("  Risk:reward: {}", signal.risk_reward_ratio);
    println!("  Reasons:");
    for (i, reason) in signal.reasons.iter().enumerate() {
        println!(
            "    {}. {} (weight: {:.2})",
            i + 1,
            reason.description,
            reason.weight
        );
    }
}
