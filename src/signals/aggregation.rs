//! Signed contribution assembly for the confluence score.
//!
//! Indicator readings, pattern matches, the regime label and adjacent
//! timeframe signals fold into one raw score on a 100-point budget.
//! Patterns and timeframe agreement only scale confidence; they are
//! clamped so they can never flip the direction the indicators chose.

use crate::config::Config;
use crate::models::indicators::{DerivedSignal, IndicatorCategory, IndicatorReading};
use crate::models::market::{MarketRegime, PatternDirection, PatternMatch, RegimeClassification};
use crate::models::signal::{Signal, SignalDirection, SignalReason};
use crate::signals::categories::{category_budget, is_oscillator};
use crate::signals::weights::WeightSnapshot;
use num_traits::ToPrimitive;
use std::collections::HashMap;

/// Everything one scoring pass consumes.
pub struct ScoreInputs<'a> {
    pub readings: &'a [IndicatorReading],
    pub patterns: &'a [PatternMatch],
    pub regime: Option<&'a RegimeClassification>,
    pub adjacent: &'a [Signal],
    pub weights: &'a WeightSnapshot,
}

/// Raw score plus the trace of how it was built.
pub struct ScoreBreakdown {
    pub raw_score: f64,
    pub reasons: Vec<SignalReason>,
    /// Indicator names that contributed a non-zero amount, for outcome
    /// attribution once the signal's horizon elapses.
    pub contributors: Vec<String>,
}

pub fn score(config: &Config, inputs: &ScoreInputs) -> ScoreBreakdown {
    let mut reasons = Vec::new();
    let mut contributors = Vec::new();

    let category_counts = count_by_category(inputs.readings);
    let regime = inputs.regime.map(|r| r.regime);

    let mut raw = 0.0;
    for reading in inputs.readings {
        let sign = match reading.signal {
            DerivedSignal::Buy => 1.0,
            DerivedSignal::Sell => -1.0,
            DerivedSignal::Neutral => continue,
        };

        let count = category_counts.get(&reading.category).copied().unwrap_or(1);
        let base = category_budget(&config.budgets, reading.category) / count as f64;
        let weight_factor =
            inputs.weights.get(&reading.name) / config.weights.default_weight;
        let mut contribution = sign * reading.strength.multiplier() * weight_factor * base;

        match regime {
            Some(MarketRegime::TrendUp) | Some(MarketRegime::TrendDown)
                if matches!(
                    reading.category,
                    IndicatorCategory::Trend | IndicatorCategory::Momentum
                ) =>
            {
                contribution *= config.regime.trending_boost;
            }
            Some(MarketRegime::Range) if is_oscillator(&reading.name) => {
                contribution *= config.regime.range_oscillator_boost;
            }
            _ => {}
        }

        raw += contribution;
        reasons.push(SignalReason {
            description: format!(
                "{} {} ({:.2})",
                reading.name,
                direction_word(reading.signal),
                reading.value
            ),
            weight: contribution,
        });
        contributors.push(reading.name.clone());
    }

    raw = apply_pattern_bonus(config, inputs.patterns, raw, &mut reasons);
    raw = apply_timeframe_confluence(config, inputs.adjacent, raw, &mut reasons);

    if let Some(classification) = inputs.regime {
        if classification.regime == MarketRegime::HighVolatility {
            let discount = config.regime.high_volatility_discount;
            raw *= discount;
            reasons.push(SignalReason {
                description: format!("high-volatility regime dampens score by {:.0}%",
                    (1.0 - discount) * 100.0),
                weight: 0.0,
            });
        }
    }

    ScoreBreakdown {
        raw_score: raw,
        reasons,
        contributors,
    }
}

/// Patterns add (never subtract) when their lean matches the indicator
/// consensus; a disagreeing pattern is ignored rather than allowed to
/// fight the direction.
fn apply_pattern_bonus(
    config: &Config,
    patterns: &[PatternMatch],
    raw: f64,
    reasons: &mut Vec<SignalReason>,
) -> f64 {
    if raw == 0.0 || patterns.is_empty() {
        return raw;
    }

    let raw_sign = raw.signum();
    let mut bonus = 0.0;
    for pattern in patterns {
        let pattern_sign = match pattern.direction {
            PatternDirection::Bullish => 1.0,
            PatternDirection::Bearish => -1.0,
            PatternDirection::Neutral => continue,
        };
        if pattern_sign != raw_sign {
            continue;
        }
        let reliability = pattern.reliability.to_f64().unwrap_or(0.0) / 100.0;
        let share = config.budgets.pattern_bonus / 3.0;
        let amount = share * reliability;
        bonus += amount;
        reasons.push(SignalReason {
            description: format!(
                "pattern {} agrees (reliability {:.0})",
                pattern.name, pattern.reliability
            ),
            weight: amount * raw_sign,
        });
    }

    raw + raw_sign * bonus.min(config.budgets.pattern_bonus)
}

/// Adjacent-timeframe agreement adds, conflict subtracts; the net
/// adjustment is floored at zero so conflict alone cannot flip a
/// direction, only erase conviction.
fn apply_timeframe_confluence(
    config: &Config,
    adjacent: &[Signal],
    raw: f64,
    reasons: &mut Vec<SignalReason>,
) -> f64 {
    let considered: Vec<&Signal> = adjacent
        .iter()
        .filter(|s| s.direction != SignalDirection::Neutral)
        .collect();
    if raw == 0.0 || considered.is_empty() {
        return raw;
    }

    let raw_sign = raw.signum();
    let share = config.budgets.timeframe_bonus / considered.len() as f64;
    let mut adjustment = 0.0;
    for signal in considered {
        let agrees = signal.direction.sign() as f64 == raw_sign;
        let amount = if agrees { share } else { -share };
        adjustment += amount;
        reasons.push(SignalReason {
            description: format!(
                "{} timeframe {}",
                signal.timeframe.as_str(),
                if agrees { "agrees" } else { "conflicts" }
            ),
            weight: amount * raw_sign,
        });
    }

    let adjusted = raw + raw_sign * adjustment;
    if raw_sign > 0.0 {
        adjusted.max(0.0)
    } else {
        adjusted.min(0.0)
    }
}

fn count_by_category(readings: &[IndicatorReading]) -> HashMap<IndicatorCategory, usize> {
    let mut counts = HashMap::new();
    for reading in readings {
        *counts.entry(reading.category).or_insert(0) += 1;
    }
    counts
}

fn direction_word(signal: DerivedSignal) -> &'static str {
    match signal {
        DerivedSignal::Buy => "bullish",
        DerivedSignal::Sell => "bearish",
        DerivedSignal::Neutral => "neutral",
    }
}
