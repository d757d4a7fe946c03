//! Adaptive per-indicator weights driven by realized outcomes.
//!
//! The weight table is the only shared mutable state in the core. The
//! scorer always reads it through `snapshot`, which clones the whole
//! table under the read lock, so an in-flight update is never observed
//! half-applied.

use crate::config::WeightConfig;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

/// Weight and rolling performance record for one indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorWeight {
    pub name: String,
    pub weight: f64,
    outcomes: VecDeque<bool>,
}

impl IndicatorWeight {
    fn new(name: String, weight: f64) -> Self {
        Self {
            name,
            weight,
            outcomes: VecDeque::new(),
        }
    }

    pub fn win_rate(&self) -> Option<f64> {
        if self.outcomes.is_empty() {
            return None;
        }
        let wins = self.outcomes.iter().filter(|&&correct| correct).count();
        Some(wins as f64 / self.outcomes.len() as f64)
    }
}

/// Consistent point-in-time view of the weight table.
#[derive(Debug, Clone)]
pub struct WeightSnapshot {
    weights: HashMap<String, f64>,
    default_weight: f64,
}

impl WeightSnapshot {
    pub fn get(&self, indicator_name: &str) -> f64 {
        self.weights
            .get(indicator_name)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

/// Owner of the mutable weight table.
pub struct AdaptiveWeightTracker {
    config: WeightConfig,
    table: RwLock<HashMap<String, IndicatorWeight>>,
}

impl AdaptiveWeightTracker {
    pub fn new(config: WeightConfig) -> Self {
        Self {
            config,
            table: RwLock::new(HashMap::new()),
        }
    }

    /// Append an outcome to the indicator's rolling window and recompute
    /// its weight from the window's win rate, clamped to the configured
    /// floor/ceiling so no indicator can dominate or vanish.
    pub fn record_outcome(&self, indicator_name: &str, was_correct: bool) {
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        let entry = table.entry(indicator_name.to_string()).or_insert_with(|| {
            IndicatorWeight::new(indicator_name.to_string(), self.config.default_weight)
        });

        entry.outcomes.push_back(was_correct);
        while entry.outcomes.len() > self.config.window {
            entry.outcomes.pop_front();
        }

        let win_rate = entry.win_rate().unwrap_or(0.5);
        let span = self.config.ceiling - self.config.floor;
        entry.weight = (self.config.floor + win_rate * span)
            .clamp(self.config.floor, self.config.ceiling);
    }

    /// Clone the whole table atomically for one evaluation.
    pub fn snapshot(&self) -> WeightSnapshot {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        WeightSnapshot {
            weights: table
                .iter()
                .map(|(name, entry)| (name.clone(), entry.weight))
                .collect(),
            default_weight: self.config.default_weight,
        }
    }

    /// Current weight entry for inspection.
    pub fn get(&self, indicator_name: &str) -> Option<IndicatorWeight> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table.get(indicator_name).cloned()
    }
}
