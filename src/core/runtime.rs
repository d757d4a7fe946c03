//! Parallel per-(symbol, timeframe) evaluation cycle.

use crate::config::Config;
use crate::models::signal::{Signal, Timeframe};
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{Evaluation, SignalEngine};
use crate::signals::weights::AdaptiveWeightTracker;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

const CANDLE_LIMIT: usize = 250;

/// Outcome counts for one evaluation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub evaluated: usize,
    pub failed: usize,
    pub timed_out: usize,
}

/// Runs the engine across all configured pairs on each cycle.
///
/// Evaluations for different pairs are independent tokio tasks; one
/// pair failing or timing out never blocks the others. The latest
/// Evaluation per pair is retained wholesale (replaced, not mutated)
/// and feeds adjacent-timeframe confluence on the next cycle.
pub struct EvaluationRuntime {
    engine: Arc<SignalEngine>,
    weights: Arc<AdaptiveWeightTracker>,
    provider: Arc<dyn MarketDataProvider>,
    symbols: Vec<String>,
    timeframes: Vec<Timeframe>,
    timeout: Duration,
    latest: Arc<RwLock<HashMap<(String, Timeframe), Evaluation>>>,
}

impl EvaluationRuntime {
    pub fn new(config: Config, provider: Arc<dyn MarketDataProvider>) -> Self {
        let weights = Arc::new(AdaptiveWeightTracker::new(config.weights.clone()));
        Self::with_weights(config, provider, weights)
    }

    pub fn with_weights(
        config: Config,
        provider: Arc<dyn MarketDataProvider>,
        weights: Arc<AdaptiveWeightTracker>,
    ) -> Self {
        let symbols = config.symbols.clone();
        let timeout = Duration::from_millis(config.evaluation_timeout_ms);
        let engine = Arc::new(SignalEngine::new(config, weights.clone()));
        Self {
            engine,
            weights,
            provider,
            symbols,
            timeframes: Timeframe::ALL.to_vec(),
            timeout,
            latest: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Restrict the evaluated timeframes (all five by default).
    pub fn with_timeframes(mut self, timeframes: Vec<Timeframe>) -> Self {
        self.timeframes = timeframes;
        self
    }

    /// Evaluate every configured (symbol, timeframe) pair once.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut handles = Vec::new();
        for symbol in &self.symbols {
            for timeframe in &self.timeframes {
                handles.push(self.spawn_evaluation(symbol.clone(), *timeframe));
            }
        }

        let mut report = CycleReport::default();
        for handle in handles {
            match handle.await {
                Ok(PairOutcome::Evaluated) => report.evaluated += 1,
                Ok(PairOutcome::Failed) => report.failed += 1,
                Ok(PairOutcome::TimedOut) => report.timed_out += 1,
                Err(join_error) => {
                    error!(error = %join_error, "evaluation task panicked");
                    report.failed += 1;
                }
            }
        }

        info!(
            evaluated = report.evaluated,
            failed = report.failed,
            timed_out = report.timed_out,
            "cycle complete"
        );
        report
    }

    fn spawn_evaluation(
        &self,
        symbol: String,
        timeframe: Timeframe,
    ) -> tokio::task::JoinHandle<PairOutcome> {
        let engine = self.engine.clone();
        let provider = self.provider.clone();
        let latest = self.latest.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let work = async {
                let candles = provider
                    .get_candles(&symbol, timeframe, CANDLE_LIMIT)
                    .await?;

                let adjacent: Vec<Signal> = {
                    let table = latest.read().await;
                    timeframe
                        .adjacent()
                        .into_iter()
                        .filter_map(|t| table.get(&(symbol.clone(), t)))
                        .map(|evaluation| evaluation.signal.clone())
                        .collect()
                };

                engine
                    .evaluate_detailed(&symbol, timeframe, &candles, &adjacent)
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
            };

            match tokio::time::timeout(timeout, work).await {
                Ok(Ok(evaluation)) => {
                    debug!(
                        symbol = %symbol,
                        timeframe = %timeframe.as_str(),
                        direction = ?evaluation.signal.direction,
                        "stored evaluation"
                    );
                    latest
                        .write()
                        .await
                        .insert((symbol, timeframe), evaluation);
                    PairOutcome::Evaluated
                }
                Ok(Err(e)) => {
                    error!(
                        symbol = %symbol,
                        timeframe = %timeframe.as_str(),
                        error = %e,
                        "evaluation failed"
                    );
                    PairOutcome::Failed
                }
                Err(_) => {
                    // Abandoned for this cycle; the next scheduled cycle
                    // naturally retries.
                    warn!(
                        symbol = %symbol,
                        timeframe = %timeframe.as_str(),
                        "evaluation exceeded time budget"
                    );
                    PairOutcome::TimedOut
                }
            }
        })
    }

    /// Latest retained signal for a pair.
    pub async fn latest_signal(&self, symbol: &str, timeframe: Timeframe) -> Option<Signal> {
        let table = self.latest.read().await;
        table
            .get(&(symbol.to_string(), timeframe))
            .map(|evaluation| evaluation.signal.clone())
    }

    /// Called by the outcome collaborator once a signal's horizon has
    /// elapsed; records the result against every indicator that
    /// contributed to that signal's score.
    pub async fn report_outcome(&self, symbol: &str, timeframe: Timeframe, was_correct: bool) {
        let contributors: Vec<String> = {
            let table = self.latest.read().await;
            match table.get(&(symbol.to_string(), timeframe)) {
                Some(evaluation) => evaluation.contributors.clone(),
                None => {
                    warn!(
                        symbol = %symbol,
                        timeframe = %timeframe.as_str(),
                        "no evaluation to attribute outcome to"
                    );
                    return;
                }
            }
        };

        for name in contributors {
            self.weights.record_outcome(&name, was_correct);
        }
    }

    pub fn weights(&self) -> Arc<AdaptiveWeightTracker> {
        self.weights.clone()
    }
}

enum PairOutcome {
    Evaluated,
    Failed,
    TimedOut,
}
