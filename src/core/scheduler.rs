//! Fixed-cadence scheduler driving evaluation cycles.

use crate::core::runtime::EvaluationRuntime;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Invokes the runtime on a fixed interval.
///
/// There are no retries inside a cycle; a failed pair waits for the
/// next tick.
pub struct CycleScheduler {
    runtime: Arc<EvaluationRuntime>,
    interval: Duration,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl CycleScheduler {
    pub fn new(
        runtime: Arc<EvaluationRuntime>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("scheduler disabled: interval_seconds is 0".into());
        }
        Ok(Self {
            runtime,
            interval: Duration::from_secs(interval_seconds),
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the cycle loop.
    pub async fn start(&self) {
        let runtime = self.runtime.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            info!(interval_seconds = interval.as_secs(), "scheduler started");

            loop {
                ticker.tick().await;
                let report = runtime.run_cycle().await;
                info!(
                    evaluated = report.evaluated,
                    failed = report.failed,
                    timed_out = report.timed_out,
                    "scheduled cycle finished"
                );
            }
        });

        let mut slot = self.handle.write().await;
        *slot = Some(handle);
    }

    /// Stop the cycle loop.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
