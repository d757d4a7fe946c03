//! Probabilistic risk profiling for generated signals.

pub mod monte_carlo;

pub use monte_carlo::{assess_risk, HOLDING_PERIOD_BARS};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Caller error: rejected synchronously, no partial result.
    #[error("invalid risk parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, RiskError>;
