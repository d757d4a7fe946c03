use crate::precision::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// Recoverable: the caller treats the indicator as unavailable.
    #[error("insufficient data: need {required} candles, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("total volume is zero over the window")]
    ZeroVolume,

    #[error(transparent)]
    Math(#[from] MathError),

    /// A computed result broke a documented invariant; this is a
    /// computation defect, never bad input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Guard a minimum candle count, the common front door of every indicator.
pub fn require_candles(got: usize, required: usize) -> Result<()> {
    if got < required {
        return Err(IndicatorError::InsufficientData { required, got });
    }
    Ok(())
}
