//! Fixed high-precision decimal arithmetic for indicator math.
//!
//! Every arithmetic step in the indicator pipeline routes through this
//! module instead of native floating point, so round-off never compounds
//! across recursive calculations like the EMA chain inside MACD.

pub mod stats;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("decimal overflow in {op}")]
    Overflow { op: &'static str },

    #[error("value is not finite")]
    NonFinite,

    #[error("value {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("need at least {required} values, got {got}")]
    InsufficientValues { required: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MathError>;

pub fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(MathError::Overflow { op: "add" })
}

pub fn sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or(MathError::Overflow { op: "sub" })
}

pub fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or(MathError::Overflow { op: "mul" })
}

pub fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    a.checked_div(b).ok_or(MathError::Overflow { op: "div" })
}

/// Convert an f64 boundary value into the decimal domain.
///
/// NaN and infinities are rejected rather than silently truncated.
pub fn from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(MathError::NonFinite);
    }
    Decimal::from_f64(value).ok_or(MathError::NonFinite)
}

/// Assert a computed value lies within an optional closed range.
///
/// Indicators call this on their final outputs (e.g. RSI must land in
/// [0, 100]); a violation indicates a computation defect, not bad input.
pub fn validate(value: Decimal, range: Option<(Decimal, Decimal)>) -> Result<Decimal> {
    if let Some((min, max)) = range {
        if value < min || value > max {
            return Err(MathError::OutOfRange { value, min, max });
        }
    }
    Ok(value)
}
