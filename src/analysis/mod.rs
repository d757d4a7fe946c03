//! Price-structure analysis: chart patterns and market regime.

pub mod patterns;
pub mod regime;

pub use patterns::{detect_patterns, PatternInputs};
pub use regime::classify_regime;
