//! Signal evaluation interfaces.

pub mod aggregation;
pub mod categories;
pub mod decision;
pub mod engine;
pub mod scoring;
pub mod weights;

pub use engine::{Evaluation, SignalEngine};
pub use weights::{AdaptiveWeightTracker, WeightSnapshot};
