pub mod vwap;

pub use vwap::calculate_vwap;
