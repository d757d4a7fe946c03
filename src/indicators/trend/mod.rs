pub mod adx;
pub mod ema;
pub mod macd;

pub use adx::{calculate_adx, calculate_adx_default};
pub use ema::{calculate_ema, calculate_ema_spread, calculate_ema_spread_default};
pub use macd::{calculate_macd, calculate_macd_default};
