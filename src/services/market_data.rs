//! Market data provider interface for the upstream feed collaborator.

use crate::models::candle::Candle;
use crate::models::signal::Timeframe;
use async_trait::async_trait;

/// Supplies time-ordered candle history per (symbol, timeframe).
///
/// Implementations own fetching, caching and rate limiting; the engine
/// only requires that candles arrive with monotonically increasing
/// timestamps (gaps allowed — the series check flags them).
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct PlaceholderMarketDataProvider;

#[async_trait]
impl MarketDataProvider for PlaceholderMarketDataProvider {
    async fn get_candles(
        &self,
        _symbol: &str,
        _timeframe: Timeframe,
        _limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Vec::new())
    }
}
