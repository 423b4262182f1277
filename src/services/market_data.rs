//! Market data provider interface and the exchange-backed implementation.

use crate::models::candle::{is_time_ordered, Candle};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, warn};

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait MarketDataProvider {
    /// Fetch up to `limit` historical candles for a symbol, oldest first.
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError>;
}

/// Provider reading klines from a Binance-compatible REST endpoint.
pub struct BinanceMarketDataProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceMarketDataProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for BinanceMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );

        let fetch = || async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<Candle>>()
                .await
        };

        let candles = fetch
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(3),
            )
            .notify(|err: &reqwest::Error, dur: Duration| {
                warn!(error = %err, retry_in = ?dur, "Kline fetch failed, retrying");
            })
            .await?;

        if !is_time_ordered(&candles) {
            warn!(symbol = %symbol, "Kline series is not time-ordered");
        }
        debug!(
            symbol = %symbol,
            count = candles.len(),
            "Fetched {} candles for {}",
            candles.len(),
            symbol
        );

        Ok(candles)
    }
}
