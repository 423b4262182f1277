//! Batch scanner driving the signal engine over a symbol list.
//!
//! All scheduling state (cursor, batching, cadence) lives here, outside
//! the engine. Each analysis call gets an immutable config snapshot and
//! its own candle series, so concurrent schedulers never share state.

use crate::metrics::Metrics;
use crate::models::signal::Signal;
use crate::models::strategy::StrategyConfig;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::SignalEngine;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    config: StrategyConfig,
    symbols: Vec<String>,
    batch_size: usize,
    candle_interval: String,
    candle_limit: usize,
    cursor: usize,
    metrics: Option<Arc<Metrics>>,
}

impl Scanner {
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        config: StrategyConfig,
        symbols: Vec<String>,
        batch_size: usize,
        candle_interval: String,
        candle_limit: usize,
    ) -> Self {
        Self {
            provider,
            config,
            symbols,
            batch_size: batch_size.max(1),
            candle_interval,
            candle_limit,
            cursor: 0,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Symbols for the next cycle, advancing the rotating cursor.
    fn next_batch(&mut self) -> Vec<String> {
        if self.symbols.is_empty() {
            return Vec::new();
        }
        let mut batch = Vec::with_capacity(self.batch_size.min(self.symbols.len()));
        for _ in 0..self.batch_size.min(self.symbols.len()) {
            batch.push(self.symbols[self.cursor].clone());
            self.cursor = (self.cursor + 1) % self.symbols.len();
        }
        batch
    }

    /// Run one scan cycle: fetch and analyze the next symbol batch.
    pub async fn run_cycle(&mut self) {
        let batch = self.next_batch();
        if batch.is_empty() {
            warn!("Scanner has no symbols configured, skipping cycle");
            return;
        }
        debug!(batch = ?batch, "Scanning batch of {} symbols", batch.len());

        for symbol in batch {
            let start = Instant::now();

            let candles = match self
                .provider
                .get_candles(&symbol, &self.candle_interval, self.candle_limit)
                .await
            {
                Ok(candles) => candles,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Candle fetch failed for {}", symbol);
                    continue;
                }
            };

            let result = SignalEngine::analyze(&candles, &self.config);

            if let Some(ref metrics) = self.metrics {
                metrics.scans_total.inc();
                metrics
                    .scan_duration_seconds
                    .observe(start.elapsed().as_secs_f64());
            }

            match result.signal {
                Signal::Neutral => {
                    debug!(symbol = %symbol, "No signal for {}", symbol);
                }
                direction => {
                    info!(
                        symbol = %symbol,
                        direction = ?direction,
                        confidence = result.confidence,
                        details = ?result.details,
                        "Signal for {}: {:?} ({:.1}%)",
                        symbol,
                        direction,
                        result.confidence
                    );
                    if let Some(ref metrics) = self.metrics {
                        let label = match direction {
                            Signal::Buy => "buy",
                            Signal::Sell => "sell",
                            Signal::Neutral => "neutral",
                        };
                        metrics.record_signal(label);
                    }
                }
            }
        }
    }
}
