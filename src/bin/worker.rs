//! Sigscan Worker
//!
//! Scans symbol batches on a fixed cadence and logs the signals the
//! engine produces. Runs as a separate process from the API server.

use dotenvy::dotenv;
use sigscan::config::{load_strategy_config, Settings};
use sigscan::core::scanner::Scanner;
use sigscan::logging;
use sigscan::metrics::Metrics;
use sigscan::services::market_data::{BinanceMarketDataProvider, MarketDataProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let settings = Settings::from_env();
    info!("Starting Sigscan Worker");
    info!(environment = %settings.environment, "Environment");

    if settings.scan_interval_seconds == 0 {
        return Err("SCAN_INTERVAL_SECONDS must be > 0 for worker".into());
    }
    if settings.symbols.is_empty() {
        return Err("SYMBOLS must not be empty for worker".into());
    }

    let strategy = load_strategy_config();
    info!(
        interval = settings.scan_interval_seconds,
        batch_size = settings.scan_batch_size,
        symbols = ?settings.symbols,
        threshold = strategy.confidence_threshold,
        "Scanning {} symbols every {}s in batches of {}",
        settings.symbols.len(),
        settings.scan_interval_seconds,
        settings.scan_batch_size
    );

    let metrics = Arc::new(Metrics::new()?);
    let provider: Arc<dyn MarketDataProvider + Send + Sync> = Arc::new(
        BinanceMarketDataProvider::new(settings.market_data_base_url.clone()),
    );

    let mut scanner = Scanner::new(
        provider,
        strategy,
        settings.symbols.clone(),
        settings.scan_batch_size,
        settings.candle_interval.clone(),
        settings.candle_limit,
    )
    .with_metrics(metrics);

    let mut ticker = tokio::time::interval(Duration::from_secs(settings.scan_interval_seconds));
    info!("Worker started, waiting for shutdown signal...");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                scanner.run_cycle().await;
            }
            _ = signal::ctrl_c() => {
                info!("Shutting down worker...");
                break;
            }
        }
    }

    info!("Worker stopped");
    Ok(())
}
