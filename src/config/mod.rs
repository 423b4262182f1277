//! Environment-driven configuration.

use crate::models::strategy::StrategyConfig;
use std::env;
use tracing::warn;

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime settings for the scanner worker and API server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: String,
    pub port: u16,
    pub symbols: Vec<String>,
    pub scan_interval_seconds: u64,
    /// Symbols analyzed per cycle; staggered batches keep the upstream
    /// market-data API within its rate limits.
    pub scan_batch_size: usize,
    pub candle_limit: usize,
    pub candle_interval: String,
    pub market_data_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: 8080,
            symbols: vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()],
            scan_interval_seconds: 60,
            scan_batch_size: 10,
            candle_limit: 100,
            candle_interval: "1h".to_string(),
            market_data_base_url: "https://api.binance.com".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: get_environment(),
            port: parse_env("PORT", defaults.port),
            symbols: env::var("SYMBOLS")
                .map(|s| {
                    s.split(',')
                        .map(|sym| sym.trim().to_uppercase())
                        .filter(|sym| !sym.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.symbols),
            scan_interval_seconds: parse_env("SCAN_INTERVAL_SECONDS", defaults.scan_interval_seconds),
            scan_batch_size: parse_env("SCAN_BATCH_SIZE", defaults.scan_batch_size),
            candle_limit: parse_env("CANDLE_LIMIT", defaults.candle_limit),
            candle_interval: env::var("CANDLE_INTERVAL").unwrap_or(defaults.candle_interval),
            market_data_base_url: env::var("MARKET_DATA_BASE_URL")
                .unwrap_or(defaults.market_data_base_url),
        }
    }
}

/// Strategy profile from the STRATEGY_CONFIG env var (JSON), falling back
/// to the baseline profile. Weights are clamped on the way in.
pub fn load_strategy_config() -> StrategyConfig {
    let config = match env::var("STRATEGY_CONFIG") {
        Ok(raw) => match serde_json::from_str::<StrategyConfig>(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Invalid STRATEGY_CONFIG JSON, using default profile");
                StrategyConfig::default()
            }
        },
        Err(_) => StrategyConfig::default(),
    };
    config.sanitized()
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
