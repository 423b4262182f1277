//! sigscan: confluence signal engine for crypto candle series.
//!
//! The core is `signals::engine::SignalEngine::analyze`, a pure function
//! from (candles, strategy config) to a signal result. Everything else
//! is plumbing around it: a batch scanner worker and a stateless HTTP
//! API that both call the same engine.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use models::{Candle, IndicatorConfig, IndicatorKind, Signal, SignalResult, StrategyConfig};
pub use signals::{SignalEngine, MIN_CANDLES};
