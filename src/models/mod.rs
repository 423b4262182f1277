//! Shared data models spanning the engine layers.

pub mod candle;
pub mod signal;
pub mod strategy;

pub use candle::{is_time_ordered, Candle};
pub use signal::{Signal, SignalResult, INSUFFICIENT_DATA};
pub use strategy::{IndicatorConfig, IndicatorKind, StrategyConfig, MAX_INDICATOR_WEIGHT};
