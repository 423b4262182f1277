pub mod engine;

pub use engine::{SignalEngine, MIN_CANDLES};
