//! Signal output contract.

use serde::{Deserialize, Serialize};

pub const INSUFFICIENT_DATA: &str = "Insufficient data";

/// Trading signal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

/// Result of one analysis call.
///
/// Constructed fresh per call and immutable after that; persistence is a
/// caller concern. `confidence` is 0-100 and only meaningful for
/// non-neutral signals; `details` lists which indicators fired and why,
/// in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub confidence: f64,
    pub details: Vec<String>,
}

impl SignalResult {
    pub fn new(signal: Signal, confidence: f64, details: Vec<String>) -> Self {
        Self {
            signal,
            confidence,
            details,
        }
    }

    pub fn neutral(details: Vec<String>) -> Self {
        Self::new(Signal::Neutral, 0.0, details)
    }

    /// Neutral result for a series shorter than the engine minimum.
    pub fn insufficient_data() -> Self {
        Self::neutral(vec![INSUFFICIENT_DATA.to_string()])
    }

    pub fn is_actionable(&self) -> bool {
        self.signal != Signal::Neutral
    }
}
