//! EMA (Exponential Moving Average) and the MACD line built on it.

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;

/// Calculate the EMA series for `data`.
///
/// Smoothing constant k = 2 / (period + 1), seeded with the first data
/// point, one forward pass. The output has the same length as the input
/// and its first entry equals the first input value.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len());
    let Some(&first) = data.first() else {
        return out;
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut current = first;
    out.push(current);
    for &value in &data[1..] {
        current = value * k + current * (1.0 - k);
        out.push(current);
    }
    out
}

/// MACD line at the latest point: EMA(12) - EMA(26).
///
/// Callers use the sign only (positive bullish, otherwise bearish);
/// no signal line or histogram is computed.
pub fn macd_line(closes: &[f64]) -> f64 {
    let fast = ema(closes, MACD_FAST_PERIOD);
    let slow = ema(closes, MACD_SLOW_PERIOD);
    match (fast.last(), slow.last()) {
        (Some(f), Some(s)) => f - s,
        _ => 0.0,
    }
}
