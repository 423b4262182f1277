//! RSI (Relative Strength Index) indicator.
//!
//! This is the simple form used throughout the scanner: the average gain
//! and loss over the last `period` differences, not the Wilder-smoothed
//! recursion from the start of the series. Signal thresholds downstream
//! are calibrated against this exact formula, so it must stay as is.

/// Calculate RSI over the last `period` close-to-close differences.
///
/// RSI = 100 - (100 / (1 + RS)), RS = avg gain / avg loss.
/// Returns a neutral 50 when the series is shorter than `period + 1`,
/// and 100 when there are no losses in the window.
pub fn rsi(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in closes.len() - period..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI with the default 14 period.
pub fn rsi_default(closes: &[f64]) -> f64 {
    rsi(closes, 14)
}
