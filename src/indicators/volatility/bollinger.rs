//! Simplified Bollinger check: SMA(20) with a fixed 2% band.
//!
//! Not a standard-deviation band on purpose. The scoring thresholds are
//! calibrated to "price more than 2% away from the 20-period mean", so a
//! textbook Bollinger computation would shift every downstream signal.

pub const SMA_PERIOD: usize = 20;
pub const BAND_PCT: f64 = 0.02;

/// Simple moving average over the last `period` values (or over the
/// whole series when it is shorter).
pub fn sma(data: &[f64], period: usize) -> f64 {
    if data.is_empty() || period == 0 {
        return 0.0;
    }
    let window = &data[data.len().saturating_sub(period)..];
    window.iter().sum::<f64>() / window.len() as f64
}

/// Price position relative to the 2% band around SMA(20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    Dip,
    Inside,
    Overextended,
}

pub fn band_position(price: f64, sma20: f64) -> BandPosition {
    if price < sma20 * (1.0 - BAND_PCT) {
        BandPosition::Dip
    } else if price > sma20 * (1.0 + BAND_PCT) {
        BandPosition::Overextended
    } else {
        BandPosition::Inside
    }
}
