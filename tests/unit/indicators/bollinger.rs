//! Unit tests for the SMA band approximation

use sigscan::indicators::volatility::bollinger::{band_position, sma, BandPosition, SMA_PERIOD};

#[test]
fn sma_averages_last_period() {
    // 30 values; the last 20 are 11..=30, average 20.5.
    let data: Vec<f64> = (1..=30).map(|i| i as f64).collect();
    assert!((sma(&data, SMA_PERIOD) - 20.5).abs() < 1e-12);
}

#[test]
fn sma_of_short_series_averages_everything() {
    let data = vec![10.0, 20.0, 30.0];
    assert!((sma(&data, SMA_PERIOD) - 20.0).abs() < 1e-12);
}

#[test]
fn sma_of_empty_series_is_zero() {
    assert_eq!(sma(&[], SMA_PERIOD), 0.0);
}

#[test]
fn price_well_below_band_is_a_dip() {
    assert_eq!(band_position(95.0, 100.0), BandPosition::Dip);
}

#[test]
fn price_well_above_band_is_overextended() {
    assert_eq!(band_position(105.0, 100.0), BandPosition::Overextended);
}

#[test]
fn price_at_mean_is_inside() {
    assert_eq!(band_position(100.0, 100.0), BandPosition::Inside);
}

#[test]
fn band_edges_are_exclusive() {
    // Exactly 2% away does not fire either side.
    assert_eq!(band_position(98.0, 100.0), BandPosition::Inside);
    assert_eq!(band_position(102.0, 100.0), BandPosition::Inside);
}
