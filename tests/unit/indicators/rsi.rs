//! Unit tests for the RSI indicator

use sigscan::indicators::momentum::rsi::{rsi, rsi_default};

#[test]
fn short_series_returns_neutral_50() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    assert_eq!(rsi(&closes, 14), 50.0);
}

#[test]
fn monotonic_gains_return_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert_eq!(rsi(&closes, 14), 100.0);
}

#[test]
fn monotonic_losses_return_0() {
    let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
    assert_eq!(rsi(&closes, 14), 0.0);
}

#[test]
fn flat_series_hits_zero_loss_guard() {
    let closes = vec![100.0; 30];
    assert_eq!(rsi(&closes, 14), 100.0);
}

#[test]
fn balanced_gains_and_losses_give_50() {
    // Alternating +1/-1 over an even window: avg gain == avg loss.
    let mut closes = vec![100.0];
    for i in 0..28 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 1.0 } else { last - 1.0 });
    }
    let value = rsi(&closes, 14);
    assert!((value - 50.0).abs() < 1e-9);
}

#[test]
fn output_always_within_bounds() {
    let series: Vec<Vec<f64>> = vec![
        (0..60).map(|i| 100.0 + ((i * 7) % 13) as f64).collect(),
        (0..60).map(|i| 500.0 - ((i * 3) % 11) as f64).collect(),
        (0..60).map(|i| 0.001 * (i + 1) as f64).collect(),
    ];
    for closes in series {
        let value = rsi(&closes, 14);
        assert!((0.0..=100.0).contains(&value), "RSI out of bounds: {}", value);
    }
}

#[test]
fn only_last_period_differences_matter() {
    // Two series that differ only before the final 14 differences.
    let mut a: Vec<f64> = (0..36).map(|i| 100.0 + (i % 5) as f64).collect();
    let mut b: Vec<f64> = (0..36).map(|i| 300.0 - (i % 7) as f64).collect();
    // 15 shared values, so all 14 window differences land inside the tail.
    let tail: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
    a.extend(&tail);
    b.extend(&tail);
    assert_eq!(rsi(&a, 14), rsi(&b, 14));
}

#[test]
fn default_period_is_14() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    assert_eq!(rsi_default(&closes), rsi(&closes, 14));
}
