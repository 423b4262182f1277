//! Unit tests for candle parsing

use chrono::{TimeZone, Utc};
use sigscan::models::candle::{is_time_ordered, Candle};

#[test]
fn parses_object_form() {
    let json = r#"{
        "open": 100.0,
        "high": 101.5,
        "low": 99.5,
        "close": 100.8,
        "volume": 1250.0,
        "open_time": "2024-01-01T00:00:00Z"
    }"#;
    let candle: Candle = serde_json::from_str(json).unwrap();
    assert_eq!(candle.close, 100.8);
    assert_eq!(candle.open_time, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn parses_exchange_kline_row_with_string_prices() {
    // Binance-style row: ms open time, stringified prices, extra columns.
    let json = r#"[
        1704067200000,
        "100.0", "101.5", "99.5", "100.8", "1250.0",
        1704070799999, "126000.0", 842, "600.0", "60480.0", "0"
    ]"#;
    let candle: Candle = serde_json::from_str(json).unwrap();
    assert_eq!(candle.open, 100.0);
    assert_eq!(candle.high, 101.5);
    assert_eq!(candle.low, 99.5);
    assert_eq!(candle.close, 100.8);
    assert_eq!(candle.volume, 1250.0);
    assert_eq!(candle.open_time.timestamp_millis(), 1_704_067_200_000);
}

#[test]
fn parses_kline_row_with_numeric_prices() {
    let json = "[1704067200000, 100.0, 101.5, 99.5, 100.8, 1250.0]";
    let candle: Candle = serde_json::from_str(json).unwrap();
    assert_eq!(candle.close, 100.8);
}

#[test]
fn rejects_short_kline_row() {
    let json = "[1704067200000, 100.0, 101.5]";
    assert!(serde_json::from_str::<Candle>(json).is_err());
}

#[test]
fn rejects_non_positive_prices() {
    let json = "[1704067200000, 100.0, 101.5, 99.5, -1.0, 1250.0]";
    assert!(serde_json::from_str::<Candle>(json).is_err());
}

#[test]
fn rejects_non_numeric_kline_field() {
    let json = r#"[1704067200000, "abc", "101.5", "99.5", "100.8", "1250.0"]"#;
    assert!(serde_json::from_str::<Candle>(json).is_err());
}

#[test]
fn serialized_candles_round_trip() {
    let candle = Candle::new(
        100.0,
        101.5,
        99.5,
        100.8,
        1250.0,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    );
    let json = serde_json::to_string(&candle).unwrap();
    let back: Candle = serde_json::from_str(&json).unwrap();
    assert_eq!(candle, back);
}

#[test]
fn detects_out_of_order_series() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
    let a = Candle::new(100.0, 101.0, 99.0, 100.5, 10.0, t0);
    let b = Candle::new(100.5, 102.0, 100.0, 101.0, 10.0, t1);
    assert!(is_time_ordered(&[a.clone(), b.clone()]));
    assert!(!is_time_ordered(&[b, a]));
}
