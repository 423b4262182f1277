//! Candle (OHLCV) market data model.
//!
//! Candles deserialize from two wire shapes: the object form this crate
//! serializes, and the raw exchange kline row
//! `[openTime_ms, open, high, low, close, volume, ...]` where the numeric
//! fields may be JSON numbers or strings. Extra trailing columns are
//! ignored.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV price bar for a fixed time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandleRepr")]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub open_time: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        open_time: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            open_time,
        }
    }
}

/// A valid series is non-decreasing in open time.
pub fn is_time_ordered(candles: &[Candle]) -> bool {
    candles.windows(2).all(|w| w[0].open_time <= w[1].open_time)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CandleRepr {
    Object {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        #[serde(alias = "openTime", alias = "timestamp")]
        open_time: DateTime<Utc>,
    },
    Row(Vec<KlineField>),
}

/// Exchange kline rows mix numbers and stringified numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum KlineField {
    Num(f64),
    Text(String),
}

impl KlineField {
    fn as_f64(&self) -> Result<f64, String> {
        match self {
            KlineField::Num(n) => Ok(*n),
            KlineField::Text(s) => s
                .parse::<f64>()
                .map_err(|_| format!("non-numeric kline field: {:?}", s)),
        }
    }
}

impl TryFrom<CandleRepr> for Candle {
    type Error = String;

    fn try_from(repr: CandleRepr) -> Result<Self, Self::Error> {
        let candle = match repr {
            CandleRepr::Object {
                open,
                high,
                low,
                close,
                volume,
                open_time,
            } => Candle::new(open, high, low, close, volume, open_time),
            CandleRepr::Row(fields) => {
                if fields.len() < 6 {
                    return Err(format!(
                        "kline row has {} fields, expected at least 6",
                        fields.len()
                    ));
                }
                let open_time_ms = fields[0].as_f64()? as i64;
                let open_time = Utc
                    .timestamp_millis_opt(open_time_ms)
                    .single()
                    .ok_or_else(|| format!("invalid kline open time: {}", open_time_ms))?;
                Candle::new(
                    fields[1].as_f64()?,
                    fields[2].as_f64()?,
                    fields[3].as_f64()?,
                    fields[4].as_f64()?,
                    fields[5].as_f64()?,
                    open_time,
                )
            }
        };

        for (name, value) in [
            ("open", candle.open),
            ("high", candle.high),
            ("low", candle.low),
            ("close", candle.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("invalid candle {}: {}", name, value));
            }
        }
        if !candle.volume.is_finite() || candle.volume < 0.0 {
            return Err(format!("invalid candle volume: {}", candle.volume));
        }

        Ok(candle)
    }
}
