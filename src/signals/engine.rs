//! Weighted confluence scoring engine.
//!
//! The single authoritative decision procedure mapping (candles, strategy
//! config) to a signal. Pure and stateless: every call site (interactive
//! polling loop, background worker, hosted job) runs this same function
//! and therefore agrees on identical inputs.

use crate::indicators::momentum::rsi::rsi;
use crate::indicators::trend::ema::macd_line;
use crate::indicators::volatility::bollinger::{band_position, sma, BandPosition, SMA_PERIOD};
use crate::models::candle::Candle;
use crate::models::signal::{Signal, SignalResult};
use crate::models::strategy::{IndicatorKind, StrategyConfig};

/// Minimum usable series length, set by the slowest indicator.
pub const MIN_CANDLES: usize = 50;

const DEFAULT_RSI_PERIOD: usize = 14;
const DEFAULT_RSI_LOW: f64 = 30.0;
const DEFAULT_RSI_HIGH: f64 = 70.0;

pub struct SignalEngine;

impl SignalEngine {
    /// Analyze a candle series against a strategy profile.
    ///
    /// Each enabled indicator votes buy or sell evidence weighted by its
    /// configured points. Votes are normalized by the total enabled
    /// weight into 0-100 confidences; the stronger side wins only when
    /// it also clears the profile's confidence threshold. Exact ties
    /// resolve to neutral.
    pub fn analyze(candles: &[Candle], config: &StrategyConfig) -> SignalResult {
        if candles.len() < MIN_CANDLES {
            return SignalResult::insufficient_data();
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let current_price = match closes.last() {
            Some(&price) => price,
            None => return SignalResult::insufficient_data(),
        };

        let mut score_buy = 0.0;
        let mut score_sell = 0.0;
        let mut total_active_weight = 0.0;
        let mut details = Vec::new();

        for kind in IndicatorKind::ALL {
            let Some(indicator) = config.indicator(kind) else {
                continue;
            };
            if !indicator.enabled {
                continue;
            }
            let weight = indicator.effective_weight();
            total_active_weight += weight;

            match kind {
                IndicatorKind::Rsi => {
                    let period = indicator.period.unwrap_or(DEFAULT_RSI_PERIOD);
                    let value = rsi(&closes, period);
                    let low = indicator.threshold_low.unwrap_or(DEFAULT_RSI_LOW);
                    let high = indicator.threshold_high.unwrap_or(DEFAULT_RSI_HIGH);
                    if value < low {
                        score_buy += weight;
                        details.push(format!("RSI {:.1} (Oversold)", value));
                    } else if value > high {
                        score_sell += weight;
                        details.push(format!("RSI {:.1} (Overbought)", value));
                    }
                }
                IndicatorKind::Macd => {
                    let line = macd_line(&closes);
                    if line > 0.0 {
                        score_buy += weight;
                        details.push(format!("MACD {:.4} (Bullish)", line));
                    } else {
                        score_sell += weight;
                        details.push(format!("MACD {:.4} (Bearish)", line));
                    }
                }
                IndicatorKind::Bollinger => {
                    let sma20 = sma(&closes, SMA_PERIOD);
                    match band_position(current_price, sma20) {
                        BandPosition::Dip => {
                            score_buy += weight;
                            details.push(format!(
                                "Price {:.2} below SMA20 {:.2} (Dip)",
                                current_price, sma20
                            ));
                        }
                        BandPosition::Overextended => {
                            score_sell += weight;
                            details.push(format!(
                                "Price {:.2} above SMA20 {:.2} (Overextended)",
                                current_price, sma20
                            ));
                        }
                        BandPosition::Inside => {}
                    }
                }
                // No scoring rule yet: counts toward the active weight,
                // contributes no evidence.
                IndicatorKind::Stochastic
                | IndicatorKind::Ichimoku
                | IndicatorKind::Sar
                | IndicatorKind::Cci
                | IndicatorKind::Volume => {}
            }
        }

        // Floor at 1 so an all-disabled profile cannot divide by zero.
        let total_active_weight = total_active_weight.max(1.0);
        let confidence_buy = (score_buy / total_active_weight * 100.0).min(100.0);
        let confidence_sell = (score_sell / total_active_weight * 100.0).min(100.0);

        if confidence_buy > confidence_sell && confidence_buy >= config.confidence_threshold {
            SignalResult::new(Signal::Buy, confidence_buy, details)
        } else if confidence_sell > confidence_buy && confidence_sell >= config.confidence_threshold
        {
            SignalResult::new(Signal::Sell, confidence_sell, details)
        } else {
            SignalResult::neutral(details)
        }
    }
}
