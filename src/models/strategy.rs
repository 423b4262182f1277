//! Strategy profile data models.
//!
//! A strategy is a table of per-indicator settings plus a single
//! confidence threshold. The table is data-driven (edited by an external
//! configuration surface), but the indicator set itself is a closed enum
//! so every evaluation rule is a statically known case.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// UI-side clamp for per-indicator weights.
pub const MAX_INDICATOR_WEIGHT: f64 = 40.0;

/// Available indicator kinds.
///
/// Only RSI, MACD and the Bollinger approximation carry a scoring rule
/// today; the remaining kinds are configurable placeholders that count
/// toward the active weight but contribute no evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    Bollinger,
    Stochastic,
    Ichimoku,
    Sar,
    Cci,
    Volume,
}

impl IndicatorKind {
    /// Fixed evaluation order, so detail strings come out deterministic.
    pub const ALL: [IndicatorKind; 8] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Bollinger,
        IndicatorKind::Stochastic,
        IndicatorKind::Ichimoku,
        IndicatorKind::Sar,
        IndicatorKind::Cci,
        IndicatorKind::Volume,
    ];

    /// Whether this kind has an implemented scoring rule.
    pub fn has_scoring_rule(self) -> bool {
        matches!(
            self,
            IndicatorKind::Rsi | IndicatorKind::Macd | IndicatorKind::Bollinger
        )
    }
}

/// Per-indicator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorConfig {
    pub enabled: bool,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_high: Option<f64>,
}

impl IndicatorConfig {
    pub fn new(enabled: bool, weight: f64) -> Self {
        Self {
            enabled,
            weight,
            period: None,
            threshold_low: None,
            threshold_high: None,
        }
    }

    /// Weight as seen by the scorer: negatives contribute nothing.
    pub fn effective_weight(&self) -> f64 {
        self.weight.max(0.0)
    }
}

/// Strategy profile: indicator table plus the confidence gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyConfig {
    #[serde(default)]
    pub indicators: HashMap<IndicatorKind, IndicatorConfig>,
    pub confidence_threshold: f64,
}

impl StrategyConfig {
    /// Look up an indicator entry; a missing entry means disabled.
    pub fn indicator(&self, kind: IndicatorKind) -> Option<&IndicatorConfig> {
        self.indicators.get(&kind)
    }

    pub fn is_enabled(&self, kind: IndicatorKind) -> bool {
        self.indicator(kind).map(|c| c.enabled).unwrap_or(false)
    }

    /// Clamp weights into [0, MAX_INDICATOR_WEIGHT], the range the
    /// configuration surface enforces. The scorer does not rely on this.
    pub fn sanitized(mut self) -> Self {
        for config in self.indicators.values_mut() {
            config.weight = config.weight.clamp(0.0, MAX_INDICATOR_WEIGHT);
        }
        self.confidence_threshold = self.confidence_threshold.clamp(0.0, 100.0);
        self
    }
}

impl Default for StrategyConfig {
    /// Baseline profile: RSI 14 with 30/70 thresholds, MACD and the
    /// SMA-band check, 60% confidence gate.
    fn default() -> Self {
        let mut indicators = HashMap::new();
        indicators.insert(
            IndicatorKind::Rsi,
            IndicatorConfig {
                enabled: true,
                weight: 20.0,
                period: Some(14),
                threshold_low: Some(30.0),
                threshold_high: Some(70.0),
            },
        );
        indicators.insert(IndicatorKind::Macd, IndicatorConfig::new(true, 20.0));
        indicators.insert(IndicatorKind::Bollinger, IndicatorConfig::new(true, 15.0));
        Self {
            indicators,
            confidence_threshold: 60.0,
        }
    }
}
