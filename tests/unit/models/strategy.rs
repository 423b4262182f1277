//! Unit tests for strategy configuration

use sigscan::models::strategy::{
    IndicatorConfig, IndicatorKind, StrategyConfig, MAX_INDICATOR_WEIGHT,
};

#[test]
fn deserializes_dashboard_json() {
    let json = r#"{
        "indicators": {
            "rsi": {
                "enabled": true,
                "weight": 20.0,
                "period": 14,
                "thresholdLow": 30.0,
                "thresholdHigh": 70.0
            },
            "macd": { "enabled": false, "weight": 15.0 }
        },
        "confidenceThreshold": 65.0
    }"#;
    let config: StrategyConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.confidence_threshold, 65.0);
    let rsi = config.indicator(IndicatorKind::Rsi).unwrap();
    assert!(rsi.enabled);
    assert_eq!(rsi.threshold_low, Some(30.0));
    assert!(!config.is_enabled(IndicatorKind::Macd));
    assert!(!config.is_enabled(IndicatorKind::Ichimoku));
}

#[test]
fn missing_entries_read_as_disabled() {
    let config = StrategyConfig {
        indicators: Default::default(),
        confidence_threshold: 50.0,
    };
    for kind in IndicatorKind::ALL {
        assert!(!config.is_enabled(kind));
        assert!(config.indicator(kind).is_none());
    }
}

#[test]
fn sanitized_clamps_weights_and_threshold() {
    let mut config = StrategyConfig::default();
    config
        .indicators
        .insert(IndicatorKind::Cci, IndicatorConfig::new(true, 500.0));
    config
        .indicators
        .insert(IndicatorKind::Sar, IndicatorConfig::new(true, -3.0));
    config.confidence_threshold = 250.0;

    let config = config.sanitized();
    assert_eq!(
        config.indicator(IndicatorKind::Cci).unwrap().weight,
        MAX_INDICATOR_WEIGHT
    );
    assert_eq!(config.indicator(IndicatorKind::Sar).unwrap().weight, 0.0);
    assert_eq!(config.confidence_threshold, 100.0);
}

#[test]
fn negative_weight_has_zero_effect() {
    let config = IndicatorConfig::new(true, -10.0);
    assert_eq!(config.effective_weight(), 0.0);
}

#[test]
fn scoring_rules_cover_the_implemented_kinds() {
    assert!(IndicatorKind::Rsi.has_scoring_rule());
    assert!(IndicatorKind::Macd.has_scoring_rule());
    assert!(IndicatorKind::Bollinger.has_scoring_rule());
    assert!(!IndicatorKind::Stochastic.has_scoring_rule());
    assert!(!IndicatorKind::Volume.has_scoring_rule());
}

#[test]
fn default_profile_enables_the_scored_indicators() {
    let config = StrategyConfig::default();
    assert!(config.is_enabled(IndicatorKind::Rsi));
    assert!(config.is_enabled(IndicatorKind::Macd));
    assert!(config.is_enabled(IndicatorKind::Bollinger));
    assert!(!config.is_enabled(IndicatorKind::Stochastic));
}

#[test]
fn config_round_trips_through_json() {
    let config = StrategyConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("confidenceThreshold"));
    let back: StrategyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.confidence_threshold, config.confidence_threshold);
    assert_eq!(back.indicators.len(), config.indicators.len());
}
