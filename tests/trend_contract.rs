//! Contract tests for the battery trend predictor public API.

use voltrover::domain::battery::{BatterySample, HealthStatus};
use voltrover::domain::errors::PredictionError;
use voltrover::domain::trend::{
    REC_AVOID_HIGH_TEMPERATURE, REC_REDUCE_FAST_CHARGING, REC_SCHEDULE_HEALTH_CHECK,
    TrendPredictor,
};

fn sample(day: i64, health_score: f64) -> BatterySample {
    BatterySample {
        timestamp: day * 86_400_000,
        voltage: 3.7,
        temperature: 25.0,
        cycle_count: 100 + day as u32,
        health_score,
    }
}

fn flat_series(len: usize, health_score: f64) -> Vec<BatterySample> {
    (0..len as i64).map(|i| sample(i, health_score)).collect()
}

#[test]
fn forecast_values_always_clamped() {
    // Slope of -20 per step would reach -60 well inside the horizon.
    let crashing: Vec<_> = (0..5).map(|i| sample(i, 80.0 - 20.0 * i as f64)).collect();
    let result = TrendPredictor::default().predict(&crashing).unwrap();
    assert_eq!(result.forecast.len(), 7);
    for value in &result.forecast {
        assert!((0.0..=100.0).contains(value));
    }

    // Mirror case climbing past 100.
    let climbing: Vec<_> = (0..5).map(|i| sample(i, 20.0 + 20.0 * i as f64)).collect();
    let result = TrendPredictor::default().predict(&climbing).unwrap();
    for value in &result.forecast {
        assert!((0.0..=100.0).contains(value));
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let series: Vec<_> = (0..31)
        .map(|i| sample(i, 95.0 - 0.3 * i as f64))
        .collect();
    let predictor = TrendPredictor::default();

    let first = predictor.predict(&series).unwrap();
    let second = predictor.predict(&series).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_sample_gets_flat_forecast() {
    let series = vec![BatterySample {
        timestamp: 0,
        voltage: 3.7,
        temperature: 20.0,
        cycle_count: 10,
        health_score: 73.0,
    }];

    let result = TrendPredictor::default().predict(&series).unwrap();
    assert_eq!(result.forecast, vec![73.0; 7]);
    assert_eq!(result.status, HealthStatus::Fair);
    assert_eq!(result.recommendations, vec![REC_REDUCE_FAST_CHARGING]);
}

#[test]
fn status_boundaries_are_strict() {
    let predictor = TrendPredictor::default();
    let cases = [
        (90.0, HealthStatus::Good),
        (90.1, HealthStatus::Excellent),
        (80.0, HealthStatus::Fair),
        (70.0, HealthStatus::Poor),
        (70.1, HealthStatus::Fair),
    ];

    for (score, expected) in cases {
        let result = predictor.predict(&flat_series(3, score)).unwrap();
        assert_eq!(result.status, expected, "score {score}");
    }
}

#[test]
fn regression_reproduces_an_exact_line() {
    // 100, 99, ..., 91: the next points on the line are 90, 89, ...
    let series: Vec<_> = (0..10).map(|i| sample(i, 100.0 - i as f64)).collect();
    let result = TrendPredictor::default().predict(&series).unwrap();

    for (k, value) in result.forecast.iter().enumerate() {
        assert!((value - (90.0 - k as f64)).abs() < 1e-9);
    }
}

#[test]
fn recommendation_rules_are_independent() {
    // Excellent health and cool pack, but worn cycles: only rule 3 fires.
    let mut series = flat_series(5, 95.0);
    for s in &mut series {
        s.temperature = 20.0;
    }
    series.last_mut().unwrap().cycle_count = 600;

    let result = TrendPredictor::default().predict(&series).unwrap();
    assert_eq!(result.recommendations, vec![REC_SCHEDULE_HEALTH_CHECK]);
}

#[test]
fn high_temperature_anywhere_in_series_triggers_rule() {
    // Only one hot observation, far from the end.
    let mut series = flat_series(10, 95.0);
    series[1].temperature = 38.0;

    let result = TrendPredictor::default().predict(&series).unwrap();
    assert_eq!(result.recommendations, vec![REC_AVOID_HIGH_TEMPERATURE]);
}

#[test]
fn empty_series_is_invalid_input() {
    let err = TrendPredictor::default().predict(&[]).unwrap_err();
    assert!(matches!(err, PredictionError::InvalidInput { .. }));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn custom_horizon_controls_forecast_length() {
    let series = flat_series(10, 88.0);
    assert_eq!(
        TrendPredictor::new(3).predict(&series).unwrap().forecast.len(),
        3
    );
    assert!(
        TrendPredictor::new(0)
            .predict(&series)
            .unwrap()
            .forecast
            .is_empty()
    );
}
