use serde::{Deserialize, Serialize};
use std::fmt;

/// One battery telemetry observation.
///
/// Serialized as camelCase to stay compatible with the JSON blobs the
/// mobile client stores on-device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySample {
    /// Observation time, epoch milliseconds. Ascending within a series.
    pub timestamp: i64,
    /// Nominal cell/pack voltage reading.
    pub voltage: f64,
    /// Ambient/pack temperature in °C.
    pub temperature: f64,
    /// Cumulative charge cycles at this observation.
    pub cycle_count: u32,
    /// Synthetic health percentage, clamped to [0, 100].
    pub health_score: f64,
}

/// Categorical battery health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    /// Classify a health score. Thresholds are strict lower bounds,
    /// evaluated top-down: a score of exactly 90.0 is Good, not Excellent.
    pub fn from_score(score: f64) -> Self {
        if score > 90.0 {
            HealthStatus::Excellent
        } else if score > 80.0 {
            HealthStatus::Good
        } else if score > 70.0 {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Excellent => write!(f, "Excellent"),
            HealthStatus::Good => write!(f, "Good"),
            HealthStatus::Fair => write!(f, "Fair"),
            HealthStatus::Poor => write!(f, "Poor"),
        }
    }
}

/// Output of a trend prediction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted health score for each future step, clamped to [0, 100].
    /// Length equals the configured horizon.
    pub forecast: Vec<f64>,
    /// Classification of the most recent sample's health score.
    pub status: HealthStatus,
    /// Advisory messages in fixed evaluation order. May be empty.
    pub recommendations: Vec<String>,
}
