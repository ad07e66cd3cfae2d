use crate::domain::battery::{BatterySample, HealthStatus, PredictionResult};
use crate::domain::errors::PredictionError;

/// Default number of future steps to project.
pub const DEFAULT_HORIZON: usize = 7;

/// Advisory messages, in fixed evaluation order.
pub const REC_REDUCE_FAST_CHARGING: &str = "reduce fast-charging frequency.";
pub const REC_AVOID_HIGH_TEMPERATURE: &str = "avoid charging in high-temperature conditions.";
pub const REC_SCHEDULE_HEALTH_CHECK: &str = "schedule a battery health check.";

const LOW_HEALTH_THRESHOLD: f64 = 85.0;
const HIGH_TEMPERATURE_THRESHOLD: f64 = 35.0;
const HIGH_CYCLE_COUNT_THRESHOLD: u32 = 500;

/// Projects battery health forward with an ordinary least-squares fit of
/// health score against sample index, and classifies the current state.
///
/// The regression deliberately uses the 0-based position in the series as
/// the independent variable, not the timestamp: the production data source
/// supplies one sample per day, so index spacing and day spacing coincide,
/// and downstream consumers depend on the index-based numbers.
pub struct TrendPredictor {
    horizon: usize,
}

impl TrendPredictor {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    /// Run the full analysis over an ascending-by-timestamp series.
    ///
    /// Pure and deterministic: same series, same result. The only error is
    /// an empty series; a single-sample series falls back to a zero-slope
    /// (flat) forecast.
    pub fn predict(&self, series: &[BatterySample]) -> Result<PredictionResult, PredictionError> {
        let last = series.last().ok_or_else(|| PredictionError::InvalidInput {
            reason: "series is empty".to_string(),
        })?;

        let forecast = self.project_health(series);
        let status = HealthStatus::from_score(last.health_score);
        let recommendations = Self::recommendations(series, last);

        Ok(PredictionResult {
            forecast,
            status,
            recommendations,
        })
    }

    /// Least-squares projection of the next `horizon` health scores.
    fn project_health(&self, series: &[BatterySample]) -> Vec<f64> {
        let n = series.len();
        let n_f = n as f64;

        let mean_x = (0..n).map(|i| i as f64).sum::<f64>() / n_f;
        let mean_y = series.iter().map(|s| s.health_score).sum::<f64>() / n_f;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, sample) in series.iter().enumerate() {
            let dx = i as f64 - mean_x;
            numerator += dx * (sample.health_score - mean_y);
            denominator += dx * dx;
        }

        // Zero denominator means all x identical, only possible at n == 1.
        // Flat forecast at the single observed score.
        let slope = if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        };
        let intercept = mean_y - slope * mean_x;

        (0..self.horizon)
            .map(|k| (slope * (n + k) as f64 + intercept).clamp(0.0, 100.0))
            .collect()
    }

    /// Advisory rules: evaluated independently, appended in fixed order.
    fn recommendations(series: &[BatterySample], last: &BatterySample) -> Vec<String> {
        let mut out = Vec::new();

        if last.health_score < LOW_HEALTH_THRESHOLD {
            out.push(REC_REDUCE_FAST_CHARGING.to_string());
        }

        let max_temperature = series
            .iter()
            .map(|s| s.temperature)
            .fold(f64::NEG_INFINITY, f64::max);
        if max_temperature > HIGH_TEMPERATURE_THRESHOLD {
            out.push(REC_AVOID_HIGH_TEMPERATURE.to_string());
        }

        if last.cycle_count > HIGH_CYCLE_COUNT_THRESHOLD {
            out.push(REC_SCHEDULE_HEALTH_CHECK.to_string());
        }

        out
    }
}

impl Default for TrendPredictor {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}
