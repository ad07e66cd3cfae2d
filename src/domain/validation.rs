use crate::domain::battery::BatterySample;
use tracing::warn;

/// Advisory integrity checks for incoming sample series.
///
/// Irregular data is logged, never rejected: the predictor has defined
/// fallback arithmetic for everything except an empty series, and a noisy
/// on-device store must not be able to blank the analysis screen.
pub struct SeriesValidator;

impl SeriesValidator {
    /// Returns true if the series is clean. Logs a warning per finding.
    pub fn validate_series(series: &[BatterySample]) -> bool {
        let mut clean = true;

        for window in series.windows(2) {
            if window[1].timestamp <= window[0].timestamp {
                warn!(
                    "Validation: non-ascending timestamps {} -> {}",
                    window[0].timestamp, window[1].timestamp
                );
                clean = false;
            }
        }

        for sample in series {
            if !sample.health_score.is_finite()
                || !sample.voltage.is_finite()
                || !sample.temperature.is_finite()
            {
                warn!(
                    "Validation: non-finite reading at timestamp {}",
                    sample.timestamp
                );
                clean = false;
            } else if !(0.0..=100.0).contains(&sample.health_score) {
                warn!(
                    "Validation: health score {} out of range at timestamp {}",
                    sample.health_score, sample.timestamp
                );
                clean = false;
            }
        }

        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: i64, health_score: f64) -> BatterySample {
        BatterySample {
            timestamp,
            voltage: 3.7,
            temperature: 25.0,
            cycle_count: 10,
            health_score,
        }
    }

    #[test]
    fn test_clean_series_passes() {
        let series = vec![sample(1000, 95.0), sample(2000, 94.5), sample(3000, 94.0)];
        assert!(SeriesValidator::validate_series(&series));
    }

    #[test]
    fn test_out_of_order_timestamps_flagged() {
        let series = vec![sample(2000, 95.0), sample(1000, 94.0)];
        assert!(!SeriesValidator::validate_series(&series));
    }

    #[test]
    fn test_out_of_range_health_flagged() {
        let series = vec![sample(1000, 120.0)];
        assert!(!SeriesValidator::validate_series(&series));
    }

    #[test]
    fn test_non_finite_reading_flagged() {
        let series = vec![sample(1000, f64::NAN)];
        assert!(!SeriesValidator::validate_series(&series));
    }
}
