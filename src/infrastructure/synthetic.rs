use crate::domain::battery::BatterySample;
use crate::domain::ports::SampleSource;
use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

const BASE_VOLTAGE: f64 = 3.7;
const BASE_TEMPERATURE: f64 = 25.0;
const BASE_HEALTH: f64 = 95.0;
const DAILY_HEALTH_DECAY: f64 = 0.3;

/// Demo/empty-state generator: `days + 1` samples, one per day ending now,
/// with mild noise and a slow health decline. Seedable so demos and tests
/// are reproducible; an unseeded source draws from OS entropy.
pub struct SyntheticSampleSource {
    days: usize,
    seed: Option<u64>,
}

impl SyntheticSampleSource {
    pub fn new(days: usize) -> Self {
        Self { days, seed: None }
    }

    pub fn with_seed(days: usize, seed: u64) -> Self {
        Self {
            days,
            seed: Some(seed),
        }
    }

    fn generate(&self) -> Vec<BatterySample> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let now = Utc::now().timestamp_millis();
        let days = self.days as i64;

        let mut samples = Vec::with_capacity(self.days + 1);
        for age in (0..=days).rev() {
            let elapsed = days - age;
            samples.push(BatterySample {
                timestamp: now - age * DAY_MS,
                voltage: BASE_VOLTAGE + rng.random_range(-0.1..0.1),
                temperature: BASE_TEMPERATURE + rng.random_range(-5.0..5.0),
                cycle_count: (100 + elapsed * 2) as u32,
                health_score: (BASE_HEALTH - elapsed as f64 * DAILY_HEALTH_DECAY
                    + rng.random_range(-2.5..2.5))
                .clamp(0.0, 100.0),
            });
        }
        samples
    }
}

impl SampleSource for SyntheticSampleSource {
    fn fetch(&self) -> Result<Vec<BatterySample>> {
        let samples = self.generate();
        info!(
            "Generated {} synthetic samples spanning {} days",
            samples.len(),
            self.days
        );
        Ok(samples)
    }
}
