use crate::domain::battery::{BatterySample, PredictionResult};
use crate::domain::ports::SampleSource;
use crate::domain::trend::TrendPredictor;
use crate::domain::validation::SeriesValidator;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// A completed analysis: the series that was analyzed plus the prediction
/// derived from it. The series is kept so presentation can chart it.
#[derive(Debug, Clone)]
pub struct BatteryAnalysis {
    pub samples: Vec<BatterySample>,
    pub prediction: PredictionResult,
}

/// Orchestrates one analysis pass: fetch the series from a source, run
/// advisory validation, then the trend predictor.
pub struct BatteryAnalysisService {
    predictor: TrendPredictor,
}

impl BatteryAnalysisService {
    pub fn new(horizon: usize) -> Self {
        Self {
            predictor: TrendPredictor::new(horizon),
        }
    }

    pub fn analyze(&self, source: &dyn SampleSource) -> Result<BatteryAnalysis> {
        let samples = source.fetch().context("Failed to fetch battery samples")?;

        if !SeriesValidator::validate_series(&samples) {
            warn!("Sample series has integrity issues, analyzing anyway");
        }

        let prediction = self
            .predictor
            .predict(&samples)
            .context("Trend prediction failed")?;

        if let Some(last) = samples.last() {
            info!(
                "Analyzed {} samples: current health {:.1}%, status {}",
                samples.len(),
                last.health_score,
                prediction.status
            );
        }

        Ok(BatteryAnalysis {
            samples,
            prediction,
        })
    }
}

impl Default for BatteryAnalysisService {
    fn default() -> Self {
        Self::new(crate::domain::trend::DEFAULT_HORIZON)
    }
}
