use crate::domain::battery::BatterySample;
use anyhow::Result;

/// Supplies the historical series the predictor consumes.
///
/// Implementations: the on-disk history store and the synthetic demo
/// generator. The core is synchronous, so the port is too.
pub trait SampleSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<BatterySample>>;
}
