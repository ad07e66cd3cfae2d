use thiserror::Error;

/// Errors related to battery trend analysis
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}
