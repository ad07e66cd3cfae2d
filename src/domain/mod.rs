// Battery telemetry domain
pub mod battery;

// Trend projection and health classification
pub mod trend;

// Port interfaces
pub mod ports;

// Advisory series integrity checks
pub mod validation;

// Domain-specific error types
pub mod errors;
