use thiserror::Error;

/// Raised when a workout record breaks the positive-input contract the
/// metric formulas rely on.
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),

    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),

    #[error("height must be a positive number of centimetres, got {0}")]
    InvalidHeight(f64),

    #[error("pool length must be a positive number of metres, got {0}")]
    InvalidPoolLength(f64),
}

pub(crate) fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
