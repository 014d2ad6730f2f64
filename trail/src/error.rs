use route::RouteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrailError {
    #[error("{0}")]
    Route(#[from] RouteError),

    #[error("invalid {name} {value}, must be positive")]
    InvalidRate { name: &'static str, value: f64 },
}

/// Returns `value` if it is a positive, finite number.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, TrailError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrailError::InvalidRate { name, value })
    }
}
