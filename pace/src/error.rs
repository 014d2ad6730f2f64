use chrono::NaiveDate;
use route::RouteError;
use thiserror::Error;
use trail::TrailError;

#[derive(Error, Debug)]
pub enum PaceError {
    #[error("{0}")]
    Route(#[from] RouteError),

    #[error("{0}")]
    Trail(#[from] TrailError),

    #[error("invalid {name} {value}, must be positive")]
    InvalidDuration { name: &'static str, value: f64 },

    #[error("invalid hiking fraction {0}, must be in (0, 1]")]
    InvalidFraction(f64),

    #[error("no daylight along the route")]
    DegenerateDaylight,

    #[error("route is empty or has zero length")]
    EmptyRoute,

    #[error("{start} plus {days} days is out of range")]
    DateOutOfRange { start: NaiveDate, days: u64 },

    #[error("no 15th of month {month} in year {year}")]
    InvalidYear { year: i32, month: u32 },

    #[error("unknown direction {0:?}, expected NOBO or SOBO")]
    InvalidDirection(String),
}

/// Returns `value` if it is a positive, finite number.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, PaceError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PaceError::InvalidDuration { name, value })
    }
}

/// Returns `fraction` if it is in (0, 1].
pub(crate) fn fraction(fraction: f64) -> Result<f64, PaceError> {
    if fraction > 0.0 && fraction <= 1.0 {
        Ok(fraction)
    } else {
        Err(PaceError::InvalidFraction(fraction))
    }
}
