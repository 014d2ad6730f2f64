//! Calibrated defaults used throughout the metrics engine.

pub const FEET_PER_MILE: f64 = 5280.0;

/// Upper bounds (exclusive) of |grade %| for `Easy`, `Moderate`,
/// `Difficult` and `VeryDifficult`. Anything steeper is `Extreme`.
pub const GRADE_THRESHOLDS: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

/// Minimum prominence for a peak or valley to count as significant.
pub const DEFAULT_PROMINENCE_FT: f64 = 500.0;

pub const DEFAULT_FLAT_SPEED_MPH: f64 = 3.0;
pub const DEFAULT_ASCENT_FT_PER_HR: f64 = 1000.0;
pub const DEFAULT_DESCENT_FT_PER_HR: f64 = 2000.0;

pub const DEFAULT_WINDOW_MILES: f64 = 5.0;
pub const DEFAULT_TOUGHEST_COUNT: usize = 10;

/// Hiking hours per day used to turn hours into days.
pub const SHORT_HIKING_DAY_HR: f64 = 8.0;
pub const LONG_HIKING_DAY_HR: f64 = 10.0;

pub const DAYS_PER_MONTH: f64 = 30.0;
