//! Calibrated constants for daylight and pace projection.

/// Earth's axial tilt as used by the declination approximation.
pub const AXIAL_TILT_DEG: f64 = 23.45;

/// Day of year of the March equinox.
pub const EQUINOX_DAY_OF_YEAR: f64 = 81.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Usable twilight added to geometric day length.
pub const CIVIL_TWILIGHT_HR: f64 = 1.0;

/// Share of daylight actually spent moving; the rest goes to breaks,
/// camp chores and meals.
pub const DEFAULT_HIKING_FRACTION: f64 = 0.75;

/// Starting guess for the duration fixed-point iteration.
pub const SEED_DAYS: f64 = 150.0;

pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Realistic paces at or below this are feasible.
pub const FEASIBLE_PACE_MPH: f64 = 3.5;

/// Realistic paces at or below this (and above
/// [`FEASIBLE_PACE_MPH`]) are very challenging; anything faster is
/// infeasible.
pub const CHALLENGING_PACE_MPH: f64 = 6.0;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Start windows are compared on this day of each month.
pub const START_WINDOW_DAY: u32 = 15;

/// March through August.
pub const START_WINDOW_MONTHS: [u32; 6] = [3, 4, 5, 6, 7, 8];

/// Appalachian Trail self-supported FKT: 40 d 18 h 6 m.
pub const FKT_DAYS: u32 = 40;
pub const FKT_HOURS: u32 = 18;
pub const FKT_MINUTES: u32 = 6;

/// Sleep assumed per day of an FKT attempt.
pub const FKT_SLEEP_HR_PER_DAY: f64 = 4.0;

pub const TYPICAL_THRU_HIKE_DAYS: f64 = 150.0;
pub const FAST_THRU_HIKE_DAYS: f64 = 90.0;

/// Fractional slowdown per percent of average grade.
pub const SLOWDOWN_PER_GRADE_PERCENT: f64 = 0.05;

/// Floor on the grade speed multiplier.
pub const MIN_PACE_MULTIPLIER: f64 = 0.3;

/// Paces (mph) for the daylight-only duration scenarios.
pub const SCENARIO_PACES_MPH: [f64; 4] = [2.5, 3.0, 3.5, 4.0];
