//! Day length from a simplified sunrise equation.
//!
//! Solar declination is approximated as `23.45° · sin(360/365 · (d − 81))`
//! for day of year `d`, and the sunrise hour angle `H` follows from
//! `cos H = −tan(φ) · tan(δ)`. Geometric day length is `2H / 15`
//! hours; an hour of civil twilight is added on top, since hikers can
//! use it.

use crate::{
    constants::{AXIAL_TILT_DEG, CIVIL_TWILIGHT_HR, DAYS_PER_YEAR, EQUINOX_DAY_OF_YEAR},
    error::positive,
    PaceError,
};
use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use route::RouteSample;
use std::{fmt, str::FromStr};

/// Returns the hours of usable daylight at `latitude_deg` on `date`,
/// in `[0, 24]`.
///
/// Latitudes beyond the poles are clamped to ±90°. A non-finite
/// latitude has no daylight.
pub fn daylight_hours(latitude_deg: f64, date: NaiveDate) -> f64 {
    if !latitude_deg.is_finite() {
        return 0.0;
    }
    let latitude_deg = latitude_deg.clamp(-90.0, 90.0);
    let day_of_year = f64::from(date.ordinal());
    let declination_deg = AXIAL_TILT_DEG
        * (360.0 / DAYS_PER_YEAR * (day_of_year - EQUINOX_DAY_OF_YEAR))
            .to_radians()
            .sin();
    let cos_hour_angle = -latitude_deg.to_radians().tan() * declination_deg.to_radians().tan();

    if cos_hour_angle > 1.0 {
        // polar night
        return 0.0;
    }
    if cos_hour_angle < -1.0 {
        // polar day
        return 24.0;
    }

    let hour_angle_deg = cos_hour_angle.acos().to_degrees();
    (2.0 * hour_angle_deg / 15.0 + CIVIL_TWILIGHT_HR).clamp(0.0, 24.0)
}

/// Hiking direction along a route stored south to north.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Northbound; the route's first sample is day zero.
    #[default]
    Nobo,
    /// Southbound; the route's last sample is day zero.
    Sobo,
}

impl Direction {
    /// Miles hiked to reach `sample`, walking from the start of this
    /// direction.
    fn elapsed_miles(self, samples: &[RouteSample], sample: &RouteSample) -> f64 {
        let elapsed = match (self, samples.first(), samples.last()) {
            (Self::Nobo, Some(first), _) => sample.distance_miles - first.distance_miles,
            (Self::Sobo, _, Some(last)) => last.distance_miles - sample.distance_miles,
            _ => 0.0,
        };
        elapsed.max(0.0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nobo => "NOBO",
            Self::Sobo => "SOBO",
        })
    }
}

impl FromStr for Direction {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nobo" | "northbound" => Ok(Self::Nobo),
            "sobo" | "southbound" => Ok(Self::Sobo),
            _ => Err(PaceError::InvalidDirection(s.to_owned())),
        }
    }
}

/// Daylight at one route sample on the day a hiker is projected to
/// reach it.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightSample {
    pub distance_miles: f64,
    pub latitude: f64,
    pub region: String,
    pub date: NaiveDate,
    pub day_of_year: u32,
    pub daylight_hours: f64,
}

/// Projects a northbound hike starting on `start_date` at a steady
/// `miles_per_day` and returns the daylight at each sample, in input
/// order.
pub fn daylight_along_route(
    samples: &[RouteSample],
    start_date: NaiveDate,
    miles_per_day: f64,
) -> Result<Vec<DaylightSample>, PaceError> {
    daylight_along_route_in(Direction::Nobo, samples, start_date, miles_per_day)
}

/// Like [`daylight_along_route`], hiking in `direction`.
///
/// A sample reached after `m` elapsed miles is dated
/// `start_date + ⌊m / miles_per_day⌋` days. Every sample is validated
/// first.
pub fn daylight_along_route_in(
    direction: Direction,
    samples: &[RouteSample],
    start_date: NaiveDate,
    miles_per_day: f64,
) -> Result<Vec<DaylightSample>, PaceError> {
    let miles_per_day = positive("miles per day", miles_per_day)?;
    validate_samples(samples)?;
    let now = std::time::Instant::now();

    let daylight = samples
        .iter()
        .map(|sample| {
            let elapsed = direction.elapsed_miles(samples, sample);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let days = (elapsed / miles_per_day).floor() as u64;
            let date = start_date
                .checked_add_days(Days::new(days))
                .ok_or(PaceError::DateOutOfRange {
                    start: start_date,
                    days,
                })?;
            Ok(DaylightSample {
                distance_miles: sample.distance_miles,
                latitude: sample.latitude,
                region: sample.region.clone(),
                date,
                day_of_year: date.ordinal(),
                daylight_hours: daylight_hours(sample.latitude, date),
            })
        })
        .collect::<Result<Vec<_>, PaceError>>()?;

    debug!(
        "daylight_along_route; direction: {direction}, len: {}, exec: {:?}",
        daylight.len(),
        now.elapsed()
    );
    Ok(daylight)
}

pub(crate) fn validate_samples(samples: &[RouteSample]) -> Result<(), PaceError> {
    samples
        .iter()
        .enumerate()
        .try_for_each(|(index, sample)| sample.validate(index))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{daylight_along_route, daylight_along_route_in, daylight_hours, Direction};
    use crate::PaceError;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;
    use route::{RouteError, RouteSample};

    fn day(ordinal: u32) -> NaiveDate {
        NaiveDate::from_yo_opt(2023, ordinal).unwrap()
    }

    #[test]
    fn test_daylight_hours() {
        assert_abs_diff_eq!(daylight_hours(45.0, day(172)), 16.427612245368245, epsilon = 1e-9);
        assert_abs_diff_eq!(daylight_hours(45.0, day(355)), 9.572387754631759, epsilon = 1e-9);
        assert_abs_diff_eq!(daylight_hours(34.6, day(75)), 12.777451965903042, epsilon = 1e-9);
    }

    #[test]
    fn test_equator() {
        for ordinal in [1, 81, 172, 266, 355] {
            assert_abs_diff_eq!(daylight_hours(0.0, day(ordinal)), 13.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_polar() {
        assert_eq!(daylight_hours(70.0, day(355)), 0.0);
        assert_eq!(daylight_hours(70.0, day(172)), 24.0);
        assert_eq!(daylight_hours(-70.0, day(355)), 24.0);
    }

    #[test]
    fn test_out_of_range_latitude() {
        assert_eq!(daylight_hours(f64::NAN, day(172)), 0.0);
        assert_eq!(daylight_hours(f64::INFINITY, day(172)), 0.0);
        assert_eq!(daylight_hours(100.0, day(172)), daylight_hours(90.0, day(172)));
        assert_eq!(daylight_hours(-100.0, day(172)), 0.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!("nobo".parse::<Direction>().unwrap(), Direction::Nobo);
        assert_eq!("SOBO".parse::<Direction>().unwrap(), Direction::Sobo);
        assert_eq!("Southbound".parse::<Direction>().unwrap(), Direction::Sobo);
        assert!(matches!(
            "east".parse::<Direction>(),
            Err(PaceError::InvalidDirection(_))
        ));
        assert_eq!(Direction::default().to_string(), "NOBO");
    }

    fn route() -> Vec<RouteSample> {
        [(0.0, 34.6), (10.0, 35.0), (25.0, 35.5), (30.0, 36.0)]
            .into_iter()
            .map(|(mile, lat)| RouteSample::new(0, mile, lat, -84.0, 1000.0, None).unwrap())
            .collect()
    }

    #[test]
    fn test_daylight_along_route() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let daylight = daylight_along_route(&route(), start, 10.0).unwrap();
        let dates: Vec<NaiveDate> = daylight.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                start,
                NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
            ]
        );
        assert_eq!(daylight[1].day_of_year, 93);
        assert_eq!(daylight[3].latitude, 36.0);
        assert_eq!(daylight[3].daylight_hours, daylight_hours(36.0, dates[3]));
    }

    #[test]
    fn test_southbound_starts_at_the_end() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let daylight = daylight_along_route_in(Direction::Sobo, &route(), start, 10.0).unwrap();
        // Output stays in route order.
        assert_eq!(daylight[0].distance_miles, 0.0);
        assert_eq!(daylight[0].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(daylight[2].date, start);
        assert_eq!(daylight[3].date, start);
    }

    #[test]
    fn test_invalid_miles_per_day() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(matches!(
            daylight_along_route(&route(), start, 0.0),
            Err(PaceError::InvalidDuration { .. })
        ));
        assert!(daylight_along_route(&[], start, 10.0).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_samples() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let mut samples = route();
        samples[2].distance_miles = f64::NAN;
        assert!(matches!(
            daylight_along_route(&samples, start, 10.0),
            Err(PaceError::Route(RouteError::InvalidSample {
                index: 2,
                field: "distance_miles",
                ..
            }))
        ));

        let mut samples = route();
        samples[1].latitude = f64::NAN;
        assert!(matches!(
            daylight_along_route_in(Direction::Sobo, &samples, start, 10.0),
            Err(PaceError::Route(RouteError::InvalidSample {
                index: 1,
                field: "latitude",
                ..
            }))
        ));
    }

    #[test]
    fn test_date_out_of_range() {
        let start = NaiveDate::MAX;
        assert!(matches!(
            daylight_along_route(&route(), start, 10.0),
            Err(PaceError::DateOutOfRange { days: 1, .. })
        ));
    }
}
