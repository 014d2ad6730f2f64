use crate::{
    constants::{
        CHALLENGING_PACE_MPH, DAYS_PER_MONTH, DEFAULT_HIKING_FRACTION, DEFAULT_MAX_ITERATIONS,
        FEASIBLE_PACE_MPH, SEED_DAYS, START_WINDOW_DAY, START_WINDOW_MONTHS,
    },
    daylight::{daylight_along_route_in, validate_samples, Direction},
    error::{fraction, positive},
    PaceError,
};
use chrono::{Days, NaiveDate};
use log::{debug, trace};
use route::RouteSample;
use std::fmt;

/// Pace needed to cover a distance in a fixed number of days, hiking
/// around the clock.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPace {
    pub miles_per_day: f64,
    /// Average over all 24 hours of each day.
    pub avg_mph: f64,
}

/// Returns the constant pace that covers `total_distance` miles in
/// `total_days`.
pub fn project_constant_pace(total_distance: f64, total_days: f64) -> Result<ConstantPace, PaceError> {
    let total_days = positive("total days", total_days)?;
    Ok(ConstantPace {
        miles_per_day: total_distance / total_days,
        avg_mph: total_distance / (total_days * 24.0),
    })
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feasibility {
    Feasible,
    VeryChallenging,
    Infeasible,
}

impl Feasibility {
    pub fn label(self) -> &'static str {
        match self {
            Self::Feasible => "Feasible",
            Self::VeryChallenging => "Very Challenging",
            Self::Infeasible => "Infeasible",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pace tiers used to judge a realistic moving pace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityPolicy {
    /// Paces at or below this are [`Feasibility::Feasible`].
    pub feasible_mph: f64,
    /// Paces at or below this are [`Feasibility::VeryChallenging`].
    pub challenging_mph: f64,
}

impl Default for FeasibilityPolicy {
    fn default() -> Self {
        Self {
            feasible_mph: FEASIBLE_PACE_MPH,
            challenging_mph: CHALLENGING_PACE_MPH,
        }
    }
}

impl FeasibilityPolicy {
    pub fn classify(&self, pace_mph: f64) -> Feasibility {
        if pace_mph <= self.feasible_mph {
            Feasibility::Feasible
        } else if pace_mph <= self.challenging_mph {
            Feasibility::VeryChallenging
        } else {
            // Includes NaN.
            Feasibility::Infeasible
        }
    }
}

/// Controls the duration fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    pub max_iterations: usize,
    /// Stop early once successive estimates differ by less than this
    /// many days. `None` always runs `max_iterations` rounds.
    pub tolerance: Option<f64>,
}

impl Default for Iteration {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: None,
        }
    }
}

/// Daylight-only projection of a hike with a target duration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PaceProjection {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub direction: Direction,
    pub total_days: f64,
    pub miles_per_day: f64,
    pub avg_daylight_hours: f64,
    pub min_daylight_hours: f64,
    pub max_daylight_hours: f64,
    /// Daylight hours actually spent moving.
    pub hiking_hours_per_day: f64,
    /// Pace if every daylight hour were spent moving.
    pub required_pace_mph: f64,
    /// Pace over `hiking_hours_per_day`.
    pub realistic_pace_mph: f64,
    pub verdict: Feasibility,
}

/// How long a hike takes at a given moving pace.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DurationEstimate {
    pub target_pace_mph: f64,
    pub hiking_hours_per_day: f64,
    pub miles_per_day: f64,
    pub total_days: f64,
    pub total_months: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Daylight-only projection at a target moving pace, found by
/// fixed-point iteration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MileageEstimate {
    pub target_pace_mph: f64,
    /// Rounds run.
    pub iterations: usize,
    /// Daylight figures come from the dates of the last round.
    pub projection: PaceProjection,
}

impl MileageEstimate {
    pub fn total_months(&self) -> f64 {
        self.projection.total_days / DAYS_PER_MONTH
    }

    /// Summary row shared with fixed-hours estimates.
    pub fn duration(&self) -> DurationEstimate {
        DurationEstimate {
            target_pace_mph: self.target_pace_mph,
            hiking_hours_per_day: self.projection.hiking_hours_per_day,
            miles_per_day: self.projection.miles_per_day,
            total_days: self.projection.total_days,
            total_months: self.total_months(),
            start_date: self.projection.start_date,
            end_date: self.projection.end_date,
        }
    }
}

/// Projects hikes over a route against the daylight available along
/// the way.
///
/// ```ignore
/// let projection = PaceProjector::new(&samples)?
///     .direction(Direction::Sobo)
///     .project_daylight_constrained(start, 150.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct PaceProjector<'a> {
    samples: &'a [RouteSample],
    total_distance: f64,
    hiking_fraction: f64,
    direction: Direction,
    policy: FeasibilityPolicy,
}

impl<'a> PaceProjector<'a> {
    /// Returns a northbound projector using 75 % of daylight for
    /// hiking. Every sample is validated.
    pub fn new(samples: &'a [RouteSample]) -> Result<Self, PaceError> {
        validate_samples(samples)?;
        let total_distance = route::total_distance(samples);
        if !(total_distance.is_finite() && total_distance > 0.0) {
            return Err(PaceError::EmptyRoute);
        }
        Ok(Self {
            samples,
            total_distance,
            hiking_fraction: DEFAULT_HIKING_FRACTION,
            direction: Direction::default(),
            policy: FeasibilityPolicy::default(),
        })
    }

    /// Share of daylight spent moving, in (0, 1].
    #[must_use]
    pub fn hiking_fraction(mut self, hiking_fraction: f64) -> Self {
        self.hiking_fraction = hiking_fraction;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: FeasibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Projects a daylight-only hike finishing in `target_days`.
    pub fn project_daylight_constrained(
        &self,
        start_date: NaiveDate,
        target_days: f64,
    ) -> Result<PaceProjection, PaceError> {
        let target_days = positive("target days", target_days)?;
        let hiking_fraction = fraction(self.hiking_fraction)?;
        let daylight = self.daylight_stats(start_date, self.total_distance / target_days)?;
        self.projection(start_date, target_days, hiking_fraction, &daylight)
    }

    /// Estimates how long a daylight-only hike at `target_pace_mph`
    /// takes.
    ///
    /// Daylight depends on the dates each stretch is reached, which in
    /// turn depends on the duration, so the duration is found by
    /// fixed-point iteration from a 150 day guess.
    pub fn optimal_daily_mileage(
        &self,
        start_date: NaiveDate,
        target_pace_mph: f64,
        iteration: Iteration,
    ) -> Result<MileageEstimate, PaceError> {
        let target_pace_mph = positive("target pace", target_pace_mph)?;
        let hiking_fraction = fraction(self.hiking_fraction)?;
        let now = std::time::Instant::now();

        let mut total_days = SEED_DAYS;
        let mut daylight = None;
        let mut iterations = 0;

        while iterations < iteration.max_iterations {
            let stats = self.daylight_stats(start_date, self.total_distance / total_days)?;
            let miles_per_day = target_pace_mph * stats.avg * hiking_fraction;
            let next_days = self.total_distance / miles_per_day;
            let change = (next_days - total_days).abs();
            total_days = next_days;
            daylight = Some(stats);
            iterations += 1;
            trace!("optimal_daily_mileage; iteration: {iterations}, days: {total_days}, change: {change}");
            if iteration.tolerance.is_some_and(|tolerance| change < tolerance) {
                break;
            }
        }

        let daylight = match daylight {
            Some(daylight) => daylight,
            None => self.daylight_stats(start_date, self.total_distance / total_days)?,
        };
        debug!(
            "optimal_daily_mileage; days: {total_days}, iterations: {iterations}, exec: {:?}",
            now.elapsed()
        );
        Ok(MileageEstimate {
            target_pace_mph,
            iterations,
            projection: self.projection(start_date, total_days, hiking_fraction, &daylight)?,
        })
    }

    /// Projects a `total_days` hike from the 15th of each month,
    /// March through August of `year`.
    pub fn compare_start_windows(
        &self,
        year: i32,
        total_days: f64,
    ) -> Result<Vec<PaceProjection>, PaceError> {
        START_WINDOW_MONTHS
            .iter()
            .map(|&month| {
                let start = NaiveDate::from_ymd_opt(year, month, START_WINDOW_DAY)
                    .ok_or(PaceError::InvalidYear { year, month })?;
                self.project_daylight_constrained(start, total_days)
            })
            .collect()
    }

    fn projection(
        &self,
        start_date: NaiveDate,
        total_days: f64,
        hiking_fraction: f64,
        daylight: &DaylightStats,
    ) -> Result<PaceProjection, PaceError> {
        let miles_per_day = self.total_distance / total_days;
        let hiking_hours_per_day = daylight.avg * hiking_fraction;
        let realistic_pace_mph = miles_per_day / hiking_hours_per_day;

        Ok(PaceProjection {
            start_date,
            end_date: add_days(start_date, total_days)?,
            direction: self.direction,
            total_days,
            miles_per_day,
            avg_daylight_hours: daylight.avg,
            min_daylight_hours: daylight.min,
            max_daylight_hours: daylight.max,
            hiking_hours_per_day,
            required_pace_mph: miles_per_day / daylight.avg,
            realistic_pace_mph,
            verdict: self.policy.classify(realistic_pace_mph),
        })
    }

    fn daylight_stats(&self, start_date: NaiveDate, miles_per_day: f64) -> Result<DaylightStats, PaceError> {
        let daylight = daylight_along_route_in(self.direction, self.samples, start_date, miles_per_day)?;
        let mut stats = DaylightStats {
            avg: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        };
        for sample in &daylight {
            stats.avg += sample.daylight_hours;
            stats.min = stats.min.min(sample.daylight_hours);
            stats.max = stats.max.max(sample.daylight_hours);
        }
        #[allow(clippy::cast_precision_loss)]
        let len = daylight.len() as f64;
        stats.avg /= len;
        if stats.avg.is_nan() || stats.avg <= 0.0 {
            return Err(PaceError::DegenerateDaylight);
        }
        Ok(stats)
    }
}

struct DaylightStats {
    avg: f64,
    min: f64,
    max: f64,
}

/// Estimates how long covering `total_distance` takes at
/// `target_pace_mph` for a fixed `hours_per_day`.
pub fn duration_at_fixed_hours(
    total_distance: f64,
    start_date: NaiveDate,
    target_pace_mph: f64,
    hours_per_day: f64,
) -> Result<DurationEstimate, PaceError> {
    if !(total_distance.is_finite() && total_distance > 0.0) {
        return Err(PaceError::EmptyRoute);
    }
    let target_pace_mph = positive("target pace", target_pace_mph)?;
    let hours_per_day = positive("hours per day", hours_per_day)?;
    let miles_per_day = target_pace_mph * hours_per_day;
    let total_days = total_distance / miles_per_day;

    Ok(DurationEstimate {
        target_pace_mph,
        hiking_hours_per_day: hours_per_day,
        miles_per_day,
        total_days,
        total_months: total_days / DAYS_PER_MONTH,
        start_date,
        end_date: add_days(start_date, total_days)?,
    })
}

/// `start + ⌊days⌋`.
fn add_days(start: NaiveDate, days: f64) -> Result<NaiveDate, PaceError> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = days.floor().max(0.0) as u64;
    start
        .checked_add_days(Days::new(days))
        .ok_or(PaceError::DateOutOfRange { start, days })
}

#[cfg(test)]
mod tests {
    use super::{
        duration_at_fixed_hours, project_constant_pace, Feasibility, FeasibilityPolicy,
        Iteration, PaceProjector,
    };
    use crate::{daylight::daylight_hours, Direction, PaceError};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use route::{RouteError, RouteSample};

    /// 100 miles due along the equator, where daylight is always 13 h.
    fn equator() -> Vec<RouteSample> {
        (0..=10)
            .map(|i| {
                let mile = f64::from(i) * 10.0;
                RouteSample::new(0, mile, 0.0, -78.0 + mile / 69.0, 500.0, Some("Ecuador")).unwrap()
            })
            .collect()
    }

    fn april_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_project_constant_pace() {
        let pace = project_constant_pace(2190.0, 150.0).unwrap();
        assert_relative_eq!(pace.miles_per_day, 14.6);
        assert_relative_eq!(pace.avg_mph, 14.6 / 24.0);
        assert!(matches!(
            project_constant_pace(2190.0, 0.0),
            Err(PaceError::InvalidDuration { .. })
        ));
        assert!(project_constant_pace(2190.0, -3.0).is_err());
    }

    #[test]
    fn test_policy() {
        let policy = FeasibilityPolicy::default();
        assert_eq!(policy.classify(2.0), Feasibility::Feasible);
        assert_eq!(policy.classify(3.5), Feasibility::Feasible);
        assert_eq!(policy.classify(3.51), Feasibility::VeryChallenging);
        assert_eq!(policy.classify(6.0), Feasibility::VeryChallenging);
        assert_eq!(policy.classify(6.01), Feasibility::Infeasible);
        assert_eq!(policy.classify(f64::NAN), Feasibility::Infeasible);
    }

    #[test]
    fn test_project_daylight_constrained() {
        let samples = equator();
        let projection = PaceProjector::new(&samples)
            .unwrap()
            .project_daylight_constrained(april_first(), 10.0)
            .unwrap();
        assert_relative_eq!(projection.miles_per_day, 10.0);
        assert_relative_eq!(projection.avg_daylight_hours, 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.min_daylight_hours, 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.hiking_hours_per_day, 9.75, epsilon = 1e-9);
        assert_relative_eq!(projection.required_pace_mph, 10.0 / 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.realistic_pace_mph, 10.0 / 9.75, epsilon = 1e-9);
        assert_eq!(projection.verdict, Feasibility::Feasible);
        assert_eq!(projection.end_date, NaiveDate::from_ymd_opt(2024, 4, 11).unwrap());
        assert_eq!(projection.direction, Direction::Nobo);
    }

    #[test]
    fn test_tiny_target_is_infeasible() {
        let samples = equator();
        let projection = PaceProjector::new(&samples)
            .unwrap()
            .project_daylight_constrained(april_first(), 1.0)
            .unwrap();
        // 100 miles in 9.75 moving hours.
        assert!(projection.realistic_pace_mph > 6.0);
        assert_eq!(projection.verdict, Feasibility::Infeasible);
    }

    #[test]
    fn test_projector_errors() {
        let samples = equator();
        let projector = PaceProjector::new(&samples).unwrap();
        assert!(matches!(
            projector.project_daylight_constrained(april_first(), 0.0),
            Err(PaceError::InvalidDuration { .. })
        ));
        assert!(matches!(
            projector
                .clone()
                .hiking_fraction(1.5)
                .project_daylight_constrained(april_first(), 10.0),
            Err(PaceError::InvalidFraction(_))
        ));
        assert!(matches!(
            projector
                .clone()
                .hiking_fraction(0.0)
                .optimal_daily_mileage(april_first(), 3.0, Iteration::default()),
            Err(PaceError::InvalidFraction(_))
        ));
        assert!(matches!(
            PaceProjector::new(&[]),
            Err(PaceError::EmptyRoute)
        ));
        assert!(matches!(
            PaceProjector::new(&samples[..1]),
            Err(PaceError::EmptyRoute)
        ));
    }

    #[test]
    fn test_polar_night_is_degenerate() {
        let samples: Vec<RouteSample> = [0.0, 10.0]
            .into_iter()
            .map(|mile| RouteSample::new(0, mile, 75.0, 20.0, 0.0, None).unwrap())
            .collect();
        let start = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(daylight_hours(75.0, start), 0.0);
        assert!(matches!(
            PaceProjector::new(&samples)
                .unwrap()
                .project_daylight_constrained(start, 2.0),
            Err(PaceError::DegenerateDaylight)
        ));
    }

    #[test]
    fn test_optimal_daily_mileage() {
        let samples = equator();
        let projector = PaceProjector::new(&samples).unwrap();
        let estimate = projector
            .optimal_daily_mileage(april_first(), 2.0, Iteration::default())
            .unwrap();
        // Constant daylight converges in one round, but all ten run.
        assert_eq!(estimate.iterations, 10);
        let projection = &estimate.projection;
        assert_relative_eq!(projection.hiking_hours_per_day, 9.75, epsilon = 1e-9);
        assert_relative_eq!(projection.miles_per_day, 19.5, epsilon = 1e-9);
        assert_relative_eq!(projection.total_days, 100.0 / 19.5, epsilon = 1e-9);
        assert_relative_eq!(projection.avg_daylight_hours, 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.min_daylight_hours, 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.max_daylight_hours, 13.0, epsilon = 1e-9);
        assert_relative_eq!(projection.required_pace_mph, 1.5, epsilon = 1e-9);
        assert_relative_eq!(projection.realistic_pace_mph, 2.0, epsilon = 1e-9);
        assert_eq!(projection.verdict, Feasibility::Feasible);
        assert_eq!(projection.end_date, NaiveDate::from_ymd_opt(2024, 4, 6).unwrap());

        let duration = estimate.duration();
        assert_relative_eq!(duration.total_months, (100.0 / 19.5) / 30.0, epsilon = 1e-9);
        assert_eq!(duration.end_date, projection.end_date);

        let early = projector
            .optimal_daily_mileage(
                april_first(),
                2.0,
                Iteration {
                    max_iterations: 10,
                    tolerance: Some(1e-6),
                },
            )
            .unwrap();
        assert_eq!(early.iterations, 2);
        assert_relative_eq!(
            early.projection.total_days,
            estimate.projection.total_days,
            epsilon = 1e-9
        );

        let seed = projector
            .optimal_daily_mileage(
                april_first(),
                2.0,
                Iteration {
                    max_iterations: 0,
                    tolerance: None,
                },
            )
            .unwrap();
        assert_eq!(seed.iterations, 0);
        assert_relative_eq!(seed.projection.total_days, 150.0);
        assert_relative_eq!(seed.projection.avg_daylight_hours, 13.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_positive_pace() {
        let samples = equator();
        let projector = PaceProjector::new(&samples).unwrap();
        for pace in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                projector.optimal_daily_mileage(april_first(), pace, Iteration::default()),
                Err(PaceError::InvalidDuration {
                    name: "target pace",
                    ..
                })
            ));
            assert!(matches!(
                duration_at_fixed_hours(100.0, april_first(), pace, 10.0),
                Err(PaceError::InvalidDuration {
                    name: "target pace",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_malformed_samples() {
        let mut samples = equator();
        samples[5].distance_miles = f64::NAN;
        assert!(matches!(
            PaceProjector::new(&samples),
            Err(PaceError::Route(RouteError::InvalidSample {
                index: 5,
                field: "distance_miles",
                ..
            }))
        ));

        let mut samples = equator();
        samples[5].latitude = f64::NAN;
        assert!(matches!(
            PaceProjector::new(&samples),
            Err(PaceError::Route(RouteError::InvalidSample {
                index: 5,
                field: "latitude",
                ..
            }))
        ));
    }

    #[test]
    fn test_southbound_projection() {
        // 40 miles from 20°S to 60°S; a southbound hiker starts at
        // 60°S on the June solstice.
        let samples: Vec<RouteSample> = (0..=4)
            .map(|i| {
                let mile = f64::from(i) * 10.0;
                RouteSample::new(0, mile, -20.0 - mile, 0.0, 100.0, None).unwrap()
            })
            .collect();
        let start = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let nobo = PaceProjector::new(&samples).unwrap();
        let sobo = nobo.clone().direction(Direction::Sobo);

        let north = nobo.project_daylight_constrained(start, 4.0).unwrap();
        let south = sobo.project_daylight_constrained(start, 4.0).unwrap();
        assert_eq!(south.direction, Direction::Sobo);
        assert_relative_eq!(south.miles_per_day, 10.0);
        assert_eq!(south.end_date, NaiveDate::from_ymd_opt(2024, 6, 25).unwrap());

        let expected: f64 = (0..=4u32)
            .map(|i| {
                let date = start + chrono::Days::new(u64::from(4 - i));
                daylight_hours(-20.0 - 10.0 * f64::from(i), date)
            })
            .sum::<f64>()
            / 5.0;
        assert_relative_eq!(south.avg_daylight_hours, expected, epsilon = 1e-9);
        assert_relative_eq!(
            south.min_daylight_hours,
            daylight_hours(-60.0, start),
            epsilon = 1e-9
        );
        // Northbound reaches 60°S four days after the solstice.
        assert!(north.min_daylight_hours > south.min_daylight_hours);

        let estimate = sobo
            .optimal_daily_mileage(start, 2.0, Iteration::default())
            .unwrap();
        assert_eq!(estimate.projection.direction, Direction::Sobo);
        assert_relative_eq!(estimate.projection.realistic_pace_mph, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_duration_at_fixed_hours() {
        let estimate = duration_at_fixed_hours(2190.0, april_first(), 3.0, 10.0).unwrap();
        assert_relative_eq!(estimate.miles_per_day, 30.0);
        assert_relative_eq!(estimate.total_days, 73.0);
        assert_relative_eq!(estimate.total_months, 73.0 / 30.0);
        assert_eq!(estimate.end_date, NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
        assert!(matches!(
            duration_at_fixed_hours(0.0, april_first(), 3.0, 10.0),
            Err(PaceError::EmptyRoute)
        ));
        assert!(duration_at_fixed_hours(2190.0, april_first(), 3.0, 0.0).is_err());
    }

    #[test]
    fn test_compare_start_windows() {
        let samples = equator();
        let windows = PaceProjector::new(&samples)
            .unwrap()
            .compare_start_windows(2024, 10.0)
            .unwrap();
        assert_eq!(windows.len(), 6);
        assert_eq!(windows[0].start_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(windows[5].start_date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
        assert!(windows.iter().all(|w| w.verdict == Feasibility::Feasible));
    }
}
