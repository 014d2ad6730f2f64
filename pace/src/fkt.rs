//! Fastest known time (FKT) analysis: what the record pace looks like
//! on a given route, how it compares to ordinary thru-hikes, and what
//! it would take hiking by daylight only.

use crate::{
    constants::{
        FAST_THRU_HIKE_DAYS, FKT_DAYS, FKT_HOURS, FKT_MINUTES,
        FKT_SLEEP_HR_PER_DAY, MIN_PACE_MULTIPLIER, SCENARIO_PACES_MPH,
        SLOWDOWN_PER_GRADE_PERCENT, TYPICAL_THRU_HIKE_DAYS,
    },
    error::positive,
    projector::{Iteration, MileageEstimate, PaceProjection, PaceProjector},
    PaceError,
};
use chrono::NaiveDate;
use route::RouteSample;
use std::fmt;
use trail::{DaySegment, Difficulty, Profile};

/// A completed-hike duration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FktRecord {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Default for FktRecord {
    /// The Appalachian Trail self-supported record.
    fn default() -> Self {
        Self {
            days: FKT_DAYS,
            hours: FKT_HOURS,
            minutes: FKT_MINUTES,
        }
    }
}

impl FktRecord {
    pub fn total_hours(&self) -> f64 {
        f64::from(self.days) * 24.0 + f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }

    pub fn total_minutes(&self) -> u32 {
        (self.days * 24 + self.hours) * 60 + self.minutes
    }

    /// Days and hours as fractional days; minutes are dropped.
    pub fn elapsed_days(&self) -> f64 {
        f64::from(self.days) + f64::from(self.hours) / 24.0
    }
}

impl fmt::Display for FktRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FktMetrics {
    pub record: FktRecord,
    pub total_hours: f64,
    pub distance_miles: f64,
    pub total_gain_ft: f64,
    /// Over the whole elapsed time.
    pub avg_mph: f64,
    /// Over elapsed time less assumed sleep.
    pub moving_mph: f64,
    pub minutes_per_mile: f64,
    pub miles_per_day: f64,
    pub hiking_hours: f64,
    pub hiking_hours_per_day: f64,
    pub gain_per_hour_ft: f64,
    pub gain_per_day_ft: f64,
    /// How many times faster than a typical 150 day thru-hike.
    pub vs_typical: f64,
    /// How many times faster than a fast 90 day thru-hike.
    pub vs_fast: f64,
}

/// One row of the pacing strategy comparison.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PacingStrategy {
    pub name: &'static str,
    pub total_days: f64,
    pub miles_per_day: f64,
    /// Hours on the trail per day, including breaks.
    pub hours_per_day: f64,
    pub moving_mph: f64,
    pub difficulty: &'static str,
}

/// Name, days, hours on trail and hours moving per day, difficulty.
const THRU_HIKES: [(&str, f64, f64, f64, &str); 4] = [
    ("Ultra-Fast Thru-hike", 60.0, 16.0, 14.0, "Very Hard"),
    ("Fast Thru-hike", FAST_THRU_HIKE_DAYS, 12.0, 10.0, "Hard"),
    ("Typical Thru-hike", TYPICAL_THRU_HIKE_DAYS, 10.0, 8.0, "Moderate"),
    ("Leisurely Thru-hike", 180.0, 8.0, 6.0, "Easy"),
];

/// Record moving pace needed on one terrain bucket.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainPace {
    pub difficulty: Difficulty,
    pub miles: f64,
    pub pct_of_trail: f64,
    pub avg_grade_percent: f64,
    pub required_mph: f64,
    /// Flat-ground pace equivalent to `required_mph` on this grade.
    pub equivalent_flat_mph: f64,
    pub hours: f64,
}

/// The record duration hiked by daylight only from a given start.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightScenario {
    pub name: &'static str,
    pub projection: PaceProjection,
}

/// FKT analysis of a route.
#[derive(Debug, Clone)]
pub struct FktAnalysis<'a> {
    samples: &'a [RouteSample],
    profile: Profile,
    record: FktRecord,
}

impl<'a> FktAnalysis<'a> {
    pub fn new(samples: &'a [RouteSample]) -> Result<Self, PaceError> {
        let profile = Profile::new(samples)?;
        if profile.total_distance().is_nan() || profile.total_distance() <= 0.0 {
            return Err(PaceError::EmptyRoute);
        }
        Ok(Self {
            samples,
            profile,
            record: FktRecord::default(),
        })
    }

    #[must_use]
    pub fn record(mut self, record: FktRecord) -> Self {
        self.record = record;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn metrics(&self) -> Result<FktMetrics, PaceError> {
        let record = self.record;
        let total_hours = positive("record hours", record.total_hours())?;
        let elapsed_days = positive("record days", record.elapsed_days())?;
        let distance = self.profile.total_distance();
        let gain = self.profile.total_gain();

        let hiking_hours = total_hours - FKT_SLEEP_HR_PER_DAY * f64::from(record.days);
        let moving_mph = if hiking_hours > 0.0 {
            distance / hiking_hours
        } else {
            0.0
        };
        let per_day = |value: f64| {
            if record.days > 0 {
                value / f64::from(record.days)
            } else {
                0.0
            }
        };

        Ok(FktMetrics {
            record,
            total_hours,
            distance_miles: distance,
            total_gain_ft: gain,
            avg_mph: distance / total_hours,
            moving_mph,
            minutes_per_mile: total_hours * 60.0 / distance,
            miles_per_day: distance / elapsed_days,
            hiking_hours,
            hiking_hours_per_day: per_day(hiking_hours),
            gain_per_hour_ft: gain / total_hours,
            gain_per_day_ft: per_day(gain),
            vs_typical: TYPICAL_THRU_HIKE_DAYS / elapsed_days,
            vs_fast: FAST_THRU_HIKE_DAYS / elapsed_days,
        })
    }

    /// The record next to common thru-hike strategies, fastest first.
    pub fn strategies(&self) -> Result<Vec<PacingStrategy>, PaceError> {
        let metrics = self.metrics()?;
        let distance = metrics.distance_miles;

        let mut strategies = vec![PacingStrategy {
            name: "FKT Record",
            total_days: self.record.elapsed_days(),
            miles_per_day: metrics.miles_per_day,
            hours_per_day: metrics.hiking_hours_per_day + FKT_SLEEP_HR_PER_DAY,
            moving_mph: metrics.moving_mph,
            difficulty: "Extreme Elite",
        }];
        strategies.extend(THRU_HIKES.iter().map(
            |&(name, total_days, hours_per_day, moving_hours, difficulty)| PacingStrategy {
                name,
                total_days,
                miles_per_day: distance / total_days,
                hours_per_day,
                moving_mph: distance / total_days / moving_hours,
                difficulty,
            },
        ));
        Ok(strategies)
    }

    /// Record moving pace per terrain bucket, with the flat-ground
    /// equivalent assuming each percent of grade costs 5 % of speed.
    /// Buckets the route never enters are left out.
    pub fn pace_by_terrain(&self) -> Result<Vec<TerrainPace>, PaceError> {
        let required_mph = self.metrics()?.moving_mph;
        let distance = self.profile.total_distance();

        Ok(self
            .profile
            .difficulty_distribution()
            .into_iter()
            .filter(|(_, stats)| stats.miles > 0.0)
            .map(|(difficulty, stats)| {
                let multiplier = (1.0 - stats.avg_grade_percent * SLOWDOWN_PER_GRADE_PERCENT)
                    .max(MIN_PACE_MULTIPLIER);
                TerrainPace {
                    difficulty,
                    miles: stats.miles,
                    pct_of_trail: stats.miles / distance * 100.0,
                    avg_grade_percent: stats.avg_grade_percent,
                    required_mph,
                    equivalent_flat_mph: required_mph / multiplier,
                    hours: if required_mph > 0.0 {
                        stats.miles / required_mph
                    } else {
                        0.0
                    },
                }
            })
            .collect())
    }

    /// Day by day breakdown at record pace.
    pub fn daily_segments(&self) -> Result<Vec<DaySegment>, PaceError> {
        let miles_per_day = self.metrics()?.miles_per_day;
        Ok(self.profile.daily_segments(miles_per_day)?)
    }

    /// The record duration by daylight only, starting April 1 and
    /// June 15 of `year`.
    pub fn daylight_scenarios(&self, year: i32) -> Result<Vec<DaylightScenario>, PaceError> {
        let projector = PaceProjector::new(self.samples)?;
        let target_days = self.record.elapsed_days();
        [
            ("Spring Start (Apr 1)", 4, 1),
            ("Summer Start (Jun 15)", 6, 15),
        ]
        .into_iter()
        .map(|(name, month, day)| {
            let start = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(PaceError::InvalidYear { year, month })?;
            Ok(DaylightScenario {
                name,
                projection: projector.project_daylight_constrained(start, target_days)?,
            })
        })
        .collect()
    }

    /// Daylight-only durations at 2.5 to 4 mph from `start_date`.
    pub fn duration_scenarios(&self, start_date: NaiveDate) -> Result<Vec<MileageEstimate>, PaceError> {
        let projector = PaceProjector::new(self.samples)?;
        SCENARIO_PACES_MPH
            .iter()
            .map(|&pace| projector.optimal_daily_mileage(start_date, pace, Iteration::default()))
            .collect()
    }
}
