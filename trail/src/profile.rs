use crate::{
    constants::{
        DAYS_PER_MONTH, DEFAULT_ASCENT_FT_PER_HR, DEFAULT_DESCENT_FT_PER_HR,
        DEFAULT_FLAT_SPEED_MPH, LONG_HIKING_DAY_HR, SHORT_HIKING_DAY_HR,
    },
    derive::{derive, DerivedSample},
    error::positive,
    math::{max_or_zero, mean},
    peaks::{find_peaks, find_valleys},
    Difficulty, DifficultyStats, TrailError,
};
use itertools::{Itertools, MinMaxResult};
use route::RouteSample;
use std::collections::{BTreeMap, HashMap};

/// Elevation profile of a route, with per-sample metrics derived
/// once up front.
///
/// Every aggregate is computed on demand from the immutable derived
/// samples, so queries never interfere with each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    samples: Vec<DerivedSample>,
}

/// Per-region aggregate.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub samples: usize,
    /// Distance between the region's first and last sample.
    pub miles: f64,
    pub min_elevation_ft: f64,
    pub max_elevation_ft: f64,
    pub elevation_range_ft: f64,
    pub avg_elevation_ft: f64,
    pub total_gain_ft: f64,
    pub total_loss_ft: f64,
    /// Mean |grade %|.
    pub avg_grade_percent: f64,
    /// Max |grade %|.
    pub max_grade_percent: f64,
}

/// Rates for the additive (Naismith-style) hiking time model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HikingRates {
    /// Speed on flat ground.
    pub flat_speed_mph: f64,
    /// Feet of climbing per hour, on top of flat time.
    pub ascent_ft_per_hr: f64,
    /// Feet of descent per hour, on top of flat time.
    pub descent_ft_per_hr: f64,
}

impl Default for HikingRates {
    fn default() -> Self {
        Self {
            flat_speed_mph: DEFAULT_FLAT_SPEED_MPH,
            ascent_ft_per_hr: DEFAULT_ASCENT_FT_PER_HR,
            descent_ft_per_hr: DEFAULT_DESCENT_FT_PER_HR,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HikingTime {
    pub total_hours: f64,
    pub flat_hours: f64,
    pub ascent_hours: f64,
    pub descent_hours: f64,
    /// `total_hours` split into 8 hour hiking days.
    pub days_at_8hr: f64,
    /// `total_hours` split into 10 hour hiking days.
    pub days_at_10hr: f64,
    /// `days_at_8hr` in 30 day months.
    pub months: f64,
}

/// Headline statistics for a whole route.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_distance_miles: f64,
    pub total_gain_ft: f64,
    pub total_loss_ft: f64,
    pub min_elevation_ft: f64,
    pub max_elevation_ft: f64,
    pub avg_elevation_ft: f64,
    pub elevation_range_ft: f64,
    pub significant_peaks: usize,
    pub significant_valleys: usize,
    pub avg_grade_percent: f64,
    pub max_grade_percent: f64,
    pub regions: usize,
    pub hiking_time: HikingTime,
}

impl Profile {
    /// Derives a profile from ordered route samples.
    pub fn new(samples: &[RouteSample]) -> Result<Self, TrailError> {
        Ok(Self {
            samples: derive(samples)?,
        })
    }

    pub fn samples(&self) -> &[DerivedSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distance between the first and last sample.
    pub fn total_distance(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.sample.distance_miles - first.sample.distance_miles,
            _ => 0.0,
        }
    }

    pub fn total_gain(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.cumulative_gain)
    }

    pub fn total_loss(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.cumulative_loss)
    }

    pub fn elevations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.sample.elevation_ft).collect()
    }

    /// Aggregates by region, in order of each region's first
    /// appearance along the route.
    pub fn region_breakdown(&self) -> Vec<RegionSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&DerivedSample>> = HashMap::new();
        for sample in &self.samples {
            let region = sample.sample.region.as_str();
            groups
                .entry(region)
                .or_insert_with(|| {
                    order.push(region);
                    Vec::new()
                })
                .push(sample);
        }

        order
            .into_iter()
            .filter_map(|region| groups.get(region).map(|group| summarize_region(region, group)))
            .collect()
    }

    /// Distance and grade statistics per difficulty bucket.
    ///
    /// All five buckets are always present.
    pub fn difficulty_distribution(&self) -> BTreeMap<Difficulty, DifficultyStats> {
        let mut grades: BTreeMap<Difficulty, Vec<f64>> =
            Difficulty::ALL.iter().map(|&d| (d, Vec::new())).collect();
        let mut stats: BTreeMap<Difficulty, DifficultyStats> = Difficulty::ALL
            .iter()
            .map(|&d| (d, DifficultyStats::default()))
            .collect();

        for sample in &self.samples {
            if let Some(bucket) = stats.get_mut(&sample.difficulty) {
                bucket.miles += sample.segment_distance;
                bucket.elevation_change_ft += sample.elevation_delta;
            }
            if let Some(bucket) = grades.get_mut(&sample.difficulty) {
                bucket.push(sample.grade_percent.abs());
            }
        }

        let total_miles: f64 = stats.values().map(|s| s.miles).sum();
        for (difficulty, bucket) in &mut stats {
            if let Some(grades) = grades.get(difficulty) {
                bucket.avg_grade_percent = mean(grades.iter().copied());
                bucket.max_grade_percent = max_or_zero(grades.iter().copied());
            }
            bucket.pct_of_total = if total_miles > 0.0 {
                bucket.miles / total_miles * 100.0
            } else {
                0.0
            };
        }
        stats
    }

    /// Indices of significant peaks and valleys, each in route order.
    pub fn peaks_and_valleys(&self, prominence_ft: f64) -> (Vec<usize>, Vec<usize>) {
        let elevations = self.elevations();
        let peaks = find_peaks(&elevations, prominence_ft)
            .into_iter()
            .map(|p| p.index)
            .collect();
        let valleys = find_valleys(&elevations, prominence_ft)
            .into_iter()
            .map(|v| v.index)
            .collect();
        (peaks, valleys)
    }

    /// Estimates hiking time as flat time plus climbing and descending
    /// penalties.
    pub fn hiking_time_estimate(&self, rates: &HikingRates) -> Result<HikingTime, TrailError> {
        let flat_speed = positive("flat speed", rates.flat_speed_mph)?;
        let ascent_rate = positive("ascent rate", rates.ascent_ft_per_hr)?;
        let descent_rate = positive("descent rate", rates.descent_ft_per_hr)?;

        let flat_hours = self.total_distance() / flat_speed;
        let ascent_hours = self.total_gain() / ascent_rate;
        let descent_hours = self.total_loss() / descent_rate;
        let total_hours = flat_hours + ascent_hours + descent_hours;
        let days_at_8hr = total_hours / SHORT_HIKING_DAY_HR;

        Ok(HikingTime {
            total_hours,
            flat_hours,
            ascent_hours,
            descent_hours,
            days_at_8hr,
            days_at_10hr: total_hours / LONG_HIKING_DAY_HR,
            months: days_at_8hr / DAYS_PER_MONTH,
        })
    }

    /// Headline statistics, with hiking time at default rates.
    pub fn summary(&self, prominence_ft: f64) -> Result<Summary, TrailError> {
        let (peaks, valleys) = self.peaks_and_valleys(prominence_ft);
        let (min_elevation_ft, max_elevation_ft) = min_max(self.samples.iter());
        let regions = self
            .samples
            .iter()
            .map(|s| s.sample.region.as_str())
            .unique()
            .count();

        Ok(Summary {
            total_distance_miles: self.total_distance(),
            total_gain_ft: self.total_gain(),
            total_loss_ft: self.total_loss(),
            min_elevation_ft,
            max_elevation_ft,
            avg_elevation_ft: mean(self.samples.iter().map(|s| s.sample.elevation_ft)),
            elevation_range_ft: max_elevation_ft - min_elevation_ft,
            significant_peaks: peaks.len(),
            significant_valleys: valleys.len(),
            avg_grade_percent: mean(self.samples.iter().map(|s| s.grade_percent.abs())),
            max_grade_percent: max_or_zero(self.samples.iter().map(|s| s.grade_percent.abs())),
            regions,
            hiking_time: self.hiking_time_estimate(&HikingRates::default())?,
        })
    }
}

/// Returns the (min, max) elevation of `samples`, zeros if empty.
pub(crate) fn min_max<'a, I>(samples: I) -> (f64, f64)
where
    I: Iterator<Item = &'a DerivedSample>,
{
    match samples.map(|s| s.sample.elevation_ft).minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(elevation) => (elevation, elevation),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}

fn summarize_region(region: &str, group: &[&DerivedSample]) -> RegionSummary {
    let (min_elevation_ft, max_elevation_ft) = min_max(group.iter().copied());
    let (first_mile, last_mile) = match group
        .iter()
        .map(|s| s.sample.distance_miles)
        .minmax()
    {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(mile) => (mile, mile),
        MinMaxResult::MinMax(first, last) => (first, last),
    };

    RegionSummary {
        region: region.to_owned(),
        samples: group.len(),
        miles: last_mile - first_mile,
        min_elevation_ft,
        max_elevation_ft,
        elevation_range_ft: max_elevation_ft - min_elevation_ft,
        avg_elevation_ft: mean(group.iter().map(|s| s.sample.elevation_ft)),
        total_gain_ft: group.iter().map(|s| s.elevation_delta.max(0.0)).sum(),
        total_loss_ft: group.iter().map(|s| (-s.elevation_delta).max(0.0)).sum(),
        avg_grade_percent: mean(group.iter().map(|s| s.grade_percent.abs())),
        max_grade_percent: max_or_zero(group.iter().map(|s| s.grade_percent.abs())),
    }
}
