use crate::{error::positive, math::mean, profile::min_max, DerivedSample, Profile, TrailError};
use log::debug;
use std::cmp::Ordering;

/// One day's stretch of a multi-day hike.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DaySegment {
    /// 1-based.
    pub day: usize,
    /// Miles from the start of the route.
    pub start_mile: f64,
    pub end_mile: f64,
    pub miles: f64,
    pub starting_region: String,
    pub ending_region: String,
    pub min_elevation_ft: f64,
    pub max_elevation_ft: f64,
    pub avg_elevation_ft: f64,
    pub gain_ft: f64,
    pub loss_ft: f64,
}

impl Profile {
    /// Splits the route into consecutive days of `miles_per_day`; the
    /// last day takes whatever remains.
    ///
    /// A day covers the samples in `[start_mile, end_mile)`, except the
    /// last, which also takes the final sample. Days that contain no
    /// samples are skipped, so day numbers may have gaps on sparse
    /// routes.
    pub fn daily_segments(&self, miles_per_day: f64) -> Result<Vec<DaySegment>, TrailError> {
        let miles_per_day = positive("miles per day", miles_per_day)?;
        let now = std::time::Instant::now();
        let samples = self.samples();
        let Some(origin) = samples.first().map(|s| s.sample.distance_miles) else {
            return Ok(Vec::new());
        };
        let total = self.total_distance();

        let mut segments = Vec::new();
        let mut day = 1;
        let mut start_mile = 0.0;
        while start_mile < total {
            let end_mile = (start_mile + miles_per_day).min(total);
            if end_mile <= start_mile {
                break;
            }
            let last_day = end_mile >= total;
            let in_day: Vec<&DerivedSample> = samples
                .iter()
                .filter(|s| {
                    let mile = s.sample.distance_miles - origin;
                    mile >= start_mile && (mile < end_mile || (last_day && mile <= end_mile))
                })
                .collect();

            if let (Some(first), Some(last)) = (in_day.first(), in_day.last()) {
                let (min_elevation_ft, max_elevation_ft) = min_max(in_day.iter().copied());
                segments.push(DaySegment {
                    day,
                    start_mile,
                    end_mile,
                    miles: end_mile - start_mile,
                    starting_region: first.sample.region.clone(),
                    ending_region: last.sample.region.clone(),
                    min_elevation_ft,
                    max_elevation_ft,
                    avg_elevation_ft: mean(in_day.iter().map(|s| s.sample.elevation_ft)),
                    gain_ft: in_day.iter().map(|s| s.elevation_delta.max(0.0)).sum(),
                    loss_ft: in_day.iter().map(|s| (-s.elevation_delta).max(0.0)).sum(),
                });
            }

            start_mile = end_mile;
            day += 1;
        }

        debug!(
            "daily_segments; days: {}, miles_per_day: {miles_per_day}, exec: {:?}",
            segments.len(),
            now.elapsed()
        );
        Ok(segments)
    }
}

/// Returns up to `n` days with the most climbing, hardest first.
pub fn toughest_days(segments: &[DaySegment], n: usize) -> Vec<DaySegment> {
    let mut sorted = segments.to_vec();
    sorted.sort_by(|a, b| match b.gain_ft.total_cmp(&a.gain_ft) {
        Ordering::Equal => a.day.cmp(&b.day),
        ord => ord,
    });
    sorted.truncate(n);
    sorted
}
