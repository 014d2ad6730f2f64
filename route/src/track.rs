//! Routes from raw coordinate tracks.
//!
//! Track points carry a location but no along-track distance. The
//! distance of each point is the running sum of great-circle steps
//! between consecutive points.

use crate::{RouteError, RouteSample};
use geo::{HaversineDistance, Point};

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// A raw point of a trail track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// `x` is longitude, `y` is latitude, both in degrees.
    pub location: Point<f64>,
    pub elevation_ft: f64,
    pub region: Option<String>,
}

/// Converts an ordered track into route samples.
///
/// Points are taken in the order given; no sorting is done here.
pub fn from_track<I>(points: I) -> Result<Vec<RouteSample>, RouteError>
where
    I: IntoIterator<Item = TrackPoint>,
{
    let mut samples = Vec::new();
    let mut distance_miles = 0.0;
    let mut prev: Option<Point<f64>> = None;
    for (index, point) in points.into_iter().enumerate() {
        if let Some(prev) = prev {
            distance_miles += prev.haversine_distance(&point.location) / METERS_PER_MILE;
        }
        samples.push(RouteSample::new(
            index,
            distance_miles,
            point.location.y(),
            point.location.x(),
            point.elevation_ft,
            point.region.as_deref(),
        )?);
        prev = Some(point.location);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::{from_track, TrackPoint};
    use approx::assert_relative_eq;
    use geo::point;

    fn track_point(x: f64, y: f64, elevation_ft: f64) -> TrackPoint {
        TrackPoint {
            location: point!(x: x, y: y),
            elevation_ft,
            region: Some("Maine".to_owned()),
        }
    }

    #[test]
    fn test_from_track() {
        // One degree of latitude is ~69.1 statute miles on the mean
        // earth sphere.
        let samples = from_track(vec![
            track_point(-69.0, 45.0, 1000.0),
            track_point(-69.0, 45.5, 1200.0),
            track_point(-69.0, 46.0, 900.0),
        ])
        .unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].distance_miles, 0.0);
        assert_relative_eq!(samples[2].distance_miles, 69.09, epsilon = 0.05);
        assert_relative_eq!(
            samples[1].distance_miles * 2.0,
            samples[2].distance_miles,
            epsilon = 1e-9
        );
        assert_eq!(samples[2].latitude, 46.0);
        assert_eq!(samples[2].longitude, -69.0);
    }

    #[test]
    fn test_empty_track() {
        assert!(from_track(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_point() {
        let err = from_track(vec![
            track_point(-69.0, 45.0, 1000.0),
            track_point(-69.0, 45.5, f64::INFINITY),
        ]);
        assert!(err.is_err());
    }
}
