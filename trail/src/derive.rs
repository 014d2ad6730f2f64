use crate::{constants::FEET_PER_MILE, Difficulty, TrailError};
use log::{debug, trace};
use route::RouteSample;

/// A route sample plus the metrics derived from its predecessor.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSample {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub sample: RouteSample,

    /// Elevation change from the previous sample (ft).
    pub elevation_delta: f64,

    /// Distance from the previous sample (mi).
    pub segment_distance: f64,

    /// `elevation_delta` over `segment_distance`, in percent.
    pub grade_percent: f64,

    pub difficulty: Difficulty,

    /// Running sum of positive `elevation_delta`s (ft).
    pub cumulative_gain: f64,

    /// Running sum of |negative `elevation_delta`s| (ft).
    pub cumulative_loss: f64,
}

/// Derives per-sample metrics for an ordered route.
///
/// `samples` should be in ascending distance order. They are not
/// re-sorted; a step with zero or negative distance gets a grade of 0.
pub fn derive(samples: &[RouteSample]) -> Result<Vec<DerivedSample>, TrailError> {
    let now = std::time::Instant::now();
    let mut derived = Vec::with_capacity(samples.len());
    let mut prev: Option<&RouteSample> = None;
    let mut cumulative_gain = 0.0;
    let mut cumulative_loss = 0.0;

    for (index, sample) in samples.iter().enumerate() {
        sample.validate(index)?;

        let (elevation_delta, segment_distance) = prev.map_or((0.0, 0.0), |prev| {
            (
                sample.elevation_ft - prev.elevation_ft,
                sample.distance_miles - prev.distance_miles,
            )
        });
        if segment_distance < 0.0 {
            trace!("derive; distance decreases at sample {index}");
        }

        let grade_percent = grade(elevation_delta, segment_distance);
        cumulative_gain += elevation_delta.max(0.0);
        cumulative_loss += (-elevation_delta).max(0.0);

        derived.push(DerivedSample {
            sample: sample.clone(),
            elevation_delta,
            segment_distance,
            grade_percent,
            difficulty: Difficulty::from_grade(grade_percent),
            cumulative_gain,
            cumulative_loss,
        });
        prev = Some(sample);
    }

    debug!("derive; len: {}, exec: {:?}", derived.len(), now.elapsed());
    Ok(derived)
}

/// Grade in percent over a segment, 0 for non-positive segments.
pub fn grade(elevation_delta_ft: f64, segment_miles: f64) -> f64 {
    if segment_miles > 0.0 {
        elevation_delta_ft / (segment_miles * FEET_PER_MILE) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{derive, grade};
    use crate::{Difficulty, TrailError};
    use approx::assert_relative_eq;
    use route::{RouteError, RouteSample};

    fn sample(distance_miles: f64, elevation_ft: f64) -> RouteSample {
        RouteSample::new(0, distance_miles, 40.0, -75.0, elevation_ft, Some("Pennsylvania")).unwrap()
    }

    #[test]
    fn test_derive() {
        let derived = derive(&[
            sample(0.0, 1000.0),
            sample(0.5, 1264.0),
            sample(1.0, 1000.0),
            sample(1.0, 1100.0),
        ])
        .unwrap();

        assert_eq!(derived.len(), 4);
        assert_eq!(derived[0].elevation_delta, 0.0);
        assert_eq!(derived[0].segment_distance, 0.0);
        assert_eq!(derived[0].grade_percent, 0.0);
        assert_eq!(derived[0].difficulty, Difficulty::Easy);

        // 264 ft over 2640 ft.
        assert_relative_eq!(derived[1].grade_percent, 10.0);
        assert_eq!(derived[1].difficulty, Difficulty::Difficult);
        assert_relative_eq!(derived[2].grade_percent, -10.0);

        // Zero-length segment.
        assert_eq!(derived[3].grade_percent, 0.0);

        assert_eq!(derived[3].cumulative_gain, 364.0);
        assert_eq!(derived[3].cumulative_loss, 264.0);
    }

    #[test]
    fn test_derive_empty() {
        assert!(derive(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_derive_rejects_nan() {
        let mut bad = sample(1.0, 0.0);
        bad.elevation_ft = f64::NAN;
        let err = derive(&[sample(0.0, 0.0), bad]).unwrap_err();
        assert!(matches!(
            err,
            TrailError::Route(RouteError::InvalidSample { index: 1, .. })
        ));
    }

    #[test]
    fn test_grade() {
        assert_eq!(grade(100.0, 0.0), 0.0);
        assert_eq!(grade(100.0, -1.0), 0.0);
        assert_relative_eq!(grade(52.8, 0.1), 10.0, epsilon = 1e-12);
    }
}
