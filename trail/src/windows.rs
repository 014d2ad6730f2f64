use crate::{
    math::{max_or_zero, mean},
    Profile,
};
use log::debug;
use std::cmp::Ordering;

/// A stretch of trail centred on one sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    /// First sample in the window.
    pub start_index: usize,
    /// One past the last sample in the window.
    pub end_index: usize,
    pub center_index: usize,
    pub start_mile: f64,
    pub end_mile: f64,
    /// Region at the window's middle sample.
    pub region: String,
    pub gain_ft: f64,
    pub max_elevation_ft: f64,
    /// Mean signed grade over the window.
    pub avg_grade_percent: f64,
}

impl Profile {
    /// Returns up to `n` windows of roughly `window_miles`, hardest
    /// climbing first.
    ///
    /// Every sample is scored by the elevation gain of the window
    /// centred on it. Windows around neighbouring samples overlap, so
    /// one long climb can fill several slots. Ties keep route order.
    pub fn toughest_windows(&self, n: usize, window_miles: f64) -> Vec<WindowSummary> {
        let now = std::time::Instant::now();
        let samples = self.samples();
        let len = samples.len();
        if len == 0 || n == 0 {
            return Vec::new();
        }

        let width = self.window_width(window_miles);
        let half = width / 2;
        let bounds = |center: usize| (center.saturating_sub(half), len.min(center + width - half));

        // gains[i] = positive climbing over samples[..i]
        let mut gains = Vec::with_capacity(len + 1);
        gains.push(0.0);
        for sample in samples {
            let total = gains.last().copied().unwrap_or(0.0) + sample.elevation_delta.max(0.0);
            gains.push(total);
        }

        let mut scored: Vec<(usize, f64)> = (0..len)
            .map(|center| {
                let (start, end) = bounds(center);
                (center, gains[end] - gains[start])
            })
            .collect();
        scored.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            ord => ord,
        });

        let windows: Vec<WindowSummary> = scored
            .into_iter()
            .take(n)
            .map(|(center, gain_ft)| {
                let (start, end) = bounds(center);
                let window = &samples[start..end];
                let first = &window[0];
                let last = &window[window.len() - 1];
                WindowSummary {
                    start_index: start,
                    end_index: end,
                    center_index: center,
                    start_mile: first.sample.distance_miles,
                    end_mile: last.sample.distance_miles,
                    region: window[window.len() / 2].sample.region.clone(),
                    gain_ft,
                    max_elevation_ft: max_or_zero(window.iter().map(|s| s.sample.elevation_ft)),
                    avg_grade_percent: mean(window.iter().map(|s| s.grade_percent)),
                }
            })
            .collect();

        debug!(
            "toughest_windows; len: {len}, width: {width}, exec: {:?}",
            now.elapsed()
        );
        windows
    }

    /// Window width in samples for a span of `window_miles`, from the
    /// mean sample spacing. Always at least 1 and at most the number
    /// of samples.
    fn window_width(&self, window_miles: f64) -> usize {
        let len = self.len();
        if len < 2 {
            return len.max(1);
        }
        #[allow(clippy::cast_precision_loss)]
        let spacing = self.total_distance() / (len - 1) as f64;
        if !spacing.is_finite() || spacing <= 0.0 || !window_miles.is_finite() {
            return len;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = (window_miles / spacing).floor().max(1.0) as usize;
        width.min(len)
    }
}

#[cfg(test)]
mod tests {
    use crate::Profile;
    use route::RouteSample;

    fn profile(elevations: &[f64]) -> Profile {
        let samples: Vec<RouteSample> = elevations
            .iter()
            .enumerate()
            .map(|(i, &elev)| {
                RouteSample::new(i, i as f64, 40.0, -75.0, elev, Some("Virginia")).unwrap()
            })
            .collect();
        Profile::new(&samples).unwrap()
    }

    #[test]
    fn test_toughest_window() {
        let profile = profile(&[0.0, 0.0, 0.0, 300.0, 600.0, 600.0, 600.0, 650.0, 650.0]);
        let windows = profile.toughest_windows(1, 2.0);
        assert_eq!(windows.len(), 1);
        let window = &windows[0];
        // Width 2 centred on 4 covers samples 3 and 4, both +300.
        assert_eq!(window.center_index, 4);
        assert_eq!(window.start_index, 3);
        assert_eq!(window.end_index, 5);
        assert_eq!(window.gain_ft, 600.0);
        assert_eq!(window.start_mile, 3.0);
        assert_eq!(window.end_mile, 4.0);
        assert_eq!(window.max_elevation_ft, 600.0);
        assert_eq!(window.region, "Virginia");
    }

    #[test]
    fn test_ties_keep_route_order() {
        let profile = profile(&[0.0, 100.0, 0.0, 100.0, 0.0]);
        let windows = profile.toughest_windows(5, 1.0);
        let centers: Vec<usize> = windows.iter().map(|w| w.center_index).collect();
        assert_eq!(centers, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_window_wider_than_route() {
        let profile = profile(&[0.0, 100.0, 50.0]);
        let windows = profile.toughest_windows(10, 100.0);
        assert_eq!(windows.len(), 3);
        assert!(windows.iter().all(|w| w.gain_ft == 100.0));
        assert_eq!((windows[1].start_index, windows[1].end_index), (0, 3));
        assert_eq!((windows[0].start_index, windows[0].end_index), (0, 2));
    }

    #[test]
    fn test_empty() {
        assert!(profile(&[]).toughest_windows(10, 5.0).is_empty());
        assert!(profile(&[1.0, 2.0]).toughest_windows(0, 5.0).is_empty());
    }
}
