//! Synthetic Appalachian Trail routes.
//!
//! The route is laid out state by state using each state's actual
//! trail mileage and elevation envelope. Positions are a straight
//! interpolation from Springer Mountain to Mount Katahdin; elevations
//! are a sum of three sine waves per state plus seeded jitter.

use crate::{RouteError, RouteSample};
use geo::{coord, Coord};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

/// Springer Mountain, GA.
pub const SOUTHERN_TERMINUS: Coord<f64> = coord! { x: -84.1938, y: 34.6268 };

/// Mount Katahdin, ME.
pub const NORTHERN_TERMINUS: Coord<f64> = coord! { x: -68.9213, y: 45.9044 };

/// Trail mileage and elevation envelope of one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpec {
    pub name: &'static str,
    pub miles: f64,
    pub start_elev_ft: f64,
    pub max_elev_ft: f64,
}

impl RegionSpec {
    /// Checks that mileage is non-negative and the elevation envelope
    /// sits at or above sea level.
    pub fn validate(&self) -> Result<(), RouteError> {
        let reason = if !self.miles.is_finite() || self.miles < 0.0 {
            format!("has invalid mileage ({})", self.miles)
        } else if !self.start_elev_ft.is_finite() || !self.max_elev_ft.is_finite() {
            format!(
                "has a non-finite elevation ({}, {})",
                self.start_elev_ft, self.max_elev_ft
            )
        } else if self.max_elev_ft < 0.0 {
            format!("has a negative maximum elevation ({})", self.max_elev_ft)
        } else {
            return Ok(());
        };
        Err(RouteError::InvalidRegion {
            name: self.name.to_owned(),
            reason,
        })
    }
}

const fn region(name: &'static str, miles: f64, start_elev_ft: f64, max_elev_ft: f64) -> RegionSpec {
    RegionSpec {
        name,
        miles,
        start_elev_ft,
        max_elev_ft,
    }
}

/// States crossed by the Appalachian Trail, south to north.
pub const APPALACHIAN_TRAIL: [RegionSpec; 14] = [
    region("Georgia", 75.0, 3782.0, 4461.0),
    region("North Carolina", 95.7, 3500.0, 6643.0),
    region("Tennessee", 71.6, 3500.0, 6643.0),
    region("Virginia", 544.6, 2500.0, 5729.0),
    region("West Virginia", 4.0, 1200.0, 1500.0),
    region("Maryland", 40.9, 1000.0, 1880.0),
    region("Pennsylvania", 229.6, 800.0, 2080.0),
    region("New Jersey", 72.2, 400.0, 1653.0),
    region("New York", 88.4, 400.0, 1433.0),
    region("Connecticut", 51.6, 500.0, 2316.0),
    region("Massachusetts", 90.0, 800.0, 3491.0),
    region("Vermont", 150.0, 1000.0, 4393.0),
    region("New Hampshire", 161.0, 1500.0, 6288.0),
    region("Maine", 281.4, 1000.0, 5267.0),
];

/// Synthetic route generator.
#[derive(Debug, Clone)]
pub struct Synthetic {
    regions: Vec<RegionSpec>,
    points_per_mile: u32,
    seed: u64,
    /// Maximum absolute lat/lon jitter, in degrees.
    position_jitter_deg: f64,
    /// Maximum absolute elevation jitter, in feet.
    elevation_jitter_ft: f64,
}

impl Default for Synthetic {
    fn default() -> Self {
        Self::appalachian()
    }
}

impl Synthetic {
    /// Returns a generator for the full Appalachian Trail at 10
    /// points per mile.
    pub fn appalachian() -> Self {
        Self {
            regions: APPALACHIAN_TRAIL.to_vec(),
            points_per_mile: 10,
            seed: 0,
            position_jitter_deg: 0.01,
            elevation_jitter_ft: 20.0,
        }
    }

    #[must_use]
    pub fn regions(mut self, regions: Vec<RegionSpec>) -> Self {
        self.regions = regions;
        self
    }

    #[must_use]
    pub fn points_per_mile(mut self, points_per_mile: u32) -> Self {
        self.points_per_mile = points_per_mile;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable all random jitter.
    #[must_use]
    pub fn smooth(mut self) -> Self {
        self.position_jitter_deg = 0.0;
        self.elevation_jitter_ft = 0.0;
        self
    }

    /// Total trail miles over all regions.
    pub fn total_miles(&self) -> f64 {
        self.regions.iter().map(|r| r.miles).sum()
    }

    pub fn generate(&self) -> Result<Vec<RouteSample>, RouteError> {
        for spec in &self.regions {
            spec.validate()?;
        }
        let now = std::time::Instant::now();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let total_miles = self.total_miles();
        let ppm = f64::from(self.points_per_mile);
        let mut samples = Vec::new();
        let mut region_start_mile = 0.0;

        for spec in &self.regions {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let region_points = (spec.miles * ppm) as usize;
            let swing = spec.max_elev_ft - spec.start_elev_ft;

            for i in 0..region_points {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                let distance_miles = region_start_mile + i / ppm;
                let progress = if total_miles > 0.0 {
                    distance_miles / total_miles
                } else {
                    0.0
                };

                let latitude = SOUTHERN_TERMINUS.y
                    + (NORTHERN_TERMINUS.y - SOUTHERN_TERMINUS.y) * progress
                    + jitter(&mut rng, self.position_jitter_deg);
                let longitude = SOUTHERN_TERMINUS.x
                    + (NORTHERN_TERMINUS.x - SOUTHERN_TERMINUS.x) * progress
                    + jitter(&mut rng, self.position_jitter_deg);

                #[allow(clippy::cast_precision_loss)]
                let region_progress = i / region_points as f64;
                let terrain = (region_progress * PI * 3.0).sin() * swing * 0.3
                    + (region_progress * PI * 7.0).sin() * swing * 0.2
                    + (region_progress * PI * 13.0).sin() * swing * 0.1;
                let elevation_ft = (spec.start_elev_ft
                    + terrain
                    + jitter(&mut rng, self.elevation_jitter_ft))
                .clamp(0.0, spec.max_elev_ft * 1.1);

                let index = samples.len();
                samples.push(RouteSample::new(
                    index,
                    distance_miles,
                    latitude,
                    longitude,
                    elevation_ft,
                    Some(spec.name),
                )?);
            }

            region_start_mile += spec.miles;
        }

        debug!(
            "synthetic; len: {}, miles: {total_miles}, exec: {:?}",
            samples.len(),
            now.elapsed()
        );
        Ok(samples)
    }
}

fn jitter(rng: &mut StdRng, max_abs: f64) -> f64 {
    if max_abs > 0.0 {
        rng.gen_range(-max_abs..=max_abs)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{region, Synthetic, APPALACHIAN_TRAIL};
    use crate::{is_ascending, RouteError};
    use approx::assert_relative_eq;

    #[test]
    fn test_appalachian_mileage() {
        assert_relative_eq!(Synthetic::appalachian().total_miles(), 1956.0, epsilon = 1e-9);
    }

    #[test]
    fn test_generate() {
        let samples = Synthetic::appalachian()
            .points_per_mile(2)
            .seed(7)
            .generate()
            .unwrap();
        assert!(is_ascending(&samples));
        assert_eq!(samples.first().unwrap().region, "Georgia");
        assert_eq!(samples.last().unwrap().region, "Maine");
        let mut regions: Vec<&str> = samples.iter().map(|s| s.region.as_str()).collect();
        regions.dedup();
        assert_eq!(regions.len(), APPALACHIAN_TRAIL.len());
        for sample in &samples {
            assert!(sample.elevation_ft >= 0.0);
            assert!((34.0..=46.5).contains(&sample.latitude));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let generator = Synthetic::appalachian().points_per_mile(1).seed(42);
        assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
        let other = generator.clone().seed(43).generate().unwrap();
        assert_ne!(generator.generate().unwrap(), other);
    }

    #[test]
    fn test_smooth_region() {
        let samples = Synthetic::appalachian()
            .regions(vec![region("Flatland", 2.0, 500.0, 500.0)])
            .smooth()
            .generate()
            .unwrap();
        assert_eq!(samples.len(), 20);
        assert!(samples.iter().all(|s| s.elevation_ft == 500.0));
        assert_relative_eq!(samples[19].distance_miles, 1.9, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_regions() {
        for spec in [
            region("Depression", 1.0, -400.0, -100.0),
            region("Backwards", -5.0, 500.0, 900.0),
            region("Void", 1.0, f64::NAN, 900.0),
        ] {
            let result = Synthetic::appalachian().regions(vec![spec]).smooth().generate();
            assert!(
                matches!(&result, Err(RouteError::InvalidRegion { name, .. }) if name == spec.name),
                "{result:?}"
            );
        }
        assert!(APPALACHIAN_TRAIL.iter().all(|spec| spec.validate().is_ok()));
    }

    #[test]
    fn test_below_sea_level_start_is_clamped() {
        let samples = Synthetic::appalachian()
            .regions(vec![region("Delta", 1.0, -50.0, 10.0)])
            .smooth()
            .generate()
            .unwrap();
        assert!(samples.iter().all(|s| (0.0..=11.0).contains(&s.elevation_ft)));
    }
}
