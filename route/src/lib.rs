//! Ordered route samples along a long-distance trail.
//!
//! A route is a slice of [`RouteSample`]s in traversal order
//! (south-to-north for the Appalachian Trail). Samples are validated
//! once, when they enter the program, and are read-only afterwards.
//!
//! # Sources
//!
//! 1. [`table`]: CSV files with `distance_miles, latitude, longitude,
//!    elevation_ft, state` columns.
//! 1. [`track`]: raw coordinate tracks, with along-track distance
//!    accumulated from haversine steps.
//! 1. [`synthetic`]: a seeded, state-by-state synthetic trail.

mod error;
pub mod synthetic;
pub mod table;
pub mod track;

pub use crate::{error::RouteError, synthetic::Synthetic};
use serde::Serialize;

/// Region assigned to samples which carry no region label.
pub const UNKNOWN_REGION: &str = "Unknown";

/// A single observation along the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSample {
    /// Along-track distance from the start of the route.
    pub distance_miles: f64,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Elevation above sea level in feet.
    pub elevation_ft: f64,

    /// Region (state) this sample lies in.
    pub region: String,
}

impl RouteSample {
    /// Returns a validated sample.
    ///
    /// `index` is only used to locate the sample in error reports. A
    /// missing or blank `region` becomes [`UNKNOWN_REGION`].
    pub fn new(
        index: usize,
        distance_miles: f64,
        latitude: f64,
        longitude: f64,
        elevation_ft: f64,
        region: Option<&str>,
    ) -> Result<Self, RouteError> {
        let region = match region.map(str::trim) {
            Some(region) if !region.is_empty() => region.to_owned(),
            _ => UNKNOWN_REGION.to_owned(),
        };
        let sample = Self {
            distance_miles,
            latitude,
            longitude,
            elevation_ft,
            region,
        };
        sample.validate(index)?;
        Ok(sample)
    }

    /// Checks the numeric fields of this sample.
    ///
    /// Fields are public, so consumers that accept samples from
    /// elsewhere re-run this before trusting them.
    pub fn validate(&self, index: usize) -> Result<(), RouteError> {
        finite(index, "distance_miles", self.distance_miles)?;
        finite(index, "latitude", self.latitude)?;
        finite(index, "longitude", self.longitude)?;
        finite(index, "elevation_ft", self.elevation_ft)?;
        if self.distance_miles < 0.0 {
            return Err(RouteError::invalid(
                index,
                "distance_miles",
                format!("is negative ({})", self.distance_miles),
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(RouteError::invalid(
                index,
                "latitude",
                format!("is out of range ({})", self.latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(RouteError::invalid(
                index,
                "longitude",
                format!("is out of range ({})", self.longitude),
            ));
        }
        Ok(())
    }
}

fn finite(index: usize, field: &'static str, value: f64) -> Result<(), RouteError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RouteError::invalid(index, field, format!("is not a finite number ({value})")))
    }
}

/// Returns the distance between the first and last sample of `samples`.
pub fn total_distance(samples: &[RouteSample]) -> f64 {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => last.distance_miles - first.distance_miles,
        _ => 0.0,
    }
}

/// Returns `true` if every sample's distance is at least that of its
/// predecessor.
pub fn is_ascending(samples: &[RouteSample]) -> bool {
    samples
        .windows(2)
        .all(|pair| pair[0].distance_miles <= pair[1].distance_miles)
}
