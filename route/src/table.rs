//! CSV route tables.
//!
//! Columns are matched by header name. `distance_miles`, `latitude`
//! and `elevation_ft` are required; `longitude` defaults to 0 and
//! `state` (or `region`) defaults to [`UNKNOWN_REGION`]. Any other
//! columns, such as `point_id`, are ignored.
//!
//! [`UNKNOWN_REGION`]: crate::UNKNOWN_REGION

use crate::{RouteError, RouteSample};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

#[derive(Debug, Deserialize)]
struct RawRow {
    distance_miles: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    elevation_ft: Option<String>,
    #[serde(alias = "region")]
    state: Option<String>,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    distance_miles: f64,
    latitude: f64,
    longitude: f64,
    elevation_ft: f64,
    state: &'a str,
}

/// Reads route samples from the CSV file at `path`.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<RouteSample>, RouteError> {
    let file = File::open(path.as_ref())?;
    let samples = read(file)?;
    if samples.is_empty() {
        return Err(RouteError::Empty(path.as_ref().to_owned()));
    }
    Ok(samples)
}

/// Reads route samples from CSV data.
pub fn read<R: Read>(rdr: R) -> Result<Vec<RouteSample>, RouteError> {
    let now = std::time::Instant::now();
    let mut rdr = csv::Reader::from_reader(rdr);
    let mut samples = Vec::new();
    for (index, row) in rdr.deserialize::<RawRow>().enumerate() {
        let RawRow {
            distance_miles,
            latitude,
            longitude,
            elevation_ft,
            state,
        } = row?;
        let distance_miles = required(index, "distance_miles", distance_miles)?;
        let latitude = required(index, "latitude", latitude)?;
        let longitude = optional(index, "longitude", longitude)?.unwrap_or(0.0);
        let elevation_ft = required(index, "elevation_ft", elevation_ft)?;
        samples.push(RouteSample::new(
            index,
            distance_miles,
            latitude,
            longitude,
            elevation_ft,
            state.as_deref(),
        )?);
    }
    debug!("table; rows: {}, exec: {:?}", samples.len(), now.elapsed());
    Ok(samples)
}

/// Writes `samples` as CSV to the file at `path`.
pub fn write_path<P: AsRef<Path>>(samples: &[RouteSample], path: P) -> Result<(), RouteError> {
    let file = File::create(path)?;
    write(samples, file)
}

/// Writes `samples` as CSV.
pub fn write<W: Write>(samples: &[RouteSample], wtr: W) -> Result<(), RouteError> {
    let mut wtr = csv::Writer::from_writer(wtr);
    for sample in samples {
        wtr.serialize(Row {
            distance_miles: sample.distance_miles,
            latitude: sample.latitude,
            longitude: sample.longitude,
            elevation_ft: sample.elevation_ft,
            state: &sample.region,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn required(index: usize, field: &'static str, raw: Option<String>) -> Result<f64, RouteError> {
    optional(index, field, raw)?.ok_or_else(|| RouteError::invalid(index, field, "is missing"))
}

fn optional(
    index: usize,
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<f64>, RouteError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| RouteError::invalid(index, field, format!("is not numeric ({raw:?})"))),
    }
}
