//! Elevation metrics for trail routes.
//!
//! [`Profile`] derives grade, difficulty and cumulative gain/loss for
//! every sample of a route once, then answers aggregate queries:
//! region breakdowns, difficulty distributions, the toughest windows,
//! significant peaks and valleys, hiking time, and day-by-day splits.

pub mod constants;
mod derive;
mod difficulty;
mod error;
pub mod math;
pub mod peaks;
mod profile;
mod segments;
mod windows;

pub use crate::{
    derive::{derive, grade, DerivedSample},
    difficulty::{Difficulty, DifficultyStats},
    error::TrailError,
    profile::{HikingRates, HikingTime, Profile, RegionSummary, Summary},
    segments::{toughest_days, DaySegment},
    windows::WindowSummary,
};
pub use route;
