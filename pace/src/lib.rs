//! Daylight-constrained pace projection.
//!
//! Day length along a route depends on latitude and on the date each
//! stretch is reached, which depends on pace. [`PaceProjector`] ties
//! the two together to answer how fast a daylight-only hiker must move
//! to finish in a given number of days, or how long a hike takes at a
//! given pace. [`FktAnalysis`] puts the Appalachian Trail speed record
//! in that context.

pub mod constants;
mod daylight;
mod error;
mod fkt;
mod projector;

pub use crate::{
    daylight::{
        daylight_along_route, daylight_along_route_in, daylight_hours, DaylightSample, Direction,
    },
    error::PaceError,
    fkt::{DaylightScenario, FktAnalysis, FktMetrics, FktRecord, PacingStrategy, TerrainPace},
    projector::{
        duration_at_fixed_hours, project_constant_pace, ConstantPace, DurationEstimate,
        Feasibility, FeasibilityPolicy, Iteration, MileageEstimate, PaceProjection, PaceProjector,
    },
};
