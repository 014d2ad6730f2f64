use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pace::Direction;
use std::path::PathBuf;
use trail::constants::{
    DEFAULT_ASCENT_FT_PER_HR, DEFAULT_DESCENT_FT_PER_HR, DEFAULT_FLAT_SPEED_MPH,
    DEFAULT_PROMINENCE_FT, DEFAULT_TOUGHEST_COUNT, DEFAULT_WINDOW_MILES,
};

/// Appalachian Trail elevation metrics and daylight pace projection.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Route CSV with distance_miles, latitude, longitude,
    /// elevation_ft and state columns. A synthetic trail is generated
    /// when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Synthetic trail density.
    #[arg(long, default_value_t = 10)]
    pub points_per_mile: u32,

    /// Synthetic trail random seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write the route to a CSV file.
    Generate {
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Headline route statistics.
    Summary {
        /// Minimum peak/valley prominence, in feet.
        #[arg(long, default_value_t = DEFAULT_PROMINENCE_FT)]
        prominence: f64,
    },

    /// Statistics per state.
    Regions,

    /// Miles and grades per difficulty bucket.
    Difficulty,

    /// Stretches with the most climbing.
    Toughest {
        #[arg(short, default_value_t = DEFAULT_TOUGHEST_COUNT)]
        n: usize,

        #[arg(long, default_value_t = DEFAULT_WINDOW_MILES)]
        window_miles: f64,
    },

    /// Significant peaks and valleys.
    Peaks {
        /// Minimum prominence, in feet.
        #[arg(long, default_value_t = DEFAULT_PROMINENCE_FT)]
        prominence: f64,
    },

    /// Naismith-style hiking time estimate.
    Time {
        #[arg(long, default_value_t = DEFAULT_FLAT_SPEED_MPH)]
        flat_speed: f64,

        /// Feet of climbing per hour.
        #[arg(long, default_value_t = DEFAULT_ASCENT_FT_PER_HR)]
        ascent_rate: f64,

        /// Feet of descent per hour.
        #[arg(long, default_value_t = DEFAULT_DESCENT_FT_PER_HR)]
        descent_rate: f64,
    },

    /// Daylight at each sample on the day it is reached.
    Daylight {
        #[command(flatten)]
        hike: Hike,

        #[arg(long, default_value_t = 15.0)]
        miles_per_day: f64,

        /// Plot daylight against distance instead.
        #[arg(long, default_value_t = false)]
        plot: bool,
    },

    /// Pace needed to finish in a target number of days hiking by
    /// daylight only.
    Pace {
        #[command(flatten)]
        hike: Hike,

        #[arg(long, default_value_t = 150.0)]
        days: f64,
    },

    /// How long a hike takes at a given moving pace.
    Duration {
        #[command(flatten)]
        hike: Hike,

        /// Moving pace, in mph.
        #[arg(long, default_value_t = 2.5)]
        pace: f64,

        /// Hike a fixed number of hours each day instead of by
        /// daylight.
        #[arg(long)]
        hours_per_day: Option<f64>,

        /// Stop iterating once estimates change by less than this many
        /// days.
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Compare start dates from March through August.
    Windows {
        #[command(flatten)]
        hike: Hike,

        #[arg(long, default_value_t = 2024)]
        year: i32,

        #[arg(long, default_value_t = 150.0)]
        days: f64,
    },

    /// Fastest known time analysis.
    Fkt {
        /// Include daylight-only scenarios.
        #[arg(long, default_value_t = false)]
        daylight: bool,

        #[arg(long, default_value_t = 2024)]
        year: i32,
    },

    /// Plot the elevation profile to the terminal.
    Plot,
}

/// Start, direction and daylight use shared by the pace commands.
#[derive(Args, Debug, Clone)]
pub struct Hike {
    /// Start date, YYYY-MM-DD.
    #[arg(long, default_value = "2024-03-15")]
    pub start: NaiveDate,

    /// NOBO or SOBO.
    #[arg(long, default_value = "nobo")]
    pub direction: Direction,

    /// Share of daylight spent moving.
    #[arg(long, default_value_t = pace::constants::DEFAULT_HIKING_FRACTION)]
    pub hiking_fraction: f64,
}
