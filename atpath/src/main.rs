#![allow(clippy::cast_possible_truncation)]

mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use itertools::Itertools;
use options::{Cli, Command as CliCmd, Hike};
use pace::{
    constants::{DEFAULT_MAX_ITERATIONS, START_WINDOW_DAY},
    daylight_along_route_in, duration_at_fixed_hours, DaylightScenario, DurationEstimate,
    FktAnalysis, FktMetrics, Iteration, MileageEstimate, PaceProjection, PaceProjector,
    PacingStrategy,
    TerrainPace,
};
use route::{RouteSample, Synthetic};
use serde::Serialize;
use std::io::Write;
use textplots::{Chart, Plot, Shape};
use trail::{toughest_days, DaySegment, HikingRates, Profile};

fn main() -> Result<(), AnyError> {
    let Cli {
        input,
        points_per_mile,
        seed,
        json,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let samples = match input {
        Some(path) => route::table::read_path(path)?,
        None => Synthetic::appalachian()
            .points_per_mile(points_per_mile)
            .seed(seed)
            .generate()?,
    };

    match cmd {
        CliCmd::Generate { out } => {
            route::table::write_path(&samples, &out)?;
            eprintln!("wrote {} samples to {}", samples.len(), out.display());
        }
        CliCmd::Summary { prominence } => {
            let summary = Profile::new(&samples)?.summary(prominence)?;
            if json {
                print_json(&summary)?;
            } else {
                print_summary(&summary)?;
            }
        }
        CliCmd::Regions => {
            let regions = Profile::new(&samples)?.region_breakdown();
            if json {
                print_json(&regions)?;
            } else {
                print_regions(&regions)?;
            }
        }
        CliCmd::Difficulty => {
            let distribution = Profile::new(&samples)?.difficulty_distribution();
            if json {
                print_json(&distribution)?;
            } else {
                print_difficulty(&distribution)?;
            }
        }
        CliCmd::Toughest { n, window_miles } => {
            let windows = Profile::new(&samples)?.toughest_windows(n, window_miles);
            if json {
                print_json(&windows)?;
            } else {
                print_windows(&windows)?;
            }
        }
        CliCmd::Peaks { prominence } => {
            let profile = Profile::new(&samples)?;
            let (peaks, valleys) = profile.peaks_and_valleys(prominence);
            let rows = extrema(&samples, &peaks, "peak")
                .chain(extrema(&samples, &valleys, "valley"))
                .sorted_by_key(|row| row.index)
                .collect::<Vec<_>>();
            if json {
                print_json(&rows)?;
            } else {
                print_extrema(&rows)?;
            }
        }
        CliCmd::Time {
            flat_speed,
            ascent_rate,
            descent_rate,
        } => {
            let rates = HikingRates {
                flat_speed_mph: flat_speed,
                ascent_ft_per_hr: ascent_rate,
                descent_ft_per_hr: descent_rate,
            };
            let time = Profile::new(&samples)?.hiking_time_estimate(&rates)?;
            if json {
                print_json(&time)?;
            } else {
                print_hiking_time(&time)?;
            }
        }
        CliCmd::Daylight {
            hike,
            miles_per_day,
            plot,
        } => {
            let daylight =
                daylight_along_route_in(hike.direction, &samples, hike.start, miles_per_day)?;
            if plot {
                let data: Vec<(f32, f32)> = daylight
                    .iter()
                    .map(|d| (d.distance_miles as f32, d.daylight_hours as f32))
                    .collect();
                plot_ascii(&data);
            } else if json {
                print_json(&daylight)?;
            } else {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "distance_miles,latitude,region,date,daylight_hours")?;
                for d in &daylight {
                    writeln!(
                        stdout,
                        "{:.2},{:.4},{},{},{:.2}",
                        d.distance_miles, d.latitude, d.region, d.date, d.daylight_hours
                    )?;
                }
            }
        }
        CliCmd::Pace { hike, days } => {
            let projection = projector(&samples, &hike)?.project_daylight_constrained(hike.start, days)?;
            if json {
                print_json(&projection)?;
            } else {
                print_projection(&projection)?;
            }
        }
        CliCmd::Duration {
            hike,
            pace,
            hours_per_day,
            tolerance,
        } => {
            let projector = projector(&samples, &hike)?;
            match hours_per_day {
                Some(hours) => {
                    let estimate =
                        duration_at_fixed_hours(projector.total_distance(), hike.start, pace, hours)?;
                    if json {
                        print_json(&estimate)?;
                    } else {
                        print_durations(std::slice::from_ref(&estimate))?;
                    }
                }
                None => {
                    let estimate = projector.optimal_daily_mileage(
                        hike.start,
                        pace,
                        Iteration {
                            max_iterations: DEFAULT_MAX_ITERATIONS,
                            tolerance,
                        },
                    )?;
                    if json {
                        print_json(&estimate)?;
                    } else {
                        print_projection(&estimate.projection)?;
                        println!(
                            "months:          {:.1} ({} iterations)",
                            estimate.total_months(),
                            estimate.iterations
                        );
                    }
                }
            }
        }
        CliCmd::Windows { hike, year, days } => {
            let windows = projector(&samples, &hike)?.compare_start_windows(year, days)?;
            if json {
                print_json(&windows)?;
            } else {
                print_start_windows(&windows)?;
            }
        }
        CliCmd::Fkt { daylight, year } => {
            let report = fkt_report(&samples, daylight, year)?;
            if json {
                print_json(&report)?;
            } else {
                print_fkt(&report)?;
            }
        }
        CliCmd::Plot => {
            let data: Vec<(f32, f32)> = samples
                .iter()
                .map(|s| (s.distance_miles as f32, s.elevation_ft as f32))
                .collect();
            plot_ascii(&data);
        }
    };
    Ok(())
}

fn projector<'a>(samples: &'a [RouteSample], hike: &Hike) -> Result<PaceProjector<'a>, AnyError> {
    Ok(PaceProjector::new(samples)?
        .direction(hike.direction)
        .hiking_fraction(hike.hiking_fraction))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AnyError> {
    let json = serde_json::to_string(value)?;
    println!("{json}");
    Ok(())
}

fn plot_ascii(data: &[(f32, f32)]) {
    let xmax = data.last().map_or(1.0, |&(x, _)| x.max(1.0));
    Chart::new(300, 150, 0.0, xmax)
        .lineplot(&Shape::Lines(data))
        .display();
}

fn print_summary(summary: &trail::Summary) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "distance:        {:.1} mi", summary.total_distance_miles)?;
    writeln!(stdout, "gain:            {:.0} ft", summary.total_gain_ft)?;
    writeln!(stdout, "loss:            {:.0} ft", summary.total_loss_ft)?;
    writeln!(
        stdout,
        "elevation:       {:.0} to {:.0} ft, avg {:.0} ft",
        summary.min_elevation_ft, summary.max_elevation_ft, summary.avg_elevation_ft
    )?;
    writeln!(
        stdout,
        "grade:           avg {:.2} %, max {:.2} %",
        summary.avg_grade_percent, summary.max_grade_percent
    )?;
    writeln!(
        stdout,
        "peaks/valleys:   {}/{}",
        summary.significant_peaks, summary.significant_valleys
    )?;
    writeln!(stdout, "regions:         {}", summary.regions)?;
    writeln!(
        stdout,
        "hiking time:     {:.0} h, {:.0} days at 8 h, {:.1} months",
        summary.hiking_time.total_hours,
        summary.hiking_time.days_at_8hr,
        summary.hiking_time.months
    )?;
    Ok(())
}

fn print_regions(regions: &[trail::RegionSummary]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{:<16} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "region", "miles", "min_ft", "max_ft", "gain_ft", "loss_ft", "max_gr%"
    )?;
    for r in regions {
        writeln!(
            stdout,
            "{:<16} {:>8.1} {:>8.0} {:>8.0} {:>8.0} {:>8.0} {:>8.2}",
            r.region,
            r.miles,
            r.min_elevation_ft,
            r.max_elevation_ft,
            r.total_gain_ft,
            r.total_loss_ft,
            r.max_grade_percent
        )?;
    }
    Ok(())
}

fn print_difficulty(
    distribution: &std::collections::BTreeMap<trail::Difficulty, trail::DifficultyStats>,
) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{:<16} {:>8} {:>8} {:>8} {:>8}",
        "difficulty", "miles", "pct", "avg_gr%", "max_gr%"
    )?;
    for (difficulty, stats) in distribution {
        writeln!(
            stdout,
            "{:<16} {:>8.1} {:>8.1} {:>8.2} {:>8.2}",
            difficulty.label(),
            stats.miles,
            stats.pct_of_total,
            stats.avg_grade_percent,
            stats.max_grade_percent
        )?;
    }
    Ok(())
}

fn print_windows(windows: &[trail::WindowSummary]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{:>8} {:>8} {:<16} {:>8} {:>8} {:>8}",
        "start", "end", "region", "gain_ft", "max_ft", "avg_gr%"
    )?;
    for w in windows {
        writeln!(
            stdout,
            "{:>8.1} {:>8.1} {:<16} {:>8.0} {:>8.0} {:>8.2}",
            w.start_mile, w.end_mile, w.region, w.gain_ft, w.max_elevation_ft, w.avg_grade_percent
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Extremum<'a> {
    index: usize,
    kind: &'static str,
    distance_miles: f64,
    elevation_ft: f64,
    region: &'a str,
}

fn extrema<'a>(
    samples: &'a [RouteSample],
    indices: &'a [usize],
    kind: &'static str,
) -> impl Iterator<Item = Extremum<'a>> + 'a {
    indices.iter().filter_map(move |&index| {
        samples.get(index).map(|s| Extremum {
            index,
            kind,
            distance_miles: s.distance_miles,
            elevation_ft: s.elevation_ft,
            region: &s.region,
        })
    })
}

fn print_extrema(rows: &[Extremum<'_>]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    for row in rows {
        writeln!(
            stdout,
            "{:<6} mile {:>7.1} {:>6.0} ft  {}",
            row.kind, row.distance_miles, row.elevation_ft, row.region
        )?;
    }
    let counts = rows.iter().counts_by(|row| row.kind);
    writeln!(
        stdout,
        "{}",
        counts
            .iter()
            .sorted()
            .map(|(kind, count)| format!("{count} {kind}s"))
            .join(", ")
    )?;
    Ok(())
}

fn print_hiking_time(time: &trail::HikingTime) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "flat:      {:.1} h", time.flat_hours)?;
    writeln!(stdout, "ascent:    {:.1} h", time.ascent_hours)?;
    writeln!(stdout, "descent:   {:.1} h", time.descent_hours)?;
    writeln!(stdout, "total:     {:.1} h", time.total_hours)?;
    writeln!(
        stdout,
        "days:      {:.1} at 8 h, {:.1} at 10 h",
        time.days_at_8hr, time.days_at_10hr
    )?;
    writeln!(stdout, "months:    {:.1}", time.months)?;
    Ok(())
}

fn print_projection(p: &PaceProjection) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{} {} to {} ({:.1} days)",
        p.direction, p.start_date, p.end_date, p.total_days
    )?;
    writeln!(stdout, "miles/day:       {:.2}", p.miles_per_day)?;
    writeln!(
        stdout,
        "daylight:        avg {:.2} h, min {:.2} h, max {:.2} h",
        p.avg_daylight_hours, p.min_daylight_hours, p.max_daylight_hours
    )?;
    writeln!(stdout, "hiking h/day:    {:.2}", p.hiking_hours_per_day)?;
    writeln!(stdout, "required pace:   {:.2} mph", p.required_pace_mph)?;
    writeln!(stdout, "realistic pace:  {:.2} mph", p.realistic_pace_mph)?;
    writeln!(stdout, "verdict:         {}", p.verdict)?;
    Ok(())
}

fn print_durations(estimates: &[DurationEstimate]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{:>6} {:>8} {:>9} {:>7} {:>7} {:>11}",
        "mph", "h/day", "mi/day", "days", "months", "end"
    )?;
    for e in estimates {
        writeln!(
            stdout,
            "{:>6.2} {:>8.2} {:>9.2} {:>7.1} {:>7.1} {:>11}",
            e.target_pace_mph,
            e.hiking_hours_per_day,
            e.miles_per_day,
            e.total_days,
            e.total_months,
            e.end_date
        )?;
    }
    Ok(())
}

fn print_start_windows(windows: &[PaceProjection]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "{:<10} {:>7} {:>7} {:>7} {:>7} {:>8} {:>9}  verdict",
        "month", "end", "avg_h", "min_h", "max_h", "hike_h", "pace_mph"
    )?;
    for w in windows {
        writeln!(
            stdout,
            "{:<10} {:>7} {:>7.2} {:>7.2} {:>7.2} {:>8.2} {:>9.2}  {}",
            w.start_date.format("%B").to_string(),
            w.end_date.format("%b %d").to_string(),
            w.avg_daylight_hours,
            w.min_daylight_hours,
            w.max_daylight_hours,
            w.hiking_hours_per_day,
            w.realistic_pace_mph,
            w.verdict
        )?;
    }
    writeln!(stdout, "(all starts on day {START_WINDOW_DAY} of the month)")?;
    Ok(())
}

#[derive(Serialize)]
struct FktReport {
    metrics: FktMetrics,
    strategies: Vec<PacingStrategy>,
    terrain: Vec<TerrainPace>,
    toughest_days: Vec<DaySegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daylight: Option<Vec<DaylightScenario>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    durations: Option<Vec<MileageEstimate>>,
}

fn fkt_report(samples: &[RouteSample], daylight: bool, year: i32) -> Result<FktReport, AnyError> {
    let analysis = FktAnalysis::new(samples)?;
    let (scenarios, durations) = if daylight {
        let spring = chrono::NaiveDate::from_ymd_opt(year, 3, START_WINDOW_DAY)
            .ok_or_else(|| anyhow::anyhow!("invalid year {year}"))?;
        (
            Some(analysis.daylight_scenarios(year)?),
            Some(analysis.duration_scenarios(spring)?),
        )
    } else {
        (None, None)
    };
    Ok(FktReport {
        metrics: analysis.metrics()?,
        strategies: analysis.strategies()?,
        terrain: analysis.pace_by_terrain()?,
        toughest_days: toughest_days(&analysis.daily_segments()?, 5),
        daylight: scenarios,
        durations,
    })
}

fn print_fkt(report: &FktReport) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    let m = &report.metrics;
    writeln!(stdout, "record:          {} ({:.2} h)", m.record, m.total_hours)?;
    writeln!(
        stdout,
        "pace:            {:.2} mph overall, {:.2} mph moving, {:.1} min/mi",
        m.avg_mph, m.moving_mph, m.minutes_per_mile
    )?;
    writeln!(
        stdout,
        "per day:         {:.1} mi, {:.1} h hiking, {:.0} ft gain",
        m.miles_per_day, m.hiking_hours_per_day, m.gain_per_day_ft
    )?;
    writeln!(
        stdout,
        "vs thru-hikes:   {:.2}x typical, {:.2}x fast",
        m.vs_typical, m.vs_fast
    )?;

    writeln!(stdout)?;
    for s in &report.strategies {
        writeln!(
            stdout,
            "{:<22} {:>6.1} days {:>6.1} mi/day {:>5.1} h/day {:>5.2} mph  {}",
            s.name, s.total_days, s.miles_per_day, s.hours_per_day, s.moving_mph, s.difficulty
        )?;
    }

    writeln!(stdout)?;
    for t in &report.terrain {
        writeln!(
            stdout,
            "{:<16} {:>7.1} mi {:>5.1} % {:>6.2} %gr  {:.2} mph ~ {:.2} mph flat",
            t.difficulty.label(),
            t.miles,
            t.pct_of_trail,
            t.avg_grade_percent,
            t.required_mph,
            t.equivalent_flat_mph
        )?;
    }

    writeln!(stdout)?;
    for d in &report.toughest_days {
        writeln!(
            stdout,
            "day {:>2}: mile {:>6.1} to {:>6.1}, {} to {}, {:.0} ft gain",
            d.day, d.start_mile, d.end_mile, d.starting_region, d.ending_region, d.gain_ft
        )?;
    }

    if let Some(scenarios) = &report.daylight {
        writeln!(stdout)?;
        for s in scenarios {
            let p = &s.projection;
            writeln!(
                stdout,
                "{:<22} avg {:.2} h daylight, {:.2} mph realistic: {}",
                s.name, p.avg_daylight_hours, p.realistic_pace_mph, p.verdict
            )?;
        }
    }
    drop(stdout);
    if let Some(durations) = &report.durations {
        println!();
        let rows: Vec<DurationEstimate> = durations.iter().map(MileageEstimate::duration).collect();
        print_durations(&rows)?;
    }
    Ok(())
}
