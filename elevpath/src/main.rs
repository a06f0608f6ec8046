#![allow(clippy::cast_possible_truncation)]

mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use open_elevation::{ElevationClient, RetryPolicy};
use options::{Cli, Command as CliCmd};
use serde::Serialize;
use std::io::Write;
use terrain_profile::Profile;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let client = ElevationClient::with_endpoint(&cli.endpoint)?.retry_policy(RetryPolicy {
        max_attempts: cli.max_retries,
        ..RetryPolicy::default()
    });

    let profile = Profile::builder()
        .start(cli.start.0)
        .end(cli.dest.0)
        .points(cli.points)
        .build(&client)?;

    match cli.cmd {
        CliCmd::Csv => print_csv(&profile)?,
        CliCmd::Json => print_json(&profile)?,
        CliCmd::Plot => plot_ascii(&profile, cli.earth_curve),
    };

    Ok(())
}

fn print_csv(profile: &Profile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Longitude,Latitude,Elevation,Curvature")?;
    for sample in profile.samples() {
        let longitude = sample.point.x();
        let latitude = sample.point.y();
        writeln!(
            stdout,
            "{},{longitude},{latitude},{},{}",
            sample.distance_m, sample.elevation_m, sample.curvature_m,
        )?;
    }
    Ok(())
}

fn print_json(profile: &Profile) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry {
        location: [f64; 2],
        distance: f64,
        elevation: f64,
        curvature: f64,
    }

    let reshaped: Vec<JsonEntry> = profile
        .samples()
        .map(|sample| JsonEntry {
            location: [sample.point.x(), sample.point.y()],
            distance: sample.distance_m,
            elevation: sample.elevation_m,
            curvature: sample.curvature_m,
        })
        .collect();
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

fn plot_ascii(profile: &Profile, earth_curve: bool) {
    let terrain: Vec<(f32, f32)> = profile
        .samples()
        .map(|sample| {
            let elevation = if earth_curve {
                sample.elevation_m + sample.curvature_m
            } else {
                sample.elevation_m
            };
            (sample.distance_m as f32, elevation as f32)
        })
        .collect();

    let mut chart = Chart::new(300, 150, 0.0, profile.distance_m as f32);
    if earth_curve {
        // Raise the curvature line to the lowest terrain sample so
        // both curves share the chart. Display-only offset.
        let elev_min = profile
            .elevations_m
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min);
        let curve: Vec<(f32, f32)> = profile
            .samples()
            .map(|sample| {
                (
                    sample.distance_m as f32,
                    (sample.curvature_m + elev_min) as f32,
                )
            })
            .collect();
        chart
            .lineplot(&Shape::Lines(&terrain))
            .lineplot(&Shape::Lines(&curve))
            .display();
    } else {
        chart.lineplot(&Shape::Lines(&terrain)).display();
    }
}
