//! Derive golf metrics from launch data on the command line.
//!
//! Usage:
//!   launchmath --ball-speed 70 --vla 12.5 --hla 0 --spin 2800 --axis 5
//!   some-recorder | launchmath --stdin
//!
//! Stdin mode reads one JSON shot per line, e.g.
//! `{"ball_speed": 70.0, "vertical_launch_angle": 12.5}`, and prints one JSON
//! object of derived metrics per line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use launchmath::{ClubSpeedModel, Config, DerivedMetrics, ShotInput};

#[derive(Parser, Debug)]
#[command(name = "launchmath")]
#[command(about = "Derived golf metrics from launch monitor ball data", long_about = None)]
struct Args {
    /// Ball speed (m/s)
    #[arg(long)]
    ball_speed: Option<f64>,

    /// Vertical launch angle (deg)
    #[arg(long, allow_negative_numbers = true)]
    vla: Option<f64>,

    /// Horizontal launch angle (deg, negative = left)
    #[arg(long, allow_negative_numbers = true)]
    hla: Option<f64>,

    /// Total spin (RPM)
    #[arg(long)]
    spin: Option<f64>,

    /// Spin axis (deg, negative = draw/hook)
    #[arg(long, allow_negative_numbers = true)]
    axis: Option<f64>,

    /// Read JSON shots from stdin, one per line
    #[arg(long, conflicts_with_all = ["ball_speed", "vla", "hla", "spin", "axis"])]
    stdin: bool,

    /// Estimate club speed with the impact-band (COR) model
    #[arg(long)]
    impact_band: bool,

    /// Pretty-print output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn shot(&self) -> ShotInput {
        ShotInput {
            ball_speed: self.ball_speed,
            vertical_launch_angle: self.vla,
            horizontal_launch_angle: self.hla,
            total_spin: self.spin,
            spin_axis: self.axis,
        }
    }

    fn config(&self) -> Config {
        let model = if self.impact_band {
            ClubSpeedModel::ImpactBand
        } else {
            ClubSpeedModel::Smash
        };
        Config::default().with_club_speed_model(model)
    }
}

fn print_metrics(out: &mut impl Write, metrics: &DerivedMetrics, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, metrics)?;
    } else {
        serde_json::to_writer(&mut *out, metrics)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.stdin {
        let shot = args.shot().validate()?;
        let metrics = launchmath::derive_with(&shot, &config);
        return print_metrics(&mut out, &metrics, args.pretty);
    }

    for (idx, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let shot: ShotInput = match serde_json::from_str(&line) {
            Ok(shot) => shot,
            Err(e) => {
                log::warn!("line {}: skipping malformed shot: {e}", idx + 1);
                continue;
            }
        };
        let shot = shot.validate().with_context(|| format!("line {}", idx + 1))?;
        let metrics = launchmath::derive_with(&shot, &config);
        log::info!("line {}: {} metrics", idx + 1, metrics.len());
        print_metrics(&mut out, &metrics, args.pretty)?;
    }

    Ok(())
}
