//! `segwind` command line tool
//!
//! Usage:
//! ```bash
//! # Rank segments for the first forecast day
//! segwind rank --input segments.json
//!
//! # Rank for a given day, top 3 only, as JSON
//! segwind rank --input segments.json --day 2024-03-02 --top 3 --json
//!
//! # Show the forecast overview of the dataset
//! segwind days --input segments.json
//!
//! # One-off helpers
//! segwind classify 247.5
//! segwind score --bearing 90 --wind-deg 270 --wind-speed 8
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use segwind::config::DatasetConfig;
use segwind::favorability::direction_label;
use segwind::models::ms_to_kmh;
use segwind::{Dataset, SegwindConfig, SegwindError, WindRelation, WindSample, classify, report};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "segwind",
    version,
    about = "Rank route segments by forecast tailwind",
    long_about = "Scores each segment's wind forecast against its direction of travel and ranks \
                  the segments from strong tailwind to strong headwind."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rank segments for one forecast day
    Rank {
        /// Segment JSON file, or `-` for stdin
        #[arg(long, short)]
        input: PathBuf,

        /// Forecast day label (defaults to the first day of the first segment)
        #[arg(long, short)]
        day: Option<String>,

        /// Number of top segments to list
        #[arg(long)]
        top: Option<usize>,

        /// Print the ranked segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the per-day wind overview
    Days {
        /// Segment JSON file, or `-` for stdin
        #[arg(long, short)]
        input: PathBuf,

        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the compass sector of a wind direction
    Classify {
        /// Direction in degrees
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },

    /// Rate a single wind observation against a travel bearing
    Score {
        /// Travel bearing in degrees
        #[arg(long, allow_negative_numbers = true)]
        bearing: f64,

        /// Direction the wind comes from, in degrees
        #[arg(long, allow_negative_numbers = true)]
        wind_deg: f64,

        /// Wind speed in m/s
        #[arg(long, default_value_t = 0.0)]
        wind_speed: f64,
    },
}

fn load_dataset(input: &Path, options: &DatasetConfig) -> Result<Dataset> {
    let dataset = if input == Path::new("-") {
        debug!("Reading segments from stdin");
        Dataset::from_reader(io::stdin().lock(), options)
    } else {
        Dataset::load(input, options)
    };
    dataset.with_context(|| format!("Failed to load segments from {}", input.display()))
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SegwindConfig::load_from_path(cli.config.clone())?;
    segwind::logging::init(&config.logging, cli.verbose)?;

    if let Some(path) = &cli.config {
        debug!("Using config from: {}", path.display());
    }

    match cli.command {
        Command::Rank {
            input,
            day,
            top,
            json,
        } => {
            if let Some(top) = top {
                config.display.top_segments = top;
                config.validate()?;
            }

            let dataset = load_dataset(&input, &config.dataset)?;
            let day = dataset.resolve_day(day.as_deref())?;
            let ranked = dataset.rank(&day);
            info!("Ranked {} segments for {}", ranked.len(), day);

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                let today = Local::now().date_naive();
                println!(
                    "{}\n",
                    report::render_forecast_overview(
                        &dataset.forecast_overview(),
                        Some(&day),
                        today
                    )
                );
                println!("{}", report::render_ranking(&ranked, &day, &config.display));
            }
        }
        Command::Days { input, json } => {
            let dataset = load_dataset(&input, &config.dataset)?;
            let overview = dataset.forecast_overview();

            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                let today = Local::now().date_naive();
                println!(
                    "{}",
                    report::render_forecast_overview(&overview, dataset.default_day(), today)
                );
            }
        }
        Command::Classify { degrees } => {
            if !degrees.is_finite() {
                return Err(SegwindError::validation("degrees must be a finite number").into());
            }
            println!("{}", classify(degrees));
        }
        Command::Score {
            bearing,
            wind_deg,
            wind_speed,
        } => {
            if !bearing.is_finite() || !wind_deg.is_finite() {
                return Err(
                    SegwindError::validation("bearing and wind direction must be finite").into(),
                );
            }
            if !wind_speed.is_finite() || wind_speed < 0.0 {
                return Err(
                    SegwindError::validation("wind speed must be a non-negative number").into(),
                );
            }

            let wind = WindSample::new(wind_deg, wind_speed);
            let relation = WindRelation::assess(Some(bearing), Some(&wind));
            let rating = relation.rating();

            println!("Rating:    {} {} ({relation})", rating, rating.stars());
            println!(
                "Wind:      {} at {} km/h",
                direction_label(Some(&wind)),
                report::format_speed(ms_to_kmh(wind_speed))
            );
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(segwind_err) = err.downcast_ref::<SegwindError>() {
                eprintln!("{}", segwind_err.user_message());
            }
            ExitCode::FAILURE
        }
    }
}
