//! Yearly payouts and burning cost for a single asset
//!
//! Events come from a local USGS CSV export (--csv) or are fetched from the
//! catalog service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use earthquake_payouts::catalog::{load_events_from_path, CatalogClient};
use earthquake_payouts::payout::{burning_cost, compute_payouts, YearlyPayouts};
use earthquake_payouts::{AnalysisConfig, Location};

#[derive(Debug, Parser)]
#[command(about = "Historical earthquake payouts and burning cost for one asset")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read events from a CSV file instead of the catalog service
    #[arg(long)]
    csv: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Catalog search radius (km)
    #[arg(long)]
    radius: Option<f64>,

    #[arg(long)]
    min_magnitude: Option<f64>,

    /// Last catalog date, YYYY-MM-DD
    #[arg(long)]
    end_date: Option<NaiveDate>,

    #[arg(long)]
    start_year: Option<i32>,

    #[arg(long)]
    end_year: Option<i32>,

    /// Print a JSON report instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    asset: Location,
    events: usize,
    start_year: i32,
    end_year: i32,
    window_payout_years: usize,
    burning_cost: f64,
    yearly_payouts: &'a YearlyPayouts,
}

fn build_config(args: &Args) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(lat) = args.latitude {
        config.asset.latitude = lat;
    }
    if let Some(lon) = args.longitude {
        config.asset.longitude = lon;
    }
    if let Some(radius) = args.radius {
        config.radius_km = radius;
    }
    if let Some(mag) = args.min_magnitude {
        config.min_magnitude = mag;
    }
    if let Some(date) = args.end_date {
        config.end_date = date;
    }
    if let Some(year) = args.start_year {
        config.start_year = year;
    }
    if let Some(year) = args.end_year {
        config.end_year = year;
    }

    config.validate().context("Invalid analysis config")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let events = match &args.csv {
        Some(path) => load_events_from_path(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => {
            let client = CatalogClient::new().context("Failed to build HTTP client")?;
            client
                .fetch_events(&config.catalog_query())
                .await
                .context("Failed to fetch catalog events")?
        }
    };

    let yearly = compute_payouts(&events, &config.asset, &config.tiers);
    let bc = burning_cost(&yearly, config.start_year, config.end_year)?;
    let window_payout_years = yearly.years_with_payout_between(config.start_year, config.end_year);

    if args.json {
        let report = Report {
            asset: config.asset,
            events: events.len(),
            start_year: config.start_year,
            end_year: config.end_year,
            window_payout_years,
            burning_cost: bc,
            yearly_payouts: &yearly,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Asset ({}, {}): {} events, {} payout years",
        config.asset.latitude,
        config.asset.longitude,
        events.len(),
        yearly.len()
    );
    println!("{:<6} {:>8}", "Year", "Payout%");
    for (year, payout) in yearly.iter() {
        println!("{:<6} {:>8.1}", year, payout);
    }
    println!(
        "\nBurning cost {}-{}: {:.2}% ({} payout years in window)",
        config.start_year, config.end_year, bc, window_payout_years
    );

    Ok(())
}
