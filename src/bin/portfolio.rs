//! Burning cost for a portfolio of assets
//!
//! Reads an assets CSV (latitude,longitude), fetches catalog events for
//! every asset concurrently and computes each asset's payouts in parallel.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use earthquake_payouts::catalog::{CatalogClient, LocationEvents};
use earthquake_payouts::payout::{burning_cost, compute_payouts};
use earthquake_payouts::{AnalysisConfig, Location};

#[derive(Debug, Parser)]
#[command(about = "Earthquake burning cost for many assets")]
struct Args {
    /// CSV file with latitude,longitude columns
    assets: PathBuf,

    /// JSON config file for shared parameters (asset location is ignored)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_assets(path: &Path) -> Result<Vec<Location>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut assets = Vec::new();
    for result in rdr.deserialize() {
        let location: Location = result.context("Failed to parse asset row")?;
        assets.push(location);
    }
    Ok(assets)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let assets = load_assets(&args.assets)?;
    println!("Loaded {} assets", assets.len());

    let start = Instant::now();
    let client = CatalogClient::new().context("Failed to build HTTP client")?;
    let outcomes: Vec<LocationEvents> = client.fetch_many(&config.catalog_query(), &assets).await;
    println!("Fetched catalog data in {:?}", start.elapsed());

    // Payouts per asset in parallel; failed fetches keep their error
    let rows: Vec<(Location, Result<(usize, usize, f64)>)> = outcomes
        .par_iter()
        .map(|outcome| {
            let row = match &outcome.result {
                Ok(events) => {
                    let yearly = compute_payouts(events, &outcome.location, &config.tiers);
                    burning_cost(&yearly, config.start_year, config.end_year)
                        .map(|bc| (events.len(), yearly.len(), bc))
                        .map_err(anyhow::Error::from)
                }
                Err(err) => Err(anyhow::anyhow!("fetch failed: {}", err)),
            };
            (outcome.location, row)
        })
        .collect();

    println!(
        "{:<10} {:<10} {:>7} {:>12} {:>13}",
        "Latitude", "Longitude", "Events", "PayoutYears", "BurningCost%"
    );
    let mut failures = 0;
    for (location, row) in &rows {
        match row {
            Ok((events, payout_years, bc)) => println!(
                "{:<10.4} {:<10.4} {:>7} {:>12} {:>13.2}",
                location.latitude, location.longitude, events, payout_years, bc
            ),
            Err(err) => {
                failures += 1;
                println!("{:<10.4} {:<10.4} {}", location.latitude, location.longitude, err);
            }
        }
    }

    println!(
        "\n{} assets, {} failed, window {}-{}, total time {:?}",
        rows.len(),
        failures,
        config.start_year,
        config.end_year,
        start.elapsed()
    );

    Ok(())
}
