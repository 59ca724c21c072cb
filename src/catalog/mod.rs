//! Earthquake catalog: event records, CSV ingestion and USGS retrieval

mod event;
pub mod loader;
mod query;
pub mod client;

pub use event::EarthquakeEvent;
pub use loader::{load_events, load_events_from_path, load_events_from_reader};
pub use query::{CatalogQuery, CATALOG_END_DATE, CATALOG_START_DATE, USGS_QUERY_URL};
pub use client::{combine_successful, fetch_for_locations, CatalogClient, CombinedEvents, LocationEvents};

use thiserror::Error;

/// Errors from catalog retrieval and parsing
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
