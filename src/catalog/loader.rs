//! Load catalog events from USGS FDSN CSV
//!
//! Expected header (extra columns are ignored):
//! `time,latitude,longitude,depth,mag,magType,...`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

use super::{CatalogError, EarthquakeEvent};

/// Raw CSV row as published by the catalog
#[derive(Debug, Deserialize)]
struct CatalogRow {
    time: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    #[serde(alias = "magnitude")]
    mag: Option<f64>,
}

/// Parse events from any CSV reader
///
/// Rows without a magnitude are skipped. An empty input yields no events.
pub fn load_events_from_reader<R: Read>(reader: R) -> Result<Vec<EarthquakeEvent>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.deserialize() {
        let row: CatalogRow = result?;
        match row.mag {
            Some(magnitude) => {
                events.push(EarthquakeEvent::new(row.time, row.latitude, row.longitude, magnitude))
            }
            None => {
                skipped += 1;
                warn!("Skipping catalog event at {} with no magnitude", row.time);
            }
        }
    }

    debug!("Loaded {} catalog events ({} skipped)", events.len(), skipped);
    Ok(events)
}

/// Parse events from a CSV string (e.g. an HTTP response body)
pub fn load_events(csv_data: &str) -> Result<Vec<EarthquakeEvent>, CatalogError> {
    load_events_from_reader(csv_data.as_bytes())
}

/// Parse events from a CSV file on disk
pub fn load_events_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EarthquakeEvent>, CatalogError> {
    let file = File::open(path)?;
    load_events_from_reader(file)
}
