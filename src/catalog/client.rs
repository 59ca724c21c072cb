//! Async catalog retrieval for one or many asset locations

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use log::{info, warn};

use super::{load_events, CatalogError, CatalogQuery, EarthquakeEvent};
use crate::geo::Location;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the USGS event service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Fetch and parse all events matching a query
    pub async fn fetch_events(&self, query: &CatalogQuery) -> Result<Vec<EarthquakeEvent>, CatalogError> {
        let url = query.url();
        info!("Fetching catalog events: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16(), url });
        }

        let body = response.text().await?;
        let events = load_events(&body)?;
        info!(
            "Fetched {} events around ({}, {})",
            events.len(),
            query.location.latitude,
            query.location.longitude
        );
        Ok(events)
    }

    /// Fetch events for every location concurrently with shared query parameters
    pub async fn fetch_many(&self, base: &CatalogQuery, locations: &[Location]) -> Vec<LocationEvents> {
        fetch_for_locations(locations, |location| {
            let query = base.at(location);
            async move { self.fetch_events(&query).await }
        })
        .await
    }
}

/// Outcome of the fetch for a single location
#[derive(Debug)]
pub struct LocationEvents {
    pub location: Location,
    pub result: Result<Vec<EarthquakeEvent>, CatalogError>,
}

/// Successful events merged across locations, plus the locations that failed
#[derive(Debug, Default)]
pub struct CombinedEvents {
    pub events: Vec<EarthquakeEvent>,
    pub failed: Vec<(Location, CatalogError)>,
}

/// Run one fetch per location concurrently and wait for all of them
///
/// Results are returned in input order, one per location. A failure for
/// one location does not affect the others.
pub async fn fetch_for_locations<F, Fut>(locations: &[Location], fetch: F) -> Vec<LocationEvents>
where
    F: Fn(Location) -> Fut,
    Fut: Future<Output = Result<Vec<EarthquakeEvent>, CatalogError>>,
{
    let pending = locations.iter().map(|&location| {
        let request = fetch(location);
        async move {
            let result = request.await;
            if let Err(err) = &result {
                warn!("Catalog fetch failed for ({}, {}): {}", location.latitude, location.longitude, err);
            }
            LocationEvents { location, result }
        }
    });

    join_all(pending).await
}

/// Concatenate successful results in location order; collect failures
pub fn combine_successful(results: Vec<LocationEvents>) -> CombinedEvents {
    results.into_iter().fold(CombinedEvents::default(), |mut combined, outcome| {
        match outcome.result {
            Ok(events) => combined.events.extend(events),
            Err(err) => combined.failed.push((outcome.location, err)),
        }
        combined
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event_at(location: Location, year: i32) -> EarthquakeEvent {
        let time = Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap();
        EarthquakeEvent::new(time, location.latitude, location.longitude, 5.0)
    }

    fn assets() -> Vec<Location> {
        vec![
            Location::new(35.0, 25.0),
            Location::new(38.0, 23.7),
            Location::new(40.6, 22.9),
        ]
    }

    #[tokio::test]
    async fn test_results_in_input_order() {
        let locations = assets();
        let results = fetch_for_locations(&locations, |location| async move {
            // Later locations finish first
            let delay = (45.0 - location.latitude) as u64;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![event_at(location, 2000), event_at(location, 2001)])
        })
        .await;

        assert_eq!(results.len(), 3);
        for (outcome, location) in results.iter().zip(&locations) {
            assert_eq!(outcome.location, *location);
            let events = outcome.result.as_ref().unwrap();
            assert_eq!(events.len(), 2);
            assert!(events.iter().all(|e| e.location() == *location));
        }
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let locations = assets();
        let failing = locations[1];
        let results = fetch_for_locations(&locations, |location| async move {
            if location == failing {
                Err(CatalogError::Status { status: 503, url: "test".to_string() })
            } else {
                Ok(vec![event_at(location, 1999)])
            }
        })
        .await;

        assert!(results[0].result.is_ok());
        assert!(matches!(results[1].result, Err(CatalogError::Status { status: 503, .. })));
        assert!(results[2].result.is_ok());

        let combined = combine_successful(results);
        assert_eq!(combined.events.len(), 2);
        assert_eq!(combined.events[0].location(), locations[0]);
        assert_eq!(combined.events[1].location(), locations[2]);
        assert_eq!(combined.failed.len(), 1);
        assert_eq!(combined.failed[0].0, failing);
    }

    #[tokio::test]
    async fn test_no_locations() {
        let results = fetch_for_locations(&[], |location| async move {
            Ok(vec![event_at(location, 2000)])
        })
        .await;
        assert!(results.is_empty());
        assert!(combine_successful(results).events.is_empty());
    }
}
