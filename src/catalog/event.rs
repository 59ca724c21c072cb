//! Earthquake event record

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Location};

/// One historical seismic event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
}

impl EarthquakeEvent {
    pub fn new(time: DateTime<Utc>, latitude: f64, longitude: f64, magnitude: f64) -> Self {
        Self { time, latitude, longitude, magnitude }
    }

    /// Calendar year of the event (UTC)
    pub fn year(&self) -> i32 {
        self.time.year()
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// Great-circle distance from the event epicentre to the asset (km)
    pub fn distance_to(&self, asset: &Location) -> f64 {
        haversine_km(&self.location(), asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_year_and_distance() {
        let time = Utc.with_ymd_and_hms(2021, 10, 12, 9, 24, 5).unwrap();
        let event = EarthquakeEvent::new(time, 35.1691, 26.2152, 6.0);

        assert_eq!(event.year(), 2021);
        assert_abs_diff_eq!(
            event.distance_to(&Location::new(35.0, 25.0)),
            112.282482,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_year_is_utc() {
        // 23:30 on New Year's Eve in UTC stays in the old year
        let time: DateTime<Utc> = "1999-12-31T23:30:00Z".parse().unwrap();
        let event = EarthquakeEvent::new(time, 38.0, 23.6, 5.9);
        assert_eq!(event.year(), 1999);
    }
}
