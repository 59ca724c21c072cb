//! USGS FDSN event query construction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::geo::Location;

/// FDSN event service endpoint
pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// First day of the catalog window
pub const CATALOG_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1823, 1, 1) {
    Some(d) => d,
    None => panic!("invalid catalog start date"),
};

/// Events after this date are never considered
pub const CATALOG_END_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 10, 21) {
    Some(d) => d,
    None => panic!("invalid catalog end date"),
};

/// Parameters of a single-location catalog request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub location: Location,
    pub radius_km: f64,
    pub min_magnitude: f64,
    pub end_date: NaiveDate,
}

impl CatalogQuery {
    pub fn new(location: Location, radius_km: f64, min_magnitude: f64, end_date: NaiveDate) -> Self {
        Self { location, radius_km, min_magnitude, end_date }
    }

    /// Same parameters centred on another location
    pub fn at(&self, location: Location) -> Self {
        Self { location, ..self.clone() }
    }

    /// End date capped at the last date the catalog is considered for
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.min(CATALOG_END_DATE)
    }

    /// Full request URL, CSV format
    pub fn url(&self) -> String {
        format!(
            "{}?format=csv&latitude={}&longitude={}&starttime={}&endtime={}&minmagnitude={}&maxradiuskm={}",
            USGS_QUERY_URL,
            self.location.latitude,
            self.location.longitude,
            CATALOG_START_DATE.format("%Y-%m-%d"),
            self.effective_end_date().format("%Y-%m-%d"),
            self.min_magnitude,
            self.radius_km,
        )
    }
}
