//! Geodesic distance on a spherical Earth

mod haversine;

pub use haversine::{haversine_km, distances_km};

use serde::{Deserialize, Serialize};

/// Earth radius used for all distance calculations (km)
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A point on the Earth's surface in decimal degrees
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180].
/// Validation is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to another location (km)
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_km(self, other)
    }
}
