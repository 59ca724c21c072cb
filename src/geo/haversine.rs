//! Haversine great-circle distance
//!
//! a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
//! d = 2·R·asin(√a)

use super::{Location, EARTH_RADIUS_KM};

/// Great-circle distance between two points (km)
pub fn haversine_km(p: &Location, q: &Location) -> f64 {
    let lat1 = p.latitude.to_radians();
    let lat2 = q.latitude.to_radians();
    let half_dlat = (q.latitude - p.latitude).to_radians() / 2.0;
    let half_dlon = (q.longitude - p.longitude).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Distances from every point to a single reference (km), in input order
pub fn distances_km(points: &[Location], reference: &Location) -> Vec<f64> {
    points.iter().map(|p| haversine_km(p, reference)).collect()
}
