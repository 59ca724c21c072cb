//! Earthquake payouts - historical parametric cover analysis
//!
//! This library provides:
//! - Great-circle distance between catalog events and an insured asset
//! - Tiered payout classification of individual events
//! - Yearly payout aggregation (one payout per year, the maximum)
//! - Burning cost over an inclusive year window
//! - Retrieval of event data from the USGS catalog, for one or many assets

pub mod error;
pub mod geo;
pub mod payout;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use error::{PayoutError, Result};
pub use geo::{haversine_km, Location};
pub use payout::{burning_cost, compute_payouts, PayoutStructure, PayoutTier, YearlyPayouts};
pub use catalog::{CatalogClient, CatalogQuery, EarthquakeEvent};
pub use config::AnalysisConfig;
