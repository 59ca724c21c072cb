//! Analysis parameters
//!
//! Every field has a default, so a JSON file only needs the values that
//! differ from the Greek reference asset.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogQuery, CATALOG_END_DATE};
use crate::error::PayoutError;
use crate::geo::Location;
use crate::payout::PayoutStructure;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] PayoutError),

    /// Catalog request would miss events that a tier pays for
    #[error("catalog query (radius {radius_km} km, min magnitude {min_magnitude}) does not cover payout tiers (radius {tier_radius_km} km, min magnitude {tier_min_magnitude})")]
    QueryNarrowerThanTiers {
        radius_km: f64,
        min_magnitude: f64,
        tier_radius_km: f64,
        tier_min_magnitude: f64,
    },
}

/// Parameters for a single-asset payout analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Insured asset location
    #[serde(default = "default_asset")]
    pub asset: Location,

    /// Catalog search radius around the asset (km)
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Smallest magnitude requested from the catalog
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,

    /// Last catalog date (capped at 2021-10-21)
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,

    /// First year of the burning cost window
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Last year of the burning cost window (inclusive)
    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Payout tiers
    #[serde(default)]
    pub tiers: PayoutStructure,
}

fn default_asset() -> Location { Location::new(35.025, 25.763) }
fn default_radius_km() -> f64 { 200.0 }
fn default_min_magnitude() -> f64 { 4.5 }
fn default_end_date() -> NaiveDate { CATALOG_END_DATE }
fn default_start_year() -> i32 { 1972 }
fn default_end_year() -> i32 { 2021 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            asset: default_asset(),
            radius_km: default_radius_km(),
            min_magnitude: default_min_magnitude(),
            end_date: default_end_date(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            tiers: PayoutStructure::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file, filling missing fields with defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the burning cost window and that the catalog query reaches
    /// every event a tier can pay for
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_year > self.end_year {
            return Err(PayoutError::InvalidRange { start: self.start_year, end: self.end_year }.into());
        }

        if let (Some(tier_radius_km), Some(tier_min_magnitude)) =
            (self.tiers.max_radius_km(), self.tiers.min_magnitude())
        {
            if self.radius_km < tier_radius_km || self.min_magnitude > tier_min_magnitude {
                return Err(ConfigError::QueryNarrowerThanTiers {
                    radius_km: self.radius_km,
                    min_magnitude: self.min_magnitude,
                    tier_radius_km,
                    tier_min_magnitude,
                });
            }
        }
        Ok(())
    }

    /// Catalog request for the configured asset
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.asset, self.radius_km, self.min_magnitude, self.end_date)
    }
}
