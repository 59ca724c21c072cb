//! Payout tiers and the per-event classifier

use serde::{Deserialize, Serialize};

use super::DEFAULT_TIERS;
use crate::error::{PayoutError, Result};

/// One row of the payout table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutTier {
    /// Maximum distance from the asset (km, inclusive)
    pub radius_km: f64,
    /// Minimum event magnitude (inclusive)
    pub min_magnitude: f64,
    /// Payout as a percentage of the limit, in (0, 100]
    pub payout_pct: f64,
}

impl PayoutTier {
    /// Create a validated tier
    pub fn new(radius_km: f64, min_magnitude: f64, payout_pct: f64) -> Result<Self> {
        let tier = Self { radius_km, min_magnitude, payout_pct };
        tier.validate()?;
        Ok(tier)
    }

    fn validate(&self) -> Result<()> {
        let reason = if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            Some("radius must be positive and finite")
        } else if !self.min_magnitude.is_finite() {
            Some("minimum magnitude must be finite")
        } else if !(self.payout_pct > 0.0 && self.payout_pct <= 100.0) {
            Some("payout must be in (0, 100]")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PayoutError::InvalidTier {
                radius_km: self.radius_km,
                min_magnitude: self.min_magnitude,
                payout_pct: self.payout_pct,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Whether an event at this distance and magnitude qualifies
    pub fn qualifies(&self, magnitude: f64, distance_km: f64) -> bool {
        distance_km <= self.radius_km && magnitude >= self.min_magnitude
    }
}

/// Ordered table of payout tiers
///
/// Tiers are evaluated independently; order does not affect the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PayoutTier>", into = "Vec<PayoutTier>")]
pub struct PayoutStructure {
    tiers: Vec<PayoutTier>,
}

impl Default for PayoutStructure {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(radius_km, min_magnitude, payout_pct)| PayoutTier {
                    radius_km,
                    min_magnitude,
                    payout_pct,
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<PayoutTier>> for PayoutStructure {
    type Error = PayoutError;

    fn try_from(tiers: Vec<PayoutTier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<PayoutStructure> for Vec<PayoutTier> {
    fn from(structure: PayoutStructure) -> Self {
        structure.tiers
    }
}

impl PayoutStructure {
    /// Create from caller-supplied tiers, validating each
    pub fn new(tiers: Vec<PayoutTier>) -> Result<Self> {
        for tier in &tiers {
            tier.validate()?;
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PayoutTier] {
        &self.tiers
    }

    /// Largest radius in the table, i.e. the catalog search radius that
    /// covers every tier
    pub fn max_radius_km(&self) -> Option<f64> {
        self.tiers.iter().map(|t| t.radius_km).reduce(f64::max)
    }

    /// Smallest magnitude in the table
    pub fn min_magnitude(&self) -> Option<f64> {
        self.tiers.iter().map(|t| t.min_magnitude).reduce(f64::min)
    }

    /// Payout for a single event
    ///
    /// Returns the maximum payout across all qualifying tiers, or None
    /// when no tier qualifies.
    pub fn classify(&self, magnitude: f64, distance_km: f64) -> Option<f64> {
        self.tiers
            .iter()
            .filter(|t| t.qualifies(magnitude, distance_km))
            .map(|t| t.payout_pct)
            .reduce(f64::max)
    }
}
