//! Error types for payout computation

use thiserror::Error;

/// Result type alias using PayoutError
pub type Result<T> = std::result::Result<T, PayoutError>;

/// Errors raised by the payout core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayoutError {
    /// Burning cost window with start after end
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },

    /// Tier with a non-positive radius or a payout outside (0, 100]
    #[error("invalid payout tier (radius {radius_km} km, min magnitude {min_magnitude}, payout {payout_pct}%): {reason}")]
    InvalidTier {
        radius_km: f64,
        min_magnitude: f64,
        payout_pct: f64,
        reason: &'static str,
    },
}
