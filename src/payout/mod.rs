//! Payout engine: tier classification, yearly aggregation and burning cost

mod tiers;
mod yearly;
mod burning;

pub use tiers::{PayoutStructure, PayoutTier};
pub use yearly::{aggregate_yearly, classify_events, compute_payouts, EventPayout, YearlyPayouts};
pub use burning::burning_cost;

// ============================================================================
// Default Payout Structure
// ============================================================================
// Parametric cover for a single asset in Greece. An event qualifies for a tier
// when it is within the tier radius AND at or above the tier magnitude. The
// event pays the highest qualifying tier.

/// Default tiers as (radius km, minimum magnitude, payout %)
pub const DEFAULT_TIERS: [(f64, f64, f64); 3] = [
    (10.0, 4.5, 100.0),
    (50.0, 5.5, 75.0),
    (200.0, 6.5, 50.0),
];
