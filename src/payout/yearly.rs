//! Per-event classification and yearly payout aggregation

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::PayoutStructure;
use crate::catalog::EarthquakeEvent;
use crate::geo::Location;

/// Classification of a single catalog event against an asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventPayout {
    pub year: i32,
    pub magnitude: f64,
    pub distance_km: f64,
    /// None when no tier qualifies
    pub payout: Option<f64>,
}

/// Year -> maximum payout percentage for that year
///
/// Only years with a qualifying event are present. Recording several
/// payouts for the same year keeps the largest, never the sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct YearlyPayouts {
    payouts: BTreeMap<i32, f64>,
}

impl YearlyPayouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payout for a year, keeping the maximum
    ///
    /// A year is never present with a zero value.
    pub fn record(&mut self, year: i32, payout_pct: f64) {
        if payout_pct.is_nan() || payout_pct <= 0.0 {
            return;
        }
        self.payouts
            .entry(year)
            .and_modify(|current| *current = current.max(payout_pct))
            .or_insert(payout_pct);
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.payouts.get(&year).copied()
    }

    /// (year, payout) in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.payouts.iter().map(|(&y, &p)| (y, p))
    }

    pub fn len(&self) -> usize {
        self.payouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payouts.is_empty()
    }

    /// Sum of payouts over an inclusive year window
    pub(crate) fn sum_between(&self, start_year: i32, end_year: i32) -> f64 {
        self.payouts.range(start_year..=end_year).map(|(_, p)| p).sum()
    }

    /// Number of years with a payout in an inclusive year window
    pub fn years_with_payout_between(&self, start_year: i32, end_year: i32) -> usize {
        if start_year > end_year {
            return 0;
        }
        self.payouts.range(start_year..=end_year).count()
    }
}

impl FromIterator<(i32, f64)> for YearlyPayouts {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        let mut yearly = Self::new();
        for (year, payout) in iter {
            yearly.record(year, payout);
        }
        yearly
    }
}

/// Classify every event against the asset, preserving input order
pub fn classify_events(
    events: &[EarthquakeEvent],
    asset: &Location,
    structure: &PayoutStructure,
) -> Vec<EventPayout> {
    events
        .iter()
        .map(|event| {
            let distance_km = event.distance_to(asset);
            EventPayout {
                year: event.year(),
                magnitude: event.magnitude,
                distance_km,
                payout: structure.classify(event.magnitude, distance_km),
            }
        })
        .collect()
}

/// Collapse classified events into one payout per year
pub fn aggregate_yearly(classified: &[EventPayout]) -> YearlyPayouts {
    classified
        .iter()
        .filter_map(|e| e.payout.map(|p| (e.year, p)))
        .collect()
}

/// Yearly payouts for an asset from raw catalog events
pub fn compute_payouts(
    events: &[EarthquakeEvent],
    asset: &Location,
    structure: &PayoutStructure,
) -> YearlyPayouts {
    let classified = classify_events(events, asset, structure);
    let yearly = aggregate_yearly(&classified);

    debug!(
        "Classified {} events at ({}, {}): {} qualifying, {} payout years",
        classified.len(),
        asset.latitude,
        asset.longitude,
        classified.iter().filter(|e| e.payout.is_some()).count(),
        yearly.len()
    );

    yearly
}
