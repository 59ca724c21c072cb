//! Burning cost: average yearly payout over a window

use super::YearlyPayouts;
use crate::error::{PayoutError, Result};

/// Mean payout percentage over the inclusive window [start_year, end_year]
///
/// Years without a payout count as 0. The denominator is the number of
/// years in the window, not the number of payout years.
pub fn burning_cost(yearly: &YearlyPayouts, start_year: i32, end_year: i32) -> Result<f64> {
    if start_year > end_year {
        return Err(PayoutError::InvalidRange { start: start_year, end: end_year });
    }

    let years = (i64::from(end_year) - i64::from(start_year) + 1) as f64;
    Ok(yearly.sum_between(start_year, end_year) / years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_events() -> YearlyPayouts {
        vec![(1950, 50.0), (1992, 75.0)].into_iter().collect()
    }

    #[test]
    fn test_window_lengths() {
        let yearly = two_events();

        // 125 / 100 years
        assert_abs_diff_eq!(burning_cost(&yearly, 1922, 2021).unwrap(), 1.25, epsilon = 1e-12);
        // Only 1992 inside, 75 / 50 years
        assert_abs_diff_eq!(burning_cost(&yearly, 1972, 2021).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_historical_series() {
        // Payout years of the Greek asset, 1906-2021
        let yearly: YearlyPayouts = vec![
            (1910, 75.0), (1922, 50.0), (1938, 75.0), (1940, 75.0), (1948, 50.0),
            (1952, 50.0), (1956, 50.0), (1983, 75.0), (1989, 75.0), (1998, 100.0),
            (2008, 75.0), (2011, 75.0), (2016, 100.0), (2020, 75.0), (2021, 75.0),
        ]
        .into_iter()
        .collect();

        // 750 over 70 years
        let bc = burning_cost(&yearly, 1952, 2021).unwrap();
        assert_abs_diff_eq!(bc, 750.0 / 70.0, epsilon = 1e-12);
        assert_abs_diff_eq!((bc * 100.0).round() / 100.0, 10.71, epsilon = 1e-12);

        // Single year without payout
        assert_eq!(burning_cost(&yearly, 1953, 1953).unwrap(), 0.0);
        // Single year with payout
        assert_eq!(burning_cost(&yearly, 1998, 1998).unwrap(), 100.0);
    }

    #[test]
    fn test_no_payout_years_is_zero() {
        let yearly = two_events();
        assert_eq!(burning_cost(&yearly, 1951, 1991).unwrap(), 0.0);
        assert_eq!(burning_cost(&YearlyPayouts::new(), 1900, 2000).unwrap(), 0.0);
    }

    #[test]
    fn test_linear_in_payout_years() {
        let n = 40;
        let (start, end) = (1980, 1980 + n - 1);
        let mut yearly = YearlyPayouts::new();
        let before = burning_cost(&yearly, start, end).unwrap();

        yearly.record(1995, 75.0);
        let after = burning_cost(&yearly, start, end).unwrap();
        assert_abs_diff_eq!(after - before, 75.0 / f64::from(n), epsilon = 1e-12);
    }

    #[test]
    fn test_full_i32_window() {
        let yearly: YearlyPayouts = vec![(1950, 50.0)].into_iter().collect();
        let bc = burning_cost(&yearly, i32::MIN, i32::MAX).unwrap();

        // 2^32 years in the window
        assert_abs_diff_eq!(bc, 50.0 / 4_294_967_296.0, epsilon = 1e-18);
        assert!(bc.is_finite());
    }

    #[test]
    fn test_invalid_range() {
        let yearly = two_events();
        for &(start, end) in &[(1952, 1950), (2021, 2020), (0, -1)] {
            assert_eq!(
                burning_cost(&yearly, start, end),
                Err(PayoutError::InvalidRange { start, end })
            );
        }
    }
}
