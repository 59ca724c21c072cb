//! Catalog CSV through yearly payouts to burning cost

use approx::assert_abs_diff_eq;

use earthquake_payouts::catalog::load_events;
use earthquake_payouts::payout::{burning_cost, classify_events, compute_payouts, PayoutStructure};
use earthquake_payouts::{AnalysisConfig, Location, PayoutError};

const CATALOG: &str = "\
time,latitude,longitude,depth,mag,magType,place
2021-10-12T09:24:05.099Z,35.1691,26.2152,20,6.6,mww,Crete
2021-09-27T06:17:21.000Z,35.1442,25.2375,10,5.8,mww,Arkalochori
2020-05-02T12:51:06.000Z,35.0268,25.1561,10,6.0,mww,South of Crete
2020-05-02T13:10:00.000Z,35.2054,25.2791,10,4.9,mb,South of Crete
1999-09-07T11:56:50.000Z,35.0817,25.2018,10,5.0,mb,Crete
1985-03-01T00:00:00.000Z,35.0,25.0,15,4.6,mb,Asset
1950-01-01T00:00:00.000Z,35.0,25.0,15,,,Unknown magnitude
";

fn asset() -> Location {
    Location::new(35.0, 25.0)
}

#[test]
fn test_classification_per_event() {
    let events = load_events(CATALOG).unwrap();
    assert_eq!(events.len(), 6);

    let classified = classify_events(&events, &asset(), &PayoutStructure::default());
    let payouts: Vec<Option<f64>> = classified.iter().map(|e| e.payout).collect();
    assert_eq!(
        payouts,
        vec![Some(50.0), Some(75.0), Some(75.0), None, None, Some(100.0)]
    );
    assert_abs_diff_eq!(classified[0].distance_km, 112.282482, epsilon = 1e-5);
    assert_eq!(classified[5].distance_km, 0.0);
}

#[test]
fn test_yearly_payouts_and_burning_cost() {
    let events = load_events(CATALOG).unwrap();
    let yearly = compute_payouts(&events, &asset(), &PayoutStructure::default());

    let series: Vec<(i32, f64)> = yearly.iter().collect();
    assert_eq!(series, vec![(1985, 100.0), (2020, 75.0), (2021, 75.0)]);
    assert_eq!(yearly.get(1999), None);

    // 250 over 50 years
    assert_abs_diff_eq!(burning_cost(&yearly, 1972, 2021).unwrap(), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(burning_cost(&yearly, 2000, 2021).unwrap(), 150.0 / 22.0, epsilon = 1e-12);
    assert_eq!(burning_cost(&yearly, 1986, 2019).unwrap(), 0.0);
    assert_eq!(
        burning_cost(&yearly, 2021, 2000),
        Err(PayoutError::InvalidRange { start: 2021, end: 2000 })
    );
}

#[test]
fn test_event_order_does_not_matter() {
    let mut events = load_events(CATALOG).unwrap();
    let structure = PayoutStructure::default();
    let forward = compute_payouts(&events, &asset(), &structure);

    events.reverse();
    assert_eq!(compute_payouts(&events, &asset(), &structure), forward);
}

#[test]
fn test_configured_analysis() {
    let config = AnalysisConfig::from_json_str(
        r#"{"asset": {"latitude": 35.0, "longitude": 25.0}, "start_year": 2012}"#,
    )
    .unwrap();
    let events = load_events(CATALOG).unwrap();
    let yearly = compute_payouts(&events, &config.asset, &config.tiers);

    // 150 over 10 years
    let bc = burning_cost(&yearly, config.start_year, config.end_year).unwrap();
    assert_abs_diff_eq!(bc, 15.0, epsilon = 1e-12);
}
