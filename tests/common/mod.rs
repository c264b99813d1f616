//! Common test utilities for integration tests.

use chrono::NaiveDateTime;
use neowatch_impact::{AsteroidData, DiameterRange};

/// Parse an asteroid record from its camelCase wire form.
pub fn asteroid_from_json(json: &str) -> AsteroidData {
    serde_json::from_str(json).expect("wire-shape asteroid record")
}

/// Wire-shape record for a large, hazardous, very close approach.
pub fn hazardous_wire_record() -> &'static str {
    r#"{
        "name": "TestRock",
        "diameter": {"min": 500.0, "max": 700.0},
        "velocity": 20.0,
        "missDistance": 0.0002,
        "isHazardous": true,
        "approachDate": "2025-06-01",
        "orbitClass": "Apollo"
    }"#
}

/// Wire-shape record for a small rock passing at 2.5 AU.
pub fn distant_wire_record() -> &'static str {
    r#"{
        "name": "SafeRock",
        "diameter": {"min": 5.0, "max": 10.0},
        "velocity": 12.0,
        "missDistance": 2.5,
        "isHazardous": false,
        "approachDate": "2025-06-01"
    }"#
}

/// A programmatic record with every field populated.
pub fn full_record(name: &str) -> AsteroidData {
    AsteroidData {
        name: name.into(),
        diameter: DiameterRange::new(120.0, 260.0),
        velocity: 18.4,
        miss_distance: 0.05,
        is_hazardous: false,
        approach_date: "2027-03-14".into(),
        inclination: Some(6.2),
        orbit_class: Some("Amor".into()),
    }
}

/// Parse an `impactTime` string and return the signed offset in hours from
/// midnight of the given approach date.
pub fn hours_from_approach(impact_time: &str, approach_date: &str) -> f64 {
    let impact = NaiveDateTime::parse_from_str(impact_time, "%Y-%m-%dT%H:%M:%S")
        .expect("ISO impact timestamp");
    let approach = NaiveDateTime::parse_from_str(
        &format!("{approach_date}T00:00:00"),
        "%Y-%m-%dT%H:%M:%S",
    )
    .expect("ISO approach date");
    (impact - approach).num_seconds() as f64 / 3600.0
}
