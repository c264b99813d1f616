//! Test utilities for the impact-prediction estimators.
//!
//! Provides canonical input fixtures and assertions for the structural
//! invariants every prediction must satisfy.

use crate::asteroid::{AsteroidData, DiameterRange};

/// Fixtures for creating test asteroid records.
pub mod fixtures {
    use super::*;

    /// Large, fast, hazardous object on a very close approach (~30,000 km).
    ///
    /// Expected to score HIGH or CRITICAL with a probability above 1%.
    pub fn hazardous_close_approach() -> AsteroidData {
        AsteroidData {
            name: "TestRock".into(),
            diameter: DiameterRange::new(500.0, 700.0),
            velocity: 20.0,
            miss_distance: 0.0002,
            is_hazardous: true,
            approach_date: "2025-06-01".into(),
            inclination: None,
            orbit_class: None,
        }
    }

    /// Small, slow object passing at 2.5 AU. Expected LOW at the
    /// probability floor.
    pub fn distant_small_rock() -> AsteroidData {
        AsteroidData {
            name: "SafeRock".into(),
            diameter: DiameterRange::new(5.0, 10.0),
            velocity: 12.0,
            miss_distance: 2.5,
            is_hazardous: false,
            approach_date: "2025-06-01".into(),
            inclination: None,
            orbit_class: None,
        }
    }

    /// Same orbit as the hazardous fixture under a different name, for
    /// checking that seeds follow the name.
    pub fn named(name: &str) -> AsteroidData {
        AsteroidData {
            name: name.into(),
            ..hazardous_close_approach()
        }
    }

    /// Degenerate record: empty name, NaN numerics, garbage date. The
    /// estimators must still produce a structurally valid prediction.
    pub fn malformed() -> AsteroidData {
        AsteroidData {
            name: String::new(),
            diameter: DiameterRange::new(f64::NAN, f64::NAN),
            velocity: f64::NAN,
            miss_distance: f64::NAN,
            is_hazardous: false,
            approach_date: "not-a-date".into(),
            inclination: Some(f64::INFINITY),
            orbit_class: None,
        }
    }
}

/// Assertions for prediction invariants.
pub mod assertions {
    use crate::types::{
        ImpactPrediction, MAX_AFFECTED_RADIUS_KM, MAX_CRATER_DIAMETER_M, MAX_ENERGY_MT,
        MAX_PROBABILITY, MIN_AFFECTED_RADIUS_KM, MIN_CRATER_DIAMETER_M, MIN_ENERGY_MT,
        MIN_PROBABILITY,
    };

    /// Assert every structural range invariant on a prediction.
    ///
    /// # Panics
    /// Panics with the offending field if any bound is violated.
    pub fn assert_valid_prediction(prediction: &ImpactPrediction) {
        let p = prediction;
        assert!(
            (MIN_PROBABILITY..=MAX_PROBABILITY).contains(&p.impact_probability),
            "probability out of range: {}",
            p.impact_probability
        );
        assert!(
            (MIN_ENERGY_MT..=MAX_ENERGY_MT).contains(&p.impact_energy),
            "energy out of range: {}",
            p.impact_energy
        );
        assert!(
            (MIN_CRATER_DIAMETER_M..=MAX_CRATER_DIAMETER_M).contains(&p.crater_size.diameter),
            "crater diameter out of range: {}",
            p.crater_size.diameter
        );
        assert!(
            p.crater_size.depth < p.crater_size.diameter,
            "crater depth {} not below diameter {}",
            p.crater_size.depth,
            p.crater_size.diameter
        );
        assert!(
            (MIN_AFFECTED_RADIUS_KM..=MAX_AFFECTED_RADIUS_KM).contains(&p.affected_radius),
            "affected radius out of range: {}",
            p.affected_radius
        );
        assert!(
            (0.0..=100.0).contains(&p.confidence),
            "confidence out of range: {}",
            p.confidence
        );
        assert!(
            (-90.0..=90.0).contains(&p.impact_location.latitude),
            "latitude out of range: {}",
            p.impact_location.latitude
        );
        assert!(
            (-180.0..=180.0).contains(&p.impact_location.longitude),
            "longitude out of range: {}",
            p.impact_location.longitude
        );
        assert!(!p.impact_time.is_empty(), "impact time missing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::predict;

    #[test]
    fn test_fixtures_produce_valid_predictions() {
        for fixture in [
            fixtures::hazardous_close_approach(),
            fixtures::distant_small_rock(),
            fixtures::named("Bennu"),
            fixtures::malformed(),
        ] {
            assertions::assert_valid_prediction(&predict(&fixture));
        }
    }

    #[test]
    fn test_named_fixture_differs_only_by_name() {
        let a = fixtures::named("Bennu");
        let b = fixtures::hazardous_close_approach();
        assert_ne!(a.name, b.name);
        assert_eq!(a.diameter, b.diameter);
        assert_eq!(a.miss_distance, b.miss_distance);
    }
}
