//! Property-based tests for the impact estimators using proptest.
//!
//! These verify the structural invariants across a wide range of input
//! records: determinism, output ranges, monotonicity, scenario ordering,
//! and graceful degradation on malformed input.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use crate::asteroid::{AsteroidData, DiameterRange};
use crate::test_utils::assertions;
use crate::types::ImpactScenario;
use crate::{energy, prediction, probability, risk, scenario};

/// Strategy for plausible object names, including the empty string.
fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ()-]{0,16}").expect("valid regex")
}

/// Strategy for approach dates within a few years of 2024.
fn approach_date_strategy() -> impl Strategy<Value = String> {
    (0i64..2000).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        (base + Duration::days(offset)).format("%Y-%m-%d").to_string()
    })
}

/// Strategy for well-formed asteroid records.
fn asteroid_strategy() -> impl Strategy<Value = AsteroidData> {
    (
        name_strategy(),
        1.0f64..2_000.0,
        0.0f64..800.0,
        1.0f64..70.0,
        0.0f64..1.0,
        any::<bool>(),
        approach_date_strategy(),
        proptest::option::of(0.0f64..40.0),
        proptest::option::of(prop_oneof![
            Just("Apollo".to_owned()),
            Just("Aten".to_owned()),
            Just("Amor".to_owned()),
            Just("Atira".to_owned()),
        ]),
    )
        .prop_map(
            |(name, dia_min, spread, velocity, miss, hazardous, date, inclination, class)| {
                AsteroidData {
                    name,
                    diameter: DiameterRange::new(dia_min, dia_min + spread),
                    velocity,
                    miss_distance: miss,
                    is_hazardous: hazardous,
                    approach_date: date,
                    inclination,
                    orbit_class: class,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any fixed record, two predictions are bit-identical.
    #[test]
    fn prop_predict_is_deterministic(asteroid in asteroid_strategy()) {
        prop_assert_eq!(prediction::predict(&asteroid), prediction::predict(&asteroid));
    }

    /// Every prediction satisfies every structural range invariant.
    #[test]
    fn prop_range_invariants(asteroid in asteroid_strategy()) {
        assertions::assert_valid_prediction(&prediction::predict(&asteroid));
    }

    /// Holding everything else fixed, a closer approach never lowers the
    /// probability.
    #[test]
    fn prop_probability_monotone_in_distance(
        asteroid in asteroid_strategy(),
        d1 in 0.0f64..1.0,
        d2 in 0.0f64..1.0,
    ) {
        let (closer, farther) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let mut near = asteroid.clone();
        near.miss_distance = closer;
        let mut far = asteroid;
        far.miss_distance = farther;

        prop_assert!(
            probability::impact_probability(&near) >= probability::impact_probability(&far),
            "closer approach produced lower probability"
        );
    }

    /// Within a density tier, a larger body never carries less energy.
    /// (The tier edges at 100 m and 1000 m legitimately step density down,
    /// so monotonicity is only promised tier-locally.)
    #[test]
    fn prop_energy_monotone_in_diameter_within_tier(
        asteroid in asteroid_strategy(),
        a1 in 110.0f64..990.0,
        a2 in 110.0f64..990.0,
    ) {
        let (small, large) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
        let mut smaller = asteroid.clone();
        smaller.diameter = DiameterRange::new(small, small);
        let mut larger = asteroid;
        larger.diameter = DiameterRange::new(large, large);

        prop_assert!(
            energy::impact_energy_megatons(&larger) >= energy::impact_energy_megatons(&smaller)
        );
    }

    /// Scenario triples are ordered best <= nominal <= worst on every
    /// threat axis.
    #[test]
    fn prop_scenario_ordering(asteroid in asteroid_strategy()) {
        let [nominal, worst, best] = scenario::scenarios(&asteroid);

        prop_assert_eq!(nominal.scenario, ImpactScenario::Nominal);
        prop_assert_eq!(worst.scenario, ImpactScenario::WorstCase);
        prop_assert_eq!(best.scenario, ImpactScenario::BestCase);

        prop_assert!(best.impact_probability <= nominal.impact_probability);
        prop_assert!(nominal.impact_probability <= worst.impact_probability);
        prop_assert!(best.impact_energy <= nominal.impact_energy);
        prop_assert!(nominal.impact_energy <= worst.impact_energy);
        prop_assert!(best.affected_radius <= nominal.affected_radius);
        prop_assert!(nominal.affected_radius <= worst.affected_radius);
    }

    /// Re-running the classifier on a scenario's own numbers reproduces
    /// that scenario's label.
    #[test]
    fn prop_risk_label_consistency(asteroid in asteroid_strategy()) {
        for p in scenario::scenarios(&asteroid) {
            let recomputed = risk::risk_level(&asteroid, p.impact_probability, p.impact_energy);
            prop_assert_eq!(p.risk_level, recomputed);
        }
    }

    /// Poisoning any numeric field with NaN still yields a structurally
    /// valid prediction.
    #[test]
    fn prop_graceful_degradation(
        asteroid in asteroid_strategy(),
        poison_diameter in any::<bool>(),
        poison_velocity in any::<bool>(),
        poison_distance in any::<bool>(),
        poison_date in any::<bool>(),
    ) {
        let mut poisoned = asteroid;
        if poison_diameter {
            poisoned.diameter = DiameterRange::new(f64::NAN, f64::NAN);
        }
        if poison_velocity {
            poisoned.velocity = f64::NAN;
        }
        if poison_distance {
            poisoned.miss_distance = f64::NAN;
        }
        if poison_date {
            poisoned.approach_date = "????".into();
        }

        for p in scenario::scenarios(&poisoned) {
            assertions::assert_valid_prediction(&p);
        }
    }
}
