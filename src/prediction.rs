//! Top-level impact prediction.
//!
//! `predict` runs every estimator off the same input record and assembles
//! the result. Each estimator already degrades internally, and the
//! assembled prediction is validated once more at the end: if anything
//! slipped through non-finite or out of range, the whole record is rebuilt
//! on the self-contained seeded fallback path. Callers therefore always
//! receive a structurally valid prediction and never an error.

use crate::asteroid::AsteroidData;
use crate::seed::{jitter, salts};
use crate::types::{
    ImpactPrediction, ImpactScenario, MAX_AFFECTED_RADIUS_KM, MAX_CRATER_DEPTH_M,
    MAX_CRATER_DIAMETER_M, MAX_ENERGY_MT, MAX_PROBABILITY, MIN_AFFECTED_RADIUS_KM,
    MIN_CRATER_DEPTH_M, MIN_CRATER_DIAMETER_M, MIN_ENERGY_MT, MIN_PROBABILITY,
};
use crate::{energy, location, probability, radius, risk};

/// Compute the nominal impact prediction for one object.
pub fn predict(asteroid: &AsteroidData) -> ImpactPrediction {
    let impact_probability = probability::impact_probability(asteroid);
    let impact_energy = energy::impact_energy_megatons(asteroid);
    let crater_size = energy::crater_size(asteroid, impact_energy);
    let affected_radius = radius::affected_radius_km(&asteroid.name, impact_energy);
    let impact_location = location::impact_location(asteroid);
    let impact_time = location::impact_time(asteroid);
    let confidence = risk::confidence(asteroid, impact_probability);
    let risk_level = risk::risk_level(asteroid, impact_probability, impact_energy);

    let prediction = ImpactPrediction {
        impact_probability,
        impact_location,
        impact_time,
        impact_energy,
        crater_size,
        affected_radius,
        confidence,
        risk_level,
        scenario: ImpactScenario::Nominal,
    };

    if is_structurally_valid(&prediction) {
        prediction
    } else {
        tracing::warn!(
            name = %asteroid.name,
            "assembled prediction failed validation, rebuilding on fallback path"
        );
        fallback_prediction(asteroid)
    }
}

/// Fully self-contained fallback prediction.
///
/// Uses only the guarded accessors and the name seeds, with simpler
/// formulas and the same clamps, so it is total for any input record.
pub fn fallback_prediction(asteroid: &AsteroidData) -> ImpactPrediction {
    let impact_probability = probability::fallback_probability(asteroid);

    // Coarse cube/square scaling standing in for the full mass derivation.
    let average_diameter = asteroid.average_diameter();
    let velocity = asteroid.velocity_km_s();
    let impact_energy = ((average_diameter / 100.0).powi(3) * (velocity / 20.0).powi(2) * 50.0)
        .clamp(MIN_ENERGY_MT, MAX_ENERGY_MT);

    let crater_size = energy::fallback_crater_size(impact_energy);
    let affected_radius = radius::fallback_radius_km(impact_energy);

    // Location/time estimators are already total.
    let impact_location = location::impact_location(asteroid);
    let impact_time = location::impact_time(asteroid);

    // Fallback predictions advertise reduced confidence.
    let confidence = jitter(&asteroid.name, salts::FALLBACK, 25.0, 45.0);
    let risk_level = risk::risk_level(asteroid, impact_probability, impact_energy);

    ImpactPrediction {
        impact_probability,
        impact_location,
        impact_time,
        impact_energy,
        crater_size,
        affected_radius,
        confidence,
        risk_level,
        scenario: ImpactScenario::Nominal,
    }
}

/// Final structural check on an assembled prediction.
pub(crate) fn is_structurally_valid(prediction: &ImpactPrediction) -> bool {
    let p = prediction;
    p.impact_probability.is_finite()
        && (MIN_PROBABILITY..=MAX_PROBABILITY).contains(&p.impact_probability)
        && p.impact_energy.is_finite()
        && (MIN_ENERGY_MT..=MAX_ENERGY_MT).contains(&p.impact_energy)
        && p.crater_size.diameter.is_finite()
        && (MIN_CRATER_DIAMETER_M..=MAX_CRATER_DIAMETER_M).contains(&p.crater_size.diameter)
        && p.crater_size.depth.is_finite()
        && (MIN_CRATER_DEPTH_M..=MAX_CRATER_DEPTH_M).contains(&p.crater_size.depth)
        && p.crater_size.depth < p.crater_size.diameter
        && p.affected_radius.is_finite()
        && (MIN_AFFECTED_RADIUS_KM..=MAX_AFFECTED_RADIUS_KM).contains(&p.affected_radius)
        && p.confidence.is_finite()
        && (0.0..=100.0).contains(&p.confidence)
        && (-90.0..=90.0).contains(&p.impact_location.latitude)
        && (-180.0..=180.0).contains(&p.impact_location.longitude)
        && !p.impact_time.is_empty()
}
