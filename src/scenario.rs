//! Nominal / worst-case / best-case scenario generation.
//!
//! Scenarios are bounded multiplicative perturbations of the nominal
//! prediction, never independent recomputations: the worst case scales the
//! threat axes up, the best case scales them down, and both re-run the risk
//! classifier on their own adjusted probability/energy pair so the label
//! always matches the numbers shown next to it.

use crate::asteroid::AsteroidData;
use crate::prediction::predict;
use crate::risk;
use crate::types::{
    CraterSize, ImpactPrediction, ImpactScenario, MAX_AFFECTED_RADIUS_KM, MAX_CRATER_DEPTH_M,
    MAX_CRATER_DIAMETER_M, MAX_ENERGY_MT, MAX_PROBABILITY, MIN_AFFECTED_RADIUS_KM,
    MIN_CRATER_DEPTH_M, MIN_CRATER_DIAMETER_M, MIN_ENERGY_MT, MIN_PROBABILITY,
};

/// Multiplicative adjustments for one scenario variant.
struct ScenarioAdjustment {
    probability: f64,
    energy: f64,
    radius: f64,
    crater_diameter: f64,
    crater_depth: f64,
    confidence: f64,
    confidence_floor: f64,
    confidence_cap: f64,
}

/// Pessimistic variant: more probable, more energetic, wider footprint,
/// less confident.
const WORST_CASE: ScenarioAdjustment = ScenarioAdjustment {
    probability: 1.8,
    energy: 1.4,
    radius: 1.5,
    crater_diameter: 1.3,
    crater_depth: 1.2,
    confidence: 0.85,
    confidence_floor: 20.0,
    confidence_cap: 100.0,
};

/// Optimistic variant: the mirror image, slightly more confident.
const BEST_CASE: ScenarioAdjustment = ScenarioAdjustment {
    probability: 0.6,
    energy: 0.7,
    radius: 0.8,
    crater_diameter: 0.9,
    crater_depth: 0.8,
    confidence: 1.1,
    confidence_floor: 0.0,
    confidence_cap: 95.0,
};

/// Compute the three scenario predictions: nominal, worst case, best case,
/// in that order.
pub fn scenarios(asteroid: &AsteroidData) -> [ImpactPrediction; 3] {
    let nominal = predict(asteroid);
    let worst = adjusted(asteroid, &nominal, &WORST_CASE, ImpactScenario::WorstCase);
    let best = adjusted(asteroid, &nominal, &BEST_CASE, ImpactScenario::BestCase);
    [nominal, worst, best]
}

/// Apply a bounded adjustment to the nominal prediction.
fn adjusted(
    asteroid: &AsteroidData,
    nominal: &ImpactPrediction,
    adjustment: &ScenarioAdjustment,
    scenario: ImpactScenario,
) -> ImpactPrediction {
    let impact_probability = (nominal.impact_probability * adjustment.probability)
        .clamp(MIN_PROBABILITY, MAX_PROBABILITY);
    let impact_energy =
        (nominal.impact_energy * adjustment.energy).clamp(MIN_ENERGY_MT, MAX_ENERGY_MT);
    let affected_radius = (nominal.affected_radius * adjustment.radius)
        .clamp(MIN_AFFECTED_RADIUS_KM, MAX_AFFECTED_RADIUS_KM);

    let diameter = (nominal.crater_size.diameter * adjustment.crater_diameter)
        .clamp(MIN_CRATER_DIAMETER_M, MAX_CRATER_DIAMETER_M);
    let depth = (nominal.crater_size.depth * adjustment.crater_depth)
        .clamp(MIN_CRATER_DEPTH_M, MAX_CRATER_DEPTH_M)
        .min(diameter * 0.5);

    let confidence = (nominal.confidence * adjustment.confidence)
        .clamp(adjustment.confidence_floor, adjustment.confidence_cap);

    // Mandatory: the label must describe this scenario's numbers, not the
    // nominal ones it was derived from.
    let risk_level = risk::risk_level(asteroid, impact_probability, impact_energy);

    ImpactPrediction {
        impact_probability,
        impact_location: nominal.impact_location.clone(),
        impact_time: nominal.impact_time.clone(),
        impact_energy,
        crater_size: CraterSize { diameter, depth },
        affected_radius,
        confidence,
        risk_level,
        scenario,
    }
}
