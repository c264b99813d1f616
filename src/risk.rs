//! Risk classification and confidence scoring.
//!
//! The classifier folds probability, energy tier, hazard flag, and size into
//! a single score, then compares it against three thresholds. Every
//! contribution and every threshold carries name-seeded jitter inside a
//! fixed band: repeated displays of the same object are exactly
//! reproducible, while different objects in the same tier still read
//! slightly differently. That per-object jitter is a deliberate product
//! decision, not noise to be removed.

use crate::asteroid::AsteroidData;
use crate::seed::{jitter, salts};
use crate::types::{MIN_PROBABILITY, RiskLevel};

/// Estimate the risk level for the given probability and energy.
///
/// Callers re-run this on scenario-adjusted numbers so each scenario's
/// label stays consistent with its own probability/energy pair.
pub fn risk_level(asteroid: &AsteroidData, probability: f64, energy_megatons: f64) -> RiskLevel {
    let name = asteroid.name.as_str();

    let probability = if probability.is_finite() {
        probability
    } else {
        MIN_PROBABILITY
    };
    let energy = if energy_megatons.is_finite() {
        energy_megatons
    } else {
        0.0
    };

    // Rescale probability into the same 0-100-ish band as the other terms.
    let mut score = probability * 1_000.0;

    score += energy_band_contribution(name, energy);

    if asteroid.is_hazardous {
        score += jitter(name, salts::HAZARD_BONUS, 10.0, 20.0);
    }

    let average_diameter = asteroid.average_diameter();
    if average_diameter > 1_000.0 {
        score += jitter(name, salts::SIZE_BONUS, 15.0, 25.0);
    } else if average_diameter >= 500.0 {
        score += jitter(name, salts::SIZE_BONUS, 8.0, 15.0);
    }

    score *= jitter(name, salts::SCORE_SCALE, 0.8, 1.2);

    let low = jitter(name, salts::THRESHOLD_LOW, 25.0, 35.0);
    let medium = jitter(name, salts::THRESHOLD_MEDIUM, 60.0, 75.0);
    let high = jitter(name, salts::THRESHOLD_HIGH, 110.0, 130.0);

    if score >= high {
        RiskLevel::Critical
    } else if score >= medium {
        RiskLevel::High
    } else if score >= low {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Seeded contribution from the energy tier.
///
/// Band edges are fixed; the value within each band is name-seeded. The
/// bands are wide enough that the jitter never reorders two objects from
/// different tiers.
fn energy_band_contribution(name: &str, energy_megatons: f64) -> f64 {
    if energy_megatons > 1_000.0 {
        jitter(name, salts::ENERGY_BAND, 80.0, 100.0)
    } else if energy_megatons > 100.0 {
        jitter(name, salts::ENERGY_BAND, 50.0, 80.0)
    } else if energy_megatons > 10.0 {
        jitter(name, salts::ENERGY_BAND, 20.0, 50.0)
    } else {
        jitter(name, salts::ENERGY_BAND, 0.0, 20.0)
    }
}

/// Confidence score in [0, 100] for a prediction.
///
/// Better-characterized objects (known orbit class, known inclination,
/// tracked as hazardous, tight diameter bounds) score higher; a higher
/// probability also means a closer, better-observed approach.
pub fn confidence(asteroid: &AsteroidData, probability: f64) -> f64 {
    let mut score = 55.0;

    if asteroid.orbit_class.is_some() {
        score += 15.0;
    }
    if asteroid.inclination.is_some() {
        score += 5.0;
    }
    if asteroid.is_hazardous {
        score += 10.0;
    }

    // Wide diameter bounds mean a poorly-characterized body.
    let average = asteroid.average_diameter();
    let spread = (asteroid.diameter.max - asteroid.diameter.min).abs();
    if spread.is_finite() && average > 0.0 {
        score -= (spread / average * 20.0).min(15.0);
    }

    if probability.is_finite() {
        score += probability.clamp(0.0, 0.5) * 20.0;
    }

    score.clamp(10.0, 95.0)
}
