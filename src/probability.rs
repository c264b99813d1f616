//! Impact-probability estimator.
//!
//! Combines a piecewise-exponential decay over miss distance with bounded
//! multiplicative factors for velocity, size, hazard classification, and
//! orbit class. The distance buckets are anchored so each bucket starts at
//! the value the previous one decayed to, keeping the curve continuous and
//! monotone in distance.
//!
//! None of this is real orbital mechanics; the buckets and factors are
//! display heuristics tuned so that genuinely close, fast, large objects
//! rank above distant small ones.

use crate::asteroid::AsteroidData;
use crate::seed::{salts, seed};
use crate::types::{EstimatorError, KM_PER_AU, MAX_PROBABILITY, MIN_PROBABILITY};

/// Distance buckets as `(upper edge km, decay scale km)` pairs.
///
/// Within each bucket the probability decays as `exp(-(d - lower) / scale)`
/// from the value carried in at the bucket's lower edge. Objects beyond the
/// last edge get a zero baseline before the hazard floor and final clamp.
const DISTANCE_BUCKETS: [(f64, f64); 6] = [
    (1.0e3, 1.0e3),
    (5.0e3, 4.0e3),
    (2.0e4, 1.5e4),
    (5.0e4, 3.0e4),
    (1.0e5, 5.0e4),
    (5.0e5, 4.0e5),
];

/// Baseline probability at zero miss distance, before adjustment factors.
const BASE_PROBABILITY_AT_CONTACT: f64 = 0.5;

/// Velocity (km/s) treated as the neutral factor of 1.0.
const REFERENCE_VELOCITY_KM_S: f64 = 20.0;

/// Average diameter (meters) treated as the neutral factor of 1.0.
const REFERENCE_DIAMETER_M: f64 = 500.0;

/// Estimate the impact probability for one object, in [0.001, 0.5].
///
/// Never fails: any non-finite intermediate switches to the name-seeded
/// fallback path, which produces a structurally identical (if coarser)
/// probability from distance/size buckets.
pub fn impact_probability(asteroid: &AsteroidData) -> f64 {
    match try_impact_probability(asteroid) {
        Ok(p) => p,
        Err(err) => {
            tracing::debug!(
                name = %asteroid.name,
                error = %err,
                "probability estimator degraded to seeded fallback"
            );
            fallback_probability(asteroid)
        }
    }
}

/// Primary estimation path. Errors on non-finite input or output.
fn try_impact_probability(asteroid: &AsteroidData) -> Result<f64, EstimatorError> {
    let distance_km = asteroid.miss_distance * KM_PER_AU;
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(EstimatorError::NonFinite {
            stage: "miss distance",
        });
    }

    let base = distance_base_probability(distance_km);

    let adjusted = base
        * velocity_factor(asteroid.velocity)
        * size_factor(asteroid.average_diameter())
        * hazard_factor(asteroid.is_hazardous)
        * orbit_class_factor(asteroid);

    if !adjusted.is_finite() {
        return Err(EstimatorError::NonFinite {
            stage: "probability adjustment",
        });
    }

    // Hazardous objects always display a non-negligible probability. Applied
    // as a lower bound that steps down with distance, so the overall curve
    // stays monotone in miss distance.
    let floored = if asteroid.is_hazardous {
        adjusted.max(hazardous_floor(distance_km))
    } else {
        adjusted
    };

    Ok(floored.clamp(MIN_PROBABILITY, MAX_PROBABILITY))
}

/// Piecewise-exponential baseline over miss distance in km.
///
/// Each bucket inherits the value the previous bucket decayed to at its
/// upper edge, so the baseline is continuous and strictly decreasing out to
/// the last edge, and zero beyond it.
fn distance_base_probability(distance_km: f64) -> f64 {
    let mut base = BASE_PROBABILITY_AT_CONTACT;
    let mut lower = 0.0;
    for (upper, scale) in DISTANCE_BUCKETS {
        if distance_km < upper {
            return base * (-(distance_km - lower) / scale).exp();
        }
        base *= (-(upper - lower) / scale).exp();
        lower = upper;
    }
    0.0
}

/// Higher relative velocity leaves less time for natural gravitational
/// deflection, so it scales the probability up. Clamped to [0.1, 2.0];
/// malformed velocities collapse to the minimal factor.
fn velocity_factor(velocity_km_s: f64) -> f64 {
    if !velocity_km_s.is_finite() || velocity_km_s <= 0.0 {
        return 0.1;
    }
    (velocity_km_s / REFERENCE_VELOCITY_KM_S).clamp(0.1, 2.0)
}

/// Larger bodies carry more orbit-determination attention and a larger
/// cross-section. Clamped to [0.5, 3.0].
fn size_factor(average_diameter_m: f64) -> f64 {
    if !average_diameter_m.is_finite() || average_diameter_m <= 0.0 {
        return 0.5;
    }
    (average_diameter_m / REFERENCE_DIAMETER_M).clamp(0.5, 3.0)
}

/// The upstream hazard classification already folds in size and approach
/// history, so it moves the estimate in both directions.
fn hazard_factor(is_hazardous: bool) -> f64 {
    if is_hazardous { 1.5 } else { 0.8 }
}

/// Earth-crossing orbit classes (Apollo/Aten) carry extra uncertainty
/// weight; Amor-class objects approach from outside and get a smaller bump.
fn orbit_class_factor(asteroid: &AsteroidData) -> f64 {
    if asteroid.is_earth_crossing() {
        1.3
    } else if asteroid
        .orbit_class
        .as_deref()
        .map(|c| c.to_ascii_lowercase().contains("amor"))
        .unwrap_or(false)
    {
        1.1
    } else {
        1.0
    }
}

/// Display floor for hazardous objects, stepping down with distance.
fn hazardous_floor(distance_km: f64) -> f64 {
    if distance_km < 1.0e5 {
        0.01
    } else if distance_km < 5.0e5 {
        0.005
    } else {
        0.002
    }
}

/// Seeded fallback path: coarse distance/size buckets with a name-seeded
/// adjustment and a hazard bonus, clamped to [0.001, 0.3].
///
/// Self-contained: uses only the guarded accessors, so it is total even for
/// fully malformed records.
pub fn fallback_probability(asteroid: &AsteroidData) -> f64 {
    let miss_au = asteroid.miss_distance_au();
    let average_diameter = asteroid.average_diameter();

    let base = if miss_au < 0.05 {
        0.05
    } else if miss_au < 0.2 {
        0.01
    } else {
        0.002
    };

    let size_boost = if average_diameter > 500.0 { 1.5 } else { 1.0 };
    let seeded_adjust = 0.75 + seed(&asteroid.name, salts::FALLBACK) * 0.5;
    let hazard_bonus = if asteroid.is_hazardous { 0.02 } else { 0.0 };

    (base * size_boost * seeded_adjust + hazard_bonus).clamp(MIN_PROBABILITY, 0.3)
}
