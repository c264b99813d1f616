//! Affected-radius estimator.
//!
//! Derives a ground-effect radius from impact energy: cube-root blast
//! scaling, a thermal-pulse multiple of the blast radius, and a seismic
//! term. The largest of the three is reported, clamped to [1, 1000] km.

use crate::types::{EstimatorError, MAX_AFFECTED_RADIUS_KM, MIN_AFFECTED_RADIUS_KM, MIN_ENERGY_MT};

/// Blast radius ≈ 2.8 · E^0.33 km.
const BLAST_SCALE_KM: f64 = 2.8;
const BLAST_EXPONENT: f64 = 0.33;

/// Thermal-pulse radius as a multiple of the blast radius.
const THERMAL_MULTIPLIER: f64 = 2.3;

/// Seismic-damage radius as a multiple of the blast radius.
const SEISMIC_MULTIPLIER: f64 = 1.5;

/// Fallback: single power law with a tighter cap.
const FALLBACK_SCALE_KM: f64 = 5.0;
const FALLBACK_MAX_RADIUS_KM: f64 = 500.0;

/// Estimate the affected radius in km for an impact of the given energy.
pub fn affected_radius_km(name: &str, energy_megatons: f64) -> f64 {
    match try_affected_radius(energy_megatons) {
        Ok(radius) => radius,
        Err(err) => {
            tracing::debug!(
                name = %name,
                error = %err,
                "radius estimator degraded to fallback"
            );
            fallback_radius_km(energy_megatons)
        }
    }
}

fn try_affected_radius(energy_megatons: f64) -> Result<f64, EstimatorError> {
    if !energy_megatons.is_finite() || energy_megatons <= 0.0 {
        return Err(EstimatorError::NonFinite {
            stage: "radius energy input",
        });
    }

    let blast = BLAST_SCALE_KM * energy_megatons.powf(BLAST_EXPONENT);
    let thermal = blast * THERMAL_MULTIPLIER;
    let seismic = blast * SEISMIC_MULTIPLIER;

    let radius = blast.max(thermal).max(seismic);
    if !radius.is_finite() {
        return Err(EstimatorError::NonFinite {
            stage: "radius scaling",
        });
    }

    Ok(radius.clamp(MIN_AFFECTED_RADIUS_KM, MAX_AFFECTED_RADIUS_KM))
}

/// Simpler single-term law with a looser bound, used when the primary
/// computation fails.
pub fn fallback_radius_km(energy_megatons: f64) -> f64 {
    let energy = if energy_megatons.is_finite() && energy_megatons > 0.0 {
        energy_megatons
    } else {
        MIN_ENERGY_MT
    };
    (FALLBACK_SCALE_KM * energy.powf(BLAST_EXPONENT))
        .clamp(MIN_AFFECTED_RADIUS_KM, FALLBACK_MAX_RADIUS_KM)
}
