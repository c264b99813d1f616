//! Kinetic-energy and crater-size estimators.
//!
//! Energy comes from a spherical-body mass estimate and the relative
//! approach velocity, expressed in megatons TNT. Crater dimensions follow a
//! generic power-law scaling with a shallower exponent above the
//! simple/complex crater transition. The coefficients are in the spirit of
//! the crater-scaling literature but are not calibrated against it.

use crate::asteroid::AsteroidData;
use crate::types::{
    CraterSize, EstimatorError, JOULES_PER_MEGATON, MAX_CRATER_DEPTH_M, MAX_CRATER_DIAMETER_M,
    MAX_ENERGY_MT, MIN_CRATER_DEPTH_M, MIN_CRATER_DIAMETER_M, MIN_ENERGY_MT,
    SIMPLE_COMPLEX_TRANSITION_M,
};

/// Density (kg/m³) for large bodies (> 1000 m): rubble-pile assumption.
const DENSITY_LARGE: f64 = 2_000.0;

/// Density (kg/m³) for small bodies (< 100 m): coherent rock.
const DENSITY_SMALL: f64 = 3_000.0;

/// Default density (kg/m³) for mid-sized bodies.
const DENSITY_DEFAULT: f64 = 2_600.0;

/// Simple-crater scaling: diameter ≈ 1.2 · E^0.33 km.
const SIMPLE_CRATER_COEFFICIENT: f64 = 1.2;
const SIMPLE_CRATER_EXPONENT: f64 = 0.33;

/// Complex-crater scaling above the transition: shallower growth.
///
/// The coefficient is chosen so the two laws meet near the transition
/// diameter (~4 km, around 38 MT under the simple law).
const COMPLEX_CRATER_COEFFICIENT: f64 = 1.37;
const COMPLEX_CRATER_EXPONENT: f64 = 0.294;

/// Simple craters are bowl-shaped: depth ≈ quarter of the diameter.
const SIMPLE_DEPTH_RATIO: f64 = 0.25;

/// Complex craters rebound: depth capped at a tenth of the diameter.
const COMPLEX_DEPTH_RATIO: f64 = 0.1;
const COMPLEX_DEPTH_CAP_M: f64 = 2_000.0;

/// Bulk density by size tier.
///
/// Bodies above a kilometer are assumed to be loosely-bound rubble piles;
/// small bodies survive atmospheric selection only if coherent, hence
/// denser.
pub fn density_for_diameter(average_diameter_m: f64) -> f64 {
    if average_diameter_m > 1_000.0 {
        DENSITY_LARGE
    } else if average_diameter_m < 100.0 {
        DENSITY_SMALL
    } else {
        DENSITY_DEFAULT
    }
}

/// Estimate the impact kinetic energy in megatons TNT, in [0.001, 10000].
pub fn impact_energy_megatons(asteroid: &AsteroidData) -> f64 {
    match try_impact_energy(asteroid.average_diameter(), asteroid.velocity_km_s()) {
        Ok(energy) => energy,
        Err(err) => {
            tracing::debug!(
                name = %asteroid.name,
                error = %err,
                "energy estimator degraded to fallback"
            );
            // Guarded accessors make the primary path nearly total; the
            // fallback recomputes from hard defaults.
            try_impact_energy(
                crate::asteroid::DEFAULT_DIAMETER_M,
                crate::asteroid::DEFAULT_VELOCITY_KM_S,
            )
            .unwrap_or(MIN_ENERGY_MT)
        }
    }
}

/// Sphere volume → mass → ½mv², then Joules → megatons.
fn try_impact_energy(
    average_diameter_m: f64,
    velocity_km_s: f64,
) -> Result<f64, EstimatorError> {
    let radius = average_diameter_m * 0.5;
    let volume = 4.0 / 3.0 * std::f64::consts::PI * radius.powi(3);
    let mass = volume * density_for_diameter(average_diameter_m);

    let velocity_m_s = velocity_km_s * 1_000.0;
    let energy_joules = 0.5 * mass * velocity_m_s * velocity_m_s;
    let energy_megatons = energy_joules / JOULES_PER_MEGATON;

    if !energy_megatons.is_finite() {
        return Err(EstimatorError::NonFinite {
            stage: "kinetic energy",
        });
    }

    Ok(energy_megatons.clamp(MIN_ENERGY_MT, MAX_ENERGY_MT))
}

/// Estimate crater dimensions (meters) from energy in megatons.
pub fn crater_size(asteroid: &AsteroidData, energy_megatons: f64) -> CraterSize {
    match try_crater_size(energy_megatons) {
        Ok(crater) => crater,
        Err(err) => {
            tracing::debug!(
                name = %asteroid.name,
                error = %err,
                "crater estimator degraded to fallback"
            );
            fallback_crater_size(energy_megatons)
        }
    }
}

/// Power-law scaling with a simple/complex transition.
fn try_crater_size(energy_megatons: f64) -> Result<CraterSize, EstimatorError> {
    if !energy_megatons.is_finite() || energy_megatons <= 0.0 {
        return Err(EstimatorError::NonFinite {
            stage: "crater energy input",
        });
    }

    let simple_diameter =
        SIMPLE_CRATER_COEFFICIENT * energy_megatons.powf(SIMPLE_CRATER_EXPONENT) * 1_000.0;

    let (diameter, depth) = if simple_diameter <= SIMPLE_COMPLEX_TRANSITION_M {
        (simple_diameter, simple_diameter * SIMPLE_DEPTH_RATIO)
    } else {
        let complex_diameter =
            COMPLEX_CRATER_COEFFICIENT * energy_megatons.powf(COMPLEX_CRATER_EXPONENT) * 1_000.0;
        let depth = (complex_diameter * COMPLEX_DEPTH_RATIO).min(COMPLEX_DEPTH_CAP_M);
        (complex_diameter, depth)
    };

    if !diameter.is_finite() || !depth.is_finite() {
        return Err(EstimatorError::NonFinite {
            stage: "crater scaling",
        });
    }

    Ok(clamp_crater(diameter, depth))
}

/// Single simpler power law with the same final clamps, used when the
/// primary scaling fails.
pub fn fallback_crater_size(energy_megatons: f64) -> CraterSize {
    let energy = if energy_megatons.is_finite() && energy_megatons > 0.0 {
        energy_megatons
    } else {
        MIN_ENERGY_MT
    };
    let diameter = energy.powf(SIMPLE_CRATER_EXPONENT) * 1_000.0;
    clamp_crater(diameter, diameter * SIMPLE_DEPTH_RATIO)
}

/// Clamp into display bounds while preserving `depth < diameter`.
fn clamp_crater(diameter: f64, depth: f64) -> CraterSize {
    let diameter = diameter.clamp(MIN_CRATER_DIAMETER_M, MAX_CRATER_DIAMETER_M);
    let depth = depth
        .clamp(MIN_CRATER_DEPTH_M, MAX_CRATER_DEPTH_M)
        .min(diameter * 0.5);
    CraterSize { diameter, depth }
}
