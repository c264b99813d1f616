//! Input record describing one near-Earth object.
//!
//! `AsteroidData` is a plain summary adapted upstream from the NASA NeoWs
//! close-approach feed. The estimators treat it as immutable per call and
//! never require the optional orbital metadata: missing or malformed fields
//! degrade to defaults instead of failing.

use serde::Deserialize;

/// Estimated physical diameter bounds in meters.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct DiameterRange {
    pub min: f64,
    pub max: f64,
}

impl DiameterRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the estimated bounds.
    pub fn average(&self) -> f64 {
        (self.min + self.max) * 0.5
    }
}

/// Summary data for one near-Earth object at its closest approach.
///
/// The `name` doubles as the seed source for every deterministic-jitter
/// branch in the estimators, so repeated queries for the same object always
/// produce the same prediction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidData {
    /// Object identifier, e.g. "(2024 YR4)".
    pub name: String,
    /// Estimated diameter bounds in meters.
    pub diameter: DiameterRange,
    /// Relative approach velocity in km/s.
    pub velocity: f64,
    /// Closest approach distance in AU.
    pub miss_distance: f64,
    /// Upstream "potentially hazardous asteroid" flag.
    pub is_hazardous: bool,
    /// ISO date of closest approach, e.g. "2025-06-01".
    pub approach_date: String,
    /// Orbital inclination in degrees, if known.
    #[serde(default)]
    pub inclination: Option<f64>,
    /// Orbit class name (Apollo, Aten, Amor, ...), if known.
    #[serde(default)]
    pub orbit_class: Option<String>,
}

impl AsteroidData {
    /// Average diameter in meters, guarded against malformed bounds.
    ///
    /// Non-finite or negative bounds degrade to a small default body rather
    /// than poisoning downstream arithmetic.
    pub fn average_diameter(&self) -> f64 {
        let avg = self.diameter.average();
        if avg.is_finite() && avg > 0.0 {
            avg
        } else {
            DEFAULT_DIAMETER_M
        }
    }

    /// Approach velocity in km/s, guarded against zero/negative/NaN input.
    pub fn velocity_km_s(&self) -> f64 {
        if self.velocity.is_finite() && self.velocity > 0.0 {
            self.velocity
        } else {
            DEFAULT_VELOCITY_KM_S
        }
    }

    /// Miss distance in AU, guarded against negative/NaN input.
    pub fn miss_distance_au(&self) -> f64 {
        if self.miss_distance.is_finite() && self.miss_distance >= 0.0 {
            self.miss_distance
        } else {
            DEFAULT_MISS_DISTANCE_AU
        }
    }

    /// Whether the orbit class is Earth-crossing (Apollo or Aten).
    ///
    /// Earth-crossing classes carry extra orbit-uncertainty weight in the
    /// probability and location estimators.
    pub fn is_earth_crossing(&self) -> bool {
        self.orbit_class
            .as_deref()
            .map(|class| {
                let class = class.to_ascii_lowercase();
                class.contains("apollo") || class.contains("aten")
            })
            .unwrap_or(false)
    }
}

/// Default diameter (meters) when bounds are missing or malformed.
pub const DEFAULT_DIAMETER_M: f64 = 50.0;

/// Default approach velocity (km/s) when malformed. Roughly the NEO median.
pub const DEFAULT_VELOCITY_KM_S: f64 = 17.0;

/// Default miss distance (AU) when malformed. Comfortably non-threatening.
pub const DEFAULT_MISS_DISTANCE_AU: f64 = 0.3;
