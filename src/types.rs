//! Core types, unit conversions, and clamp bounds for impact prediction.
//!
//! Every estimator output is clamped into the ranges defined here so that
//! callers always receive displayable values, no matter how degenerate the
//! input. The bounds are deliberately generous: this is an educational
//! approximation, not an authoritative hazard model.

use serde::Serialize;
use thiserror::Error;

/// Kilometers per astronomical unit.
pub const KM_PER_AU: f64 = 149.6e6;

/// Joules per megaton of TNT equivalent.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Earth's axial tilt in degrees, used for the seasonal latitude offset.
pub const AXIAL_TILT_DEG: f64 = 23.44;

/// Earth rotates 15 degrees of longitude per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Lower bound on a displayed impact probability.
pub const MIN_PROBABILITY: f64 = 0.001;

/// Upper bound on a displayed impact probability.
///
/// Nothing in the catalog is ever shown as a coin flip or worse; the
/// estimator is heuristic and capping well below 1 keeps that honest.
pub const MAX_PROBABILITY: f64 = 0.5;

/// Impact energy bounds in megatons TNT.
pub const MIN_ENERGY_MT: f64 = 0.001;
pub const MAX_ENERGY_MT: f64 = 10_000.0;

/// Crater diameter bounds in meters.
pub const MIN_CRATER_DIAMETER_M: f64 = 10.0;
pub const MAX_CRATER_DIAMETER_M: f64 = 200_000.0;

/// Crater depth bounds in meters.
pub const MIN_CRATER_DEPTH_M: f64 = 1.0;
pub const MAX_CRATER_DEPTH_M: f64 = 5_000.0;

/// Affected radius bounds in kilometers.
pub const MIN_AFFECTED_RADIUS_KM: f64 = 1.0;
pub const MAX_AFFECTED_RADIUS_KM: f64 = 1_000.0;

/// Crater diameter (meters) above which complex-crater scaling applies.
pub const SIMPLE_COMPLEX_TRANSITION_M: f64 = 4_000.0;

/// Internal estimator failures.
///
/// These never escape `predict`/`scenarios`: every estimator intercepts its
/// own errors and substitutes the seeded fallback computation instead.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// An intermediate computation produced NaN or infinity.
    #[error("non-finite value while computing {stage}")]
    NonFinite { stage: &'static str },

    /// The approach date could not be parsed as an ISO date.
    #[error("unparseable approach date: {0:?}")]
    InvalidDate(String),
}

/// Four-level risk classification for dashboard display.
///
/// Ordered so that comparisons reflect severity (`Low < Medium < High <
/// Critical`). Serialized as the upper-case wire strings the dashboard
/// expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Wire/display string for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Which bounded perturbation of the base prediction this record represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactScenario {
    /// Central estimate computed directly from the input record.
    Nominal,
    /// Pessimistic variant: scaled-up probability, energy, and footprint.
    WorstCase,
    /// Optimistic variant: scaled-down probability, energy, and footprint.
    BestCase,
}

impl ImpactScenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactScenario::Nominal => "nominal",
            ImpactScenario::WorstCase => "worst_case",
            ImpactScenario::BestCase => "best_case",
        }
    }
}

/// Synthetic impact coordinates with a coarse geographic classification.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactLocation {
    /// Latitude in degrees, clamped to [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, wrapped into [-180, 180].
    pub longitude: f64,
    /// Country or major landmass name, if a bounding box matched.
    pub country: Option<String>,
    /// Continent or ocean-basin name.
    pub region: Option<String>,
    /// Whether the point classified as land.
    pub is_land: bool,
}

/// Estimated crater dimensions in meters.
///
/// Invariant: `depth < diameter` for every value this crate produces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CraterSize {
    pub diameter: f64,
    pub depth: f64,
}

/// A complete impact prediction for one near-Earth object.
///
/// Transient value object: recomputed fresh from an [`AsteroidData`] on every
/// call, with no persisted identity and no caching inside this crate.
///
/// [`AsteroidData`]: crate::asteroid::AsteroidData
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactPrediction {
    /// Impact probability in [0.001, 0.5].
    pub impact_probability: f64,
    /// Synthetic impact coordinates and geographic classification.
    pub impact_location: ImpactLocation,
    /// ISO-8601 timestamp within ±2 days of the approach date.
    pub impact_time: String,
    /// Kinetic energy in megatons TNT, in [0.001, 10000].
    pub impact_energy: f64,
    /// Estimated crater dimensions.
    pub crater_size: CraterSize,
    /// Blast/thermal-effect radius in kilometers, in [1, 1000].
    pub affected_radius: f64,
    /// Prediction confidence in [0, 100].
    pub confidence: f64,
    /// Combined risk classification.
    pub risk_level: RiskLevel,
    /// Which perturbation of the base prediction this is.
    pub scenario: ImpactScenario,
}
