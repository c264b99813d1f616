//! NEOWatch impact-prediction core.
//!
//! Deterministic, closed-form estimators that turn a near-Earth-object
//! summary ([`AsteroidData`]) into an impact prediction
//! ([`ImpactPrediction`]): probability, synthetic location, energy, crater
//! dimensions, affected radius, confidence, a four-level risk label, and
//! three bounded scenario variants.
//!
//! Two properties hold everywhere:
//!
//! - **Determinism.** All "random" variation is seeded from the object
//!   name, so repeated queries render identically.
//! - **Totality.** [`predict`] and [`scenarios`] never fail and never
//!   panic; every internal failure degrades to a seeded fallback with the
//!   same output shape and clamps.
//!
//! The formulas are educational heuristics, not orbital mechanics. The
//! constants were chosen for plausible-looking dashboard output and should
//! not be mistaken for (or "corrected" toward) a physical model.

pub mod asteroid;
pub mod briefing;
pub mod energy;
pub mod geography;
pub mod location;
pub mod prediction;
pub mod probability;
pub mod radius;
pub mod risk;
pub mod scenario;
pub mod seed;
pub mod types;

pub use asteroid::{AsteroidData, DiameterRange};
pub use prediction::predict;
pub use scenario::scenarios;
pub use types::{CraterSize, ImpactLocation, ImpactPrediction, ImpactScenario, RiskLevel};

#[cfg(test)]
mod proptest_predictions;

#[cfg(test)]
pub mod test_utils;
