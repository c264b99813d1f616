//! Offline risk briefings.
//!
//! The dashboard normally asks a language model to narrate a prediction;
//! when that service is unavailable it falls back to this deterministic
//! generator. Output is assembled from fixed phrasing keyed off the
//! prediction itself, with a name-seeded choice between equivalent
//! openings so a list of objects does not read like a form letter.

use crate::asteroid::AsteroidData;
use crate::seed::{salts, seed};
use crate::types::{ImpactPrediction, RiskLevel};

/// One-line headline for a risk level.
pub fn risk_headline(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "No meaningful impact threat on the current approach.",
        RiskLevel::Medium => "Worth tracking: elevated but modest impact risk.",
        RiskLevel::High => "Significant impact risk on the current approach.",
        RiskLevel::Critical => "Severe impact risk; this object dominates the watch list.",
    }
}

/// Deterministic prose summary of a prediction.
///
/// Same object, same prediction, same text, every time.
pub fn risk_summary(asteroid: &AsteroidData, prediction: &ImpactPrediction) -> String {
    let openings: [&str; 3] = [
        "Current estimates place",
        "The present close-approach solution puts",
        "Heuristic screening puts",
    ];
    let opening = openings[(seed(&asteroid.name, salts::PHRASING) * openings.len() as f64)
        as usize
        % openings.len()];

    let surface = if prediction.impact_location.is_land {
        "a land impact"
    } else {
        "an ocean impact"
    };
    let place = prediction
        .impact_location
        .country
        .as_deref()
        .or(prediction.impact_location.region.as_deref())
        .unwrap_or("an unclassified area");

    format!(
        "{opening} the impact probability for {name} at {probability:.1}% \
         ({risk} risk). A worst-case strike would release roughly {energy:.0} Mt TNT, \
         producing {surface} near {place} with effects reaching about \
         {radius:.0} km. Confidence in this estimate is {confidence:.0}%. \
         These figures are an educational approximation, not a hazard assessment.",
        name = asteroid.name,
        probability = prediction.impact_probability * 100.0,
        risk = prediction.risk_level.as_str(),
        energy = prediction.impact_energy,
        radius = prediction.affected_radius,
        confidence = prediction.confidence,
    )
}

/// Mitigation strategies appropriate to the predicted severity.
///
/// Ordered from monitoring to emergency response; higher risk levels
/// include everything the lower ones do.
pub fn mitigation_strategies(prediction: &ImpactPrediction) -> Vec<&'static str> {
    let mut strategies = vec![
        "Continue optical and radar tracking to refine the orbit solution.",
        "Re-run the close-approach analysis as new astrometry arrives.",
    ];

    if prediction.risk_level >= RiskLevel::Medium {
        strategies.push(
            "Prioritize the object for precovery searches in archival survey imagery.",
        );
    }

    if prediction.risk_level >= RiskLevel::High {
        strategies.push(
            "Evaluate kinetic-impactor deflection windows while lead time remains.",
        );
        if prediction.impact_energy > 100.0 {
            strategies.push(
                "Model regional evacuation scenarios for the projected impact corridor.",
            );
        }
    }

    if prediction.risk_level == RiskLevel::Critical {
        strategies.push(
            "Engage international planetary-defense coordination for a characterization mission.",
        );
        if !prediction.impact_location.is_land {
            strategies.push(
                "Assess tsunami exposure for coastlines bordering the projected impact basin.",
            );
        }
    }

    strategies
}
