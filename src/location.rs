//! Synthetic impact-location and impact-time estimators.
//!
//! Coordinates are derived from the approach timing (Earth's rotation gives
//! a longitude offset, the day of year gives a seasonal latitude offset)
//! plus name-seeded spread, then classified against the coarse geography
//! tables. Earth-crossing orbit classes get a narrower latitude spread and
//! a rotation-weighted longitude; everything else spreads wider and leans
//! on the seeds.
//!
//! The result is stable for a given input record, and it is emphatically
//! not an ephemeris: the coordinates exist so the dashboard map has a
//! plausible, reproducible point to draw.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::asteroid::AsteroidData;
use crate::geography;
use crate::seed::{salts, seed};
use crate::types::{AXIAL_TILT_DEG, DEGREES_PER_HOUR, EstimatorError, ImpactLocation};

/// Latitude spread (degrees) for Earth-crossing orbit classes.
const NARROW_LATITUDE_SPREAD: f64 = 60.0;

/// Latitude spread (degrees) for everything else.
const WIDE_LATITUDE_SPREAD: f64 = 120.0;

/// Maximum impact-time offset from the approach date, in hours (±2 days).
const MAX_TIME_OFFSET_HOURS: f64 = 48.0;

/// Reference date used when the approach date cannot be parsed.
const FALLBACK_DATE: (i32, u32, u32) = (2000, 1, 1);

/// Estimate the impact location for one object.
///
/// Never fails: unparseable dates or non-finite metadata switch to purely
/// name-seeded coordinates before classification.
pub fn impact_location(asteroid: &AsteroidData) -> ImpactLocation {
    let (latitude, longitude) = match try_coordinates(asteroid) {
        Ok(coords) => coords,
        Err(err) => {
            tracing::debug!(
                name = %asteroid.name,
                error = %err,
                "location estimator degraded to seeded coordinates"
            );
            fallback_coordinates(&asteroid.name)
        }
    };

    let class = geography::classify(latitude, longitude);
    ImpactLocation {
        latitude,
        longitude,
        country: class.country.map(str::to_owned),
        region: Some(class.region.to_owned()),
        is_land: class.is_land,
    }
}

/// Primary coordinate derivation from approach timing, orbit metadata, and
/// the name seeds.
fn try_coordinates(asteroid: &AsteroidData) -> Result<(f64, f64), EstimatorError> {
    let approach = parse_approach_date(&asteroid.approach_date)?;

    let time_of_day = approach.hour() as f64 + approach.minute() as f64 / 60.0;
    let day_of_year = approach.ordinal() as f64;

    // Earth rotates 15°/hour under the approach geometry.
    let rotation_offset = (time_of_day * DEGREES_PER_HOUR) % 360.0;
    // Axial-tilt approximation: impacts drift with the sub-solar latitude.
    let seasonal_latitude =
        (std::f64::consts::TAU * day_of_year / 365.0).sin() * AXIAL_TILT_DEG;

    let lat_seed = seed(&asteroid.name, salts::LATITUDE);
    let lon_seed = seed(&asteroid.name, salts::LONGITUDE);

    // Earth-crossing classes approach along the ecliptic: narrower latitude
    // spread, longitude dominated by the rotation offset. Everything else
    // spreads wide and leans on the name seed.
    let (mut latitude, mut longitude) = if asteroid.is_earth_crossing() {
        (
            seasonal_latitude + (lat_seed - 0.5) * NARROW_LATITUDE_SPREAD,
            rotation_offset * 0.7 + lon_seed * 360.0 * 0.3,
        )
    } else {
        (
            seasonal_latitude + (lat_seed - 0.5) * WIDE_LATITUDE_SPREAD,
            rotation_offset * 0.3 + lon_seed * 360.0 * 0.7,
        )
    };

    if let Some(inclination) = asteroid.inclination
        && inclination.is_finite()
    {
        latitude += inclination * 0.1;
    }

    // Velocity-normalized nudge on both axes: faster objects arrive on
    // flatter trajectories and shift the footprint.
    let velocity_adjust = ((asteroid.velocity_km_s() - 20.0) / 20.0).clamp(-1.0, 1.0);
    latitude += velocity_adjust * 3.0;
    longitude += velocity_adjust * 5.0;

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(EstimatorError::NonFinite {
            stage: "impact coordinates",
        });
    }

    Ok((latitude.clamp(-90.0, 90.0), wrap_longitude(longitude)))
}

/// Purely name-seeded coordinates for the fallback path.
fn fallback_coordinates(name: &str) -> (f64, f64) {
    let latitude = ((seed(name, salts::LATITUDE) - 0.5) * 180.0).clamp(-90.0, 90.0);
    let longitude = wrap_longitude(seed(name, salts::LONGITUDE) * 360.0);
    (latitude, longitude)
}

/// Wrap any longitude into [-180, 180].
fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Impact time: the approach date perturbed by a name-seeded offset of at
/// most ±2 days, formatted as an ISO-8601 timestamp.
pub fn impact_time(asteroid: &AsteroidData) -> String {
    let approach = parse_approach_date(&asteroid.approach_date).unwrap_or_else(|err| {
        tracing::debug!(
            name = %asteroid.name,
            error = %err,
            "impact time anchored to reference date"
        );
        let (y, m, d) = FALLBACK_DATE;
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("reference date is valid")
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid")
    });

    let offset_hours =
        (seed(&asteroid.name, salts::TIME_OFFSET) - 0.5) * 2.0 * MAX_TIME_OFFSET_HOURS;
    let offset = Duration::seconds((offset_hours * 3600.0) as i64);

    (approach + offset).format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Parse the upstream approach date. NeoWs feeds use plain dates, the JPL
/// close-approach API appends a time component; both are accepted.
fn parse_approach_date(raw: &str) -> Result<NaiveDateTime, EstimatorError> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
    }
    Err(EstimatorError::InvalidDate(raw.to_owned()))
}
