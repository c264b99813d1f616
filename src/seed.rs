//! Deterministic name-keyed seeds.
//!
//! Every "randomized" branch in the estimators draws from these seeds
//! instead of a real RNG, so repeated queries for the same object render
//! identically. The construction is intentionally simple: sum the
//! character codes of the name, multiply by a small prime salt, and take
//! modulo 100 over 100. This is demo variation, not simulation-quality
//! randomness.

/// Salt primes used across the estimators.
///
/// Distinct primes give visibly different seed streams from one name hash.
pub mod salts {
    pub const PROBABILITY: u64 = 7;
    pub const LATITUDE: u64 = 13;
    pub const LONGITUDE: u64 = 17;
    pub const TIME_OFFSET: u64 = 19;
    pub const ENERGY_BAND: u64 = 23;
    pub const HAZARD_BONUS: u64 = 29;
    pub const SIZE_BONUS: u64 = 31;
    pub const SCORE_SCALE: u64 = 37;
    pub const THRESHOLD_LOW: u64 = 41;
    pub const THRESHOLD_MEDIUM: u64 = 43;
    pub const THRESHOLD_HIGH: u64 = 47;
    pub const FALLBACK: u64 = 53;
    pub const PHRASING: u64 = 59;
}

/// Character-code sum of the object name.
///
/// An empty name hashes to a fixed non-zero value so that even degenerate
/// records get stable, distinguishable-from-zero seeds.
pub fn name_hash(name: &str) -> u64 {
    let sum: u64 = name.chars().map(|c| c as u64).sum();
    if sum == 0 { 97 } else { sum }
}

/// Stable pseudo-random value in [0, 1) for a name and salt prime.
///
/// Identical `(name, salt)` always yields the identical seed; different
/// salts decorrelate the streams enough for display purposes.
pub fn seed(name: &str, salt: u64) -> f64 {
    (name_hash(name).wrapping_mul(salt) % 100) as f64 / 100.0
}

/// Seeded value mapped into the range [lo, hi).
pub fn jitter(name: &str, salt: u64, lo: f64, hi: f64) -> f64 {
    lo + seed(name, salt) * (hi - lo)
}
