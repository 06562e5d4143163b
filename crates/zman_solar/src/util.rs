//! Shared angle and clock normalization.

use zman_time::MINUTES_PER_DAY;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to the modulus itself
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Wrap a minute-of-day into [0, 1440).
pub fn normalize_day_minutes(minutes: f64) -> f64 {
    let r = minutes.rem_euclid(MINUTES_PER_DAY);
    // rem_euclid rounds tiny negatives up to the modulus itself
    if r >= MINUTES_PER_DAY { 0.0 } else { r }
}
