//! Low-precision solar ephemeris (NOAA / Meeus ch. 25).
//!
//! Every function takes Julian centuries since J2000.0. Angles are computed
//! and returned in degrees; they are converted to radians only at the point of
//! a trigonometric call, because all polynomial coefficients below are
//! calibrated in degrees.

use crate::util::normalize_360;

/// Geometric mean longitude of the Sun, [0, 360) degrees.
pub fn geom_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + t * (36_000.769_83 + 0.000_303_2 * t))
}

/// Geometric mean anomaly of the Sun, [0, 360) degrees.
pub fn geom_mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + t * (35_999.050_29 - 0.000_153_7 * t))
}

/// Eccentricity of Earth's orbit (unitless).
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Equation of center of the Sun in degrees.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = geom_mean_anomaly_deg(t).to_radians();
    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

/// True longitude of the Sun, [0, 360) degrees.
pub fn true_longitude_deg(t: f64) -> f64 {
    normalize_360(geom_mean_longitude_deg(t) + equation_of_center_deg(t))
}

/// Longitude of the Moon's ascending node Ω, [0, 360) degrees.
pub fn lunar_node_deg(t: f64) -> f64 {
    normalize_360(125.04 - 1_934.136 * t)
}

/// Apparent longitude of the Sun (nutation and aberration), [0, 360) degrees.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let omega = lunar_node_deg(t).to_radians();
    normalize_360(true_longitude_deg(t) - 0.005_69 - 0.004_78 * omega.sin())
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for nutation, in degrees.
pub fn corrected_obliquity_deg(t: f64) -> f64 {
    let omega = lunar_node_deg(t).to_radians();
    mean_obliquity_deg(t) + 0.002_56 * omega.cos()
}

/// Declination of the Sun in degrees.
pub fn declination_deg(t: f64) -> f64 {
    let eps = corrected_obliquity_deg(t).to_radians();
    let lambda = apparent_longitude_deg(t).to_radians();
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes (true solar time minus mean solar time).
pub fn equation_of_time_min(t: f64) -> f64 {
    let eps = corrected_obliquity_deg(t).to_radians();
    let l0 = geom_mean_longitude_deg(t).to_radians();
    let e = eccentricity(t);
    let m = geom_mean_anomaly_deg(t).to_radians();

    let y = (eps / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    4.0 * eq.to_degrees()
}

/// All ephemeris quantities for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian centuries since J2000.0 this snapshot was taken at.
    pub centuries: f64,
    pub geom_mean_longitude_deg: f64,
    pub geom_mean_anomaly_deg: f64,
    pub eccentricity: f64,
    pub equation_of_center_deg: f64,
    pub true_longitude_deg: f64,
    pub apparent_longitude_deg: f64,
    pub mean_obliquity_deg: f64,
    pub corrected_obliquity_deg: f64,
    pub declination_deg: f64,
    /// Minutes, positive when the sundial is ahead of the clock.
    pub equation_of_time_min: f64,
}

impl SolarPosition {
    /// Snapshot at `t` Julian centuries since J2000.0.
    pub fn at_centuries(t: f64) -> Self {
        Self {
            centuries: t,
            geom_mean_longitude_deg: geom_mean_longitude_deg(t),
            geom_mean_anomaly_deg: geom_mean_anomaly_deg(t),
            eccentricity: eccentricity(t),
            equation_of_center_deg: equation_of_center_deg(t),
            true_longitude_deg: true_longitude_deg(t),
            apparent_longitude_deg: apparent_longitude_deg(t),
            mean_obliquity_deg: mean_obliquity_deg(t),
            corrected_obliquity_deg: corrected_obliquity_deg(t),
            declination_deg: declination_deg(t),
            equation_of_time_min: equation_of_time_min(t),
        }
    }

    /// Snapshot at a Julian Day.
    pub fn at_jd(jd: f64) -> Self {
        Self::at_centuries(zman_time::jd_to_centuries(jd))
    }
}
