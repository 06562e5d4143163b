//! Solar elevation and azimuth for an observer at an instant.
//!
//! Uses the same ephemeris as the horizon solver, so the elevation at a
//! computed sunrise comes back as the zenith that was solved for.

use chrono::{DateTime, Utc};
use zman_time::{MINUTES_PER_DAY, julian_day, utc_minutes_of};

use crate::ephemeris::SolarPosition;
use crate::util::{normalize_180, normalize_360};

/// Sun's position in the observer's horizontal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// Altitude of the Sun's center above the geometric horizon, degrees.
    /// No refraction is applied.
    pub elevation_deg: f64,
    /// Azimuth from north through east, [0, 360) degrees.
    pub azimuth_deg: f64,
    /// Local hour angle, [-180, 180) degrees, zero at solar noon.
    pub hour_angle_deg: f64,
}

/// Horizontal position of the Sun at `instant` for an observer at
/// `latitude_deg`, `longitude_deg` (east positive).
pub fn solar_position_at(
    instant: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> HorizontalPosition {
    let minutes = utc_minutes_of(instant);
    let jd = julian_day(instant.date_naive()) + minutes / MINUTES_PER_DAY;
    let sun = SolarPosition::at_jd(jd);

    let true_solar_minutes = minutes + sun.equation_of_time_min + 4.0 * longitude_deg;
    let hour_angle_deg = normalize_180(true_solar_minutes / 4.0 - 180.0);

    let lat = latitude_deg.to_radians();
    let dec = sun.declination_deg.to_radians();
    let ha = hour_angle_deg.to_radians();

    // clamp guards rounding only; the expression is a cosine
    let cos_zenith = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos()).clamp(-1.0, 1.0);
    let elevation_deg = 90.0 - cos_zenith.acos().to_degrees();

    let azimuth_from_south = ha.sin().atan2(ha.cos() * lat.sin() - dec.tan() * lat.cos());
    let azimuth_deg = normalize_360(azimuth_from_south.to_degrees() + 180.0);

    HorizontalPosition {
        elevation_deg,
        azimuth_deg,
        hour_angle_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use zman_time::instant_from_utc_minutes;

    fn equinox() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn jerusalem_sunrise_elevation() {
        // 03:42:30.5 UTC
        let t = instant_from_utc_minutes(equinox(), 222.508);
        let p = solar_position_at(t, 31.7767, 35.2345);
        assert!((p.elevation_deg - -0.8333).abs() < 0.01, "elevation = {}", p.elevation_deg);
        assert!((p.azimuth_deg - 89.47).abs() < 0.05, "azimuth = {}", p.azimuth_deg);
    }

    #[test]
    fn jerusalem_noon() {
        let t = instant_from_utc_minutes(equinox(), 586.38);
        let p = solar_position_at(t, 31.7767, 35.2345);
        assert!((p.elevation_deg - 58.33).abs() < 0.02, "elevation = {}", p.elevation_deg);
        assert!(p.hour_angle_deg.abs() < 0.01, "ha = {}", p.hour_angle_deg);
        assert!((p.azimuth_deg - 180.0).abs() < 0.05, "azimuth = {}", p.azimuth_deg);
    }

    #[test]
    fn azimuth_in_range() {
        for minutes in [0.0, 300.0, 720.0, 1200.0, 1439.0] {
            let p = solar_position_at(instant_from_utc_minutes(equinox(), minutes), -33.9, 18.4);
            assert!((0.0..360.0).contains(&p.azimuth_deg));
            assert!((-90.0..=90.0).contains(&p.elevation_deg));
        }
    }
}
