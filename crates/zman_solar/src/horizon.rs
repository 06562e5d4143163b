//! Sunrise/sunset and depression-angle crossings (NOAA method).
//!
//! The crossing time is refined in exactly two fixed passes: declination and
//! equation of time are first taken at solar noon, then recomputed at the
//! first-pass estimate. There is no convergence loop, so every call is
//! bounded. Sub-second differences against a fully iterated solver are
//! expected.
//!
//! Longitudes are east positive at the API; internally the NOAA convention
//! (west positive) is used so that sunrise takes `+H` and sunset `-H`.

use log::debug;
use zman_time::{MINUTES_PER_DAY, jd_to_centuries};

use crate::ephemeris::{declination_deg, equation_of_time_min};
use crate::horizon_types::{HorizonDirection, HorizonEvent, SolarEventKind, adjusted_zenith};
use crate::util::normalize_day_minutes;

/// Minutes of clock time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Transit time in minutes after 0h UTC of `jd`, not normalized.
///
/// `offset_min` is 720 for noon and 1440 for the following midnight.
fn transit_minutes(jd: f64, lon_west_deg: f64, offset_min: f64) -> f64 {
    let mean = offset_min + MINUTES_PER_DEGREE * lon_west_deg;
    let first = mean - equation_of_time_min(jd_to_centuries(jd + mean / MINUTES_PER_DAY));
    mean - equation_of_time_min(jd_to_centuries(jd + first / MINUTES_PER_DAY))
}

/// Solar noon in minutes after 0h UTC, wrapped into [0, 1440).
///
/// `jd` is the Julian Day at 0h UT of the civil date.
pub fn solar_noon_utc(jd: f64, longitude_deg: f64) -> f64 {
    normalize_day_minutes(transit_minutes(jd, -longitude_deg, 720.0))
}

/// Solar midnight at the end of the civil date, minutes after 0h UTC,
/// wrapped into [0, 1440).
pub fn solar_midnight_utc(jd: f64, longitude_deg: f64) -> f64 {
    normalize_day_minutes(transit_minutes(jd, -longitude_deg, MINUTES_PER_DAY))
}

/// Argument of the hour-angle arccosine.
///
/// `cos(z) / (cos(lat) cos(dec)) - tan(lat) tan(dec)`. Outside [-1, 1] the
/// Sun never reaches the zenith angle on that day.
pub fn hour_angle_argument(latitude_deg: f64, declination_deg: f64, zenith_deg: f64) -> f64 {
    let lat = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let z = zenith_deg.to_radians();
    z.cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan()
}

/// One pass: crossing time in minutes after 0h UTC for the Sun as it is at `t`.
fn crossing_minutes(
    t: f64,
    latitude_deg: f64,
    lon_west_deg: f64,
    zenith_deg: f64,
    direction: HorizonDirection,
) -> Result<f64, HorizonEvent> {
    let arg = hour_angle_argument(latitude_deg, declination_deg(t), zenith_deg);
    if arg < -1.0 {
        return Err(HorizonEvent::NeverSets);
    }
    if !(arg <= 1.0) {
        return Err(HorizonEvent::NeverRises);
    }

    let h = arg.acos().to_degrees();
    let h = if direction.is_rising() { h } else { -h };
    Ok(720.0 + MINUTES_PER_DEGREE * (lon_west_deg - h) - equation_of_time_min(t))
}

/// Time the Sun's center crosses `zenith_deg` on the civil date whose 0h UT
/// Julian Day is `jd`.
///
/// The zenith is used as given; see [`horizon_utc_adjusted`] for refraction
/// and elevation.
pub fn horizon_utc(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    direction: HorizonDirection,
) -> HorizonEvent {
    let lon_west = -longitude_deg;

    let noon = transit_minutes(jd, lon_west, 720.0);
    let t_noon = jd_to_centuries(jd + noon / MINUTES_PER_DAY);

    let result = crossing_minutes(t_noon, latitude_deg, lon_west, zenith_deg, direction)
        .and_then(|first| {
            let t = jd_to_centuries(jd + first / MINUTES_PER_DAY);
            crossing_minutes(t, latitude_deg, lon_west, zenith_deg, direction)
        });

    match result {
        Ok(minutes) => HorizonEvent::Event {
            utc_minutes: normalize_day_minutes(minutes),
        },
        Err(absent) => {
            debug!(
                "no {direction:?} crossing at zenith {zenith_deg:.4} \
                 for lat {latitude_deg:.4}, jd {jd}: {absent:?}"
            );
            absent
        }
    }
}

/// [`horizon_utc`] after [`adjusted_zenith`]: refraction and solar radius
/// for the geometric zenith, plus the dip for `elevation_m`.
pub fn horizon_utc_adjusted(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    elevation_m: f64,
    direction: HorizonDirection,
) -> HorizonEvent {
    let zenith = adjusted_zenith(zenith_deg, elevation_m);
    horizon_utc(jd, latitude_deg, longitude_deg, zenith, direction)
}

/// Days to add to the civil date so that a UTC time-of-day lands on the
/// date the event actually belongs to.
///
/// Far from Greenwich an evening event can fall after 0h UTC of the next day
/// (and a morning one before 0h UTC of the same day). The longitude's whole
/// number of hours approximates local clock time for the check.
pub fn event_day_shift(longitude_deg: f64, utc_minutes: f64, kind: SolarEventKind) -> i64 {
    let local_hours = (longitude_deg / 15.0).trunc() + utc_minutes / 60.0;
    match kind {
        SolarEventKind::Sunrise if local_hours > 18.0 => -1,
        SolarEventKind::Sunset if local_hours < 6.0 => 1,
        SolarEventKind::Midnight if local_hours < 12.0 => 1,
        SolarEventKind::Noon if local_hours > 24.0 => -1,
        SolarEventKind::Noon if local_hours < 0.0 => 1,
        _ => 0,
    }
}
