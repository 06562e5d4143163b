//! Sunrise, sunset and solar transit as absolute instants.
//!
//! The horizon solver answers in minutes after 0h UTC of the civil date;
//! this module moves each answer onto the UTC date it belongs to and turns
//! it into a `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, Utc};
use log::trace;
use zman_solar::{
    GEOMETRIC_ZENITH, HorizonDirection, Location, SolarEventKind, event_day_shift, horizon_utc,
    horizon_utc_adjusted, solar_midnight_utc, solar_noon_utc,
};
use zman_time::{MINUTES_PER_DAY, instant_from_utc_minutes, julian_day};

use crate::occurrence::Occurrence;

/// Minutes after 0h UTC on `date` to an instant, after the day-boundary shift.
fn place_event(
    date: NaiveDate,
    longitude_deg: f64,
    minutes: f64,
    kind: SolarEventKind,
) -> DateTime<Utc> {
    let shift = event_day_shift(longitude_deg, minutes, kind);
    instant_from_utc_minutes(date, minutes + MINUTES_PER_DAY * shift as f64)
}

fn crossing(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    zenith_deg: f64,
    elevation_m: Option<f64>,
    direction: HorizonDirection,
) -> Occurrence<DateTime<Utc>> {
    let jd = julian_day(date);
    let event = match elevation_m {
        Some(h) => horizon_utc_adjusted(jd, latitude_deg, longitude_deg, zenith_deg, h, direction),
        None => horizon_utc(jd, latitude_deg, longitude_deg, zenith_deg, direction),
    };
    Occurrence::from_horizon(event)
        .map(|m| place_event(date, longitude_deg, m, SolarEventKind::from(direction)))
}

fn horizon(
    location: &Location,
    date: NaiveDate,
    elevation_m: f64,
    direction: HorizonDirection,
) -> Occurrence<DateTime<Utc>> {
    crossing(
        date,
        location.latitude_deg(),
        location.longitude_deg(),
        GEOMETRIC_ZENITH,
        Some(elevation_m),
        direction,
    )
}

fn elevation_for(location: &Location, use_elevation: bool) -> f64 {
    if use_elevation { location.elevation_m() } else { 0.0 }
}

/// Visible sunrise: upper limb at the refracted horizon, lowered by the
/// observer's elevation when `use_elevation` is set.
pub fn sunrise(
    location: &Location,
    date: NaiveDate,
    use_elevation: bool,
) -> Occurrence<DateTime<Utc>> {
    horizon(location, date, elevation_for(location, use_elevation), HorizonDirection::Sunrise)
}

/// Visible sunset; see [`sunrise`].
pub fn sunset(
    location: &Location,
    date: NaiveDate,
    use_elevation: bool,
) -> Occurrence<DateTime<Utc>> {
    horizon(location, date, elevation_for(location, use_elevation), HorizonDirection::Sunset)
}

pub fn sea_level_sunrise(location: &Location, date: NaiveDate) -> Occurrence<DateTime<Utc>> {
    horizon(location, date, 0.0, HorizonDirection::Sunrise)
}

pub fn sea_level_sunset(location: &Location, date: NaiveDate) -> Occurrence<DateTime<Utc>> {
    horizon(location, date, 0.0, HorizonDirection::Sunset)
}

/// Morning instant at which the Sun's center is `depression_deg` below the
/// geometric horizon. No refraction or elevation adjustment.
pub fn sunrise_offset_by_degrees(
    location: &Location,
    date: NaiveDate,
    depression_deg: f64,
) -> Occurrence<DateTime<Utc>> {
    crossing(
        date,
        location.latitude_deg(),
        location.longitude_deg(),
        GEOMETRIC_ZENITH + depression_deg,
        None,
        HorizonDirection::Sunrise,
    )
}

/// Evening counterpart of [`sunrise_offset_by_degrees`].
pub fn sunset_offset_by_degrees(
    location: &Location,
    date: NaiveDate,
    depression_deg: f64,
) -> Occurrence<DateTime<Utc>> {
    crossing(
        date,
        location.latitude_deg(),
        location.longitude_deg(),
        GEOMETRIC_ZENITH + depression_deg,
        None,
        HorizonDirection::Sunset,
    )
}

/// Upper transit of the Sun. Always occurs.
pub fn solar_noon(location: &Location, date: NaiveDate) -> DateTime<Utc> {
    let lon = location.longitude_deg();
    let minutes = solar_noon_utc(julian_day(date), lon);
    place_event(date, lon, minutes, SolarEventKind::Noon)
}

/// Lower transit following the day's solar noon. Always occurs.
pub fn solar_midnight(location: &Location, date: NaiveDate) -> DateTime<Utc> {
    let lon = location.longitude_deg();
    let minutes = solar_midnight_utc(julian_day(date), lon);
    place_event(date, lon, minutes, SolarEventKind::Midnight)
}

/// The four horizon crossings of one civil date at one place.
///
/// Built once per context and shared by every day definition resolved
/// against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub date: NaiveDate,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Sunrise, elevation adjusted when configured.
    pub sunrise: Occurrence<DateTime<Utc>>,
    /// Sunset, elevation adjusted when configured.
    pub sunset: Occurrence<DateTime<Utc>>,
    pub sea_level_sunrise: Occurrence<DateTime<Utc>>,
    pub sea_level_sunset: Occurrence<DateTime<Utc>>,
}

impl SolarDay {
    pub fn new(location: &Location, date: NaiveDate, use_elevation: bool) -> Self {
        let sea_level_sunrise = sea_level_sunrise(location, date);
        let sea_level_sunset = sea_level_sunset(location, date);
        let (sunrise, sunset) = if use_elevation && location.elevation_m() > 0.0 {
            (
                sunrise(location, date, true),
                sunset(location, date, true),
            )
        } else {
            (sea_level_sunrise, sea_level_sunset)
        };
        trace!(
            "solar day {date} at {}: sunrise {sunrise:?}, sunset {sunset:?}",
            location.name()
        );
        Self {
            date,
            latitude_deg: location.latitude_deg(),
            longitude_deg: location.longitude_deg(),
            sunrise,
            sunset,
            sea_level_sunrise,
            sea_level_sunset,
        }
    }

    /// Depression-angle crossing on this day.
    pub fn offset_by_degrees(
        &self,
        depression_deg: f64,
        direction: HorizonDirection,
    ) -> Occurrence<DateTime<Utc>> {
        crossing(
            self.date,
            self.latitude_deg,
            self.longitude_deg,
            GEOMETRIC_ZENITH + depression_deg,
            None,
            direction,
        )
    }
}
