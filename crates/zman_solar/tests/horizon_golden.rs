//! Golden-value tests for sunrise/sunset against published almanac times.
//!
//! Reference times are the NOAA Solar Calculator values for each place and
//! date (sea level, standard 50' horizon). Tolerance is one minute.

use zman_solar::{
    GEOMETRIC_ZENITH, HorizonDirection, HorizonEvent, SolarEventKind, event_day_shift,
    horizon_utc, horizon_utc_adjusted,
};
use zman_time::calendar_to_jd;

const TOLERANCE_MIN: f64 = 1.0;

fn sunrise(lat: f64, lon: f64, ymd: (i32, u32, u32)) -> HorizonEvent {
    let jd = calendar_to_jd(ymd.0, ymd.1, f64::from(ymd.2));
    horizon_utc_adjusted(jd, lat, lon, GEOMETRIC_ZENITH, 0.0, HorizonDirection::Sunrise)
}

fn sunset(lat: f64, lon: f64, ymd: (i32, u32, u32)) -> HorizonEvent {
    let jd = calendar_to_jd(ymd.0, ymd.1, f64::from(ymd.2));
    horizon_utc_adjusted(jd, lat, lon, GEOMETRIC_ZENITH, 0.0, HorizonDirection::Sunset)
}

fn hm(hours: u32, minutes: f64) -> f64 {
    f64::from(hours) * 60.0 + minutes
}

fn assert_near(event: HorizonEvent, expected_min: f64, label: &str) {
    let Some(actual) = event.utc_minutes() else {
        panic!("{label}: expected an event, got {event:?}");
    };
    assert!(
        (actual - expected_min).abs() < TOLERANCE_MIN,
        "{label}: {actual:.2} min UTC, expected {expected_min:.2}"
    );
}

#[test]
fn jerusalem_equinox() {
    // 05:42:30 / 17:50:45 IST (UTC+2)
    assert_near(sunrise(31.7767, 35.2345, (2024, 3, 20)), hm(3, 42.5), "sunrise");
    assert_near(sunset(31.7767, 35.2345, (2024, 3, 20)), hm(15, 50.75), "sunset");
}

#[test]
fn london_midsummer() {
    // 04:43 / 21:21 BST
    assert_near(sunrise(51.5074, -0.1278, (2024, 6, 21)), hm(3, 43.2), "sunrise");
    assert_near(sunset(51.5074, -0.1278, (2024, 6, 21)), hm(20, 21.7), "sunset");
}

#[test]
fn new_york_midwinter() {
    // 07:16:50 / 16:32:04 EST
    assert_near(sunrise(40.7128, -74.006, (2024, 12, 21)), hm(12, 16.8), "sunrise");
    assert_near(sunset(40.7128, -74.006, (2024, 12, 21)), hm(21, 32.1), "sunset");
}

#[test]
fn sydney_winter_sunrise_on_previous_utc_date() {
    // 07:00 AEST on June 21 is 21:00 UTC on June 20
    let ev = sunrise(-33.8688, 151.2093, (2024, 6, 21));
    assert_near(ev, hm(21, 0.06), "sunrise");
    let shift = event_day_shift(151.2093, ev.utc_minutes().unwrap(), SolarEventKind::Sunrise);
    assert_eq!(shift, -1);
}

#[test]
fn reykjavik_sunset_on_next_utc_date() {
    // 00:04 UTC on June 22
    let ev = sunset(64.1466, -21.9426, (2024, 6, 21));
    assert_near(ev, hm(0, 4.1), "sunset");
    let shift = event_day_shift(-21.9426, ev.utc_minutes().unwrap(), SolarEventKind::Sunset);
    assert_eq!(shift, 1);
}

#[test]
fn tromso_summer_never_sets() {
    assert_eq!(sunrise(69.65, 18.96, (2024, 6, 21)), HorizonEvent::NeverSets);
    assert_eq!(sunset(69.65, 18.96, (2024, 6, 21)), HorizonEvent::NeverSets);
}

#[test]
fn tromso_winter_never_rises() {
    assert_eq!(sunrise(69.65, 18.96, (2024, 12, 21)), HorizonEvent::NeverRises);
}

#[test]
fn tromso_last_sunrise_of_autumn() {
    // A short day of under an hour before the polar night
    let rise = sunrise(69.65, 18.96, (2024, 11, 26)).utc_minutes().unwrap();
    let set = sunset(69.65, 18.96, (2024, 11, 26)).utc_minutes().unwrap();
    assert!(set > rise);
    assert!(set - rise < 60.0, "day length {}", set - rise);
}

#[test]
fn latitude_80_six_degree_dawn_at_winter_solstice() {
    let jd = calendar_to_jd(2024, 12, 21.0);
    let ev = horizon_utc(jd, 80.0, 0.0, 96.0, HorizonDirection::Sunrise);
    assert_eq!(ev, HorizonEvent::NeverRises);
}

#[test]
fn sunrise_before_sunset_outside_polar_zone() {
    for (lat, lon) in [(31.7767, 35.2345), (40.7128, -74.006), (-33.8688, 151.2093), (0.0, 0.0)] {
        for month in 1..=12 {
            let jd = calendar_to_jd(2024, month, 15.0);
            let crossing = |direction| {
                horizon_utc_adjusted(jd, lat, lon, GEOMETRIC_ZENITH, 0.0, direction)
                    .utc_minutes()
                    .unwrap()
            };
            let rise = crossing(HorizonDirection::Sunrise);
            let set = crossing(HorizonDirection::Sunset);
            let rise = rise + 1440.0 * event_day_shift(lon, rise, SolarEventKind::Sunrise) as f64;
            let set = set + 1440.0 * event_day_shift(lon, set, SolarEventKind::Sunset) as f64;
            assert!(rise < set, "({lat}, {lon}) month {month}: {rise} !< {set}");
        }
    }
}

#[test]
fn deeper_dawn_is_earlier() {
    let jd = calendar_to_jd(2024, 3, 20.0);
    let mut previous = f64::INFINITY;
    for depression in [6.0, 8.5, 11.5, 16.1, 18.0, 19.8] {
        let ev = horizon_utc(jd, 31.7767, 35.2345, 90.0 + depression, HorizonDirection::Sunrise);
        let m = ev.utc_minutes().unwrap();
        assert!(m < previous, "{depression} deg dawn at {m} not before {previous}");
        previous = m;
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let jd = calendar_to_jd(2024, 9, 3.0);
    let a = horizon_utc(jd, 31.7767, 35.2345, 106.1, HorizonDirection::Sunrise);
    let b = horizon_utc(jd, 31.7767, 35.2345, 106.1, HorizonDirection::Sunrise);
    assert_eq!(
        a.utc_minutes().unwrap().to_bits(),
        b.utc_minutes().unwrap().to_bits()
    );
}
