//! Structural properties that hold for every place and date outside the
//! polar zones.

use chrono::{Datelike, NaiveDate, TimeDelta};
use zman_halachic::{
    DayDefinitionId, Location, ZMANIM, ZmanId, ZmanimConfig, ZmanimContext, solar_day,
};
use zman_solar::solar_position_at;

fn places() -> Vec<Location> {
    vec![
        Location::new("Jerusalem", 31.7767, 35.2345, 754.0, "Asia/Jerusalem").unwrap(),
        Location::new("New York", 40.7128, -74.006, 10.0, "America/New_York").unwrap(),
        Location::new("Sydney", -33.8688, 151.2093, 58.0, "Australia/Sydney").unwrap(),
        Location::new("Quito", -0.1807, -78.4678, 2850.0, "America/Guayaquil").unwrap(),
    ]
}

fn dates() -> impl Iterator<Item = NaiveDate> {
    (1..=12).map(|m| NaiveDate::from_ymd_opt(2024, m, 7).unwrap())
}

fn contexts(config: ZmanimConfig) -> impl Iterator<Item = ZmanimContext> {
    places().into_iter().flat_map(move |loc| {
        let first = ZmanimContext::new(loc, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), config)
            .unwrap();
        dates().map(move |d| first.with_date(d))
    })
}

#[test]
fn twelve_temporal_hours_span_the_day() {
    for c in contexts(ZmanimConfig::default()) {
        for id in DayDefinitionId::ALL {
            let anchors = c.day_anchors(id);
            let hour = anchors.temporal_hour().at().unwrap();
            let span = anchors.dusk.at().unwrap() - anchors.dawn.at().unwrap();
            let diff = hour.as_millis() * 12.0 - span.num_milliseconds() as f64;
            assert!(diff.abs() < 1e-6, "{id} on {}: {diff}", c.date());
        }
    }
}

#[test]
fn dawns_deepen_in_order() {
    let order = [
        ZmanId::Alos26Degrees,
        ZmanId::Alos19Point8Degrees,
        ZmanId::Alos18Degrees,
        ZmanId::Alos16Point1,
        ZmanId::Misheyakir11Point5,
        ZmanId::Misheyakir11,
        ZmanId::Misheyakir10Point2,
        ZmanId::SunriseBaalHatanya,
        ZmanId::SeaLevelSunrise,
    ];
    for c in contexts(ZmanimConfig::default()) {
        let times: Vec<_> = order.iter().map(|&id| c.zman(id).at().unwrap()).collect();
        for (pair, ids) in times.windows(2).zip(order.windows(2)) {
            assert!(pair[0] < pair[1], "{} !< {} on {}", ids[0], ids[1], c.date());
        }
    }
}

#[test]
fn day_runs_in_order() {
    let order = [
        ZmanId::AlosHashachar,
        ZmanId::Sunrise,
        ZmanId::SofZmanShmaMga,
        ZmanId::SofZmanShmaGra,
        ZmanId::SofZmanTfilaGra,
        ZmanId::Chatzos,
        ZmanId::MinchaGedolaGra,
        ZmanId::MinchaKetanaGra,
        ZmanId::PlagHaminchaGra,
        ZmanId::CandleLighting,
        ZmanId::Sunset,
        ZmanId::TzaisGeonim8Point5,
        ZmanId::Tzais,
    ];
    for c in contexts(ZmanimConfig::default()) {
        let values = c.zmanim(&order);
        for pair in values.windows(2) {
            let (a, b) = (pair[0].time.at().unwrap(), pair[1].time.at().unwrap());
            assert!(
                a < b,
                "{} !< {} at {} on {}",
                pair[0].id,
                pair[1].id,
                c.location().name(),
                c.date()
            );
        }
    }
}

#[test]
fn sunrise_before_sunset_with_and_without_elevation() {
    let config = ZmanimConfig {
        use_elevation: true,
        ..Default::default()
    };
    for c in contexts(config) {
        assert!(c.sunrise().at().unwrap() < c.sunset().at().unwrap());
        assert!(c.sunrise().at().unwrap() <= c.sea_level_sunrise().at().unwrap());
        assert!(c.sunset().at().unwrap() >= c.sea_level_sunset().at().unwrap());
    }
}

#[test]
fn zero_elevation_changes_nothing() {
    let loc = Location::new("Shore", 32.08, 34.78, 0.0, "Asia/Jerusalem").unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    assert_eq!(solar_day::sunrise(&loc, date, true), solar_day::sea_level_sunrise(&loc, date));
    assert_eq!(solar_day::sunset(&loc, date, true), solar_day::sea_level_sunset(&loc, date));
}

#[test]
fn sun_is_at_the_refracted_horizon_at_sunrise() {
    for c in contexts(ZmanimConfig::default()) {
        let loc = c.location();
        let rise = c.sea_level_sunrise().at().unwrap();
        let pos = solar_position_at(rise, loc.latitude_deg(), loc.longitude_deg());
        assert!(
            (pos.elevation_deg + 0.8333).abs() < 0.02,
            "{} on {}: {}",
            loc.name(),
            c.date(),
            pos.elevation_deg
        );
    }
}

#[test]
fn american_sunset_is_on_the_next_utc_date() {
    let loc = Location::new("Los Angeles", 34.0522, -118.2437, 0.0, "America/Los_Angeles").unwrap();
    for d in dates() {
        let set = solar_day::sea_level_sunset(&loc, d).at().unwrap();
        assert_eq!(set.date_naive(), d.succ_opt().unwrap(), "{d}");
        let rise = solar_day::sea_level_sunrise(&loc, d).at().unwrap();
        assert_eq!(rise.date_naive(), d);
    }
}

#[test]
fn recomputation_is_identical() {
    for c in contexts(ZmanimConfig::default()) {
        let again = ZmanimContext::new(c.location().clone(), c.date(), *c.config()).unwrap();
        assert_eq!(c.all_zmanim(), again.all_zmanim());
    }
}

#[test]
fn advancing_the_date_leaves_nothing_stale() {
    let loc = places().remove(0);
    let start = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    let mut c = ZmanimContext::new(loc.clone(), start, ZmanimConfig::default()).unwrap();
    for _ in 0..10 {
        c = c.next_day().unwrap();
        let fresh = ZmanimContext::new(loc.clone(), c.date(), ZmanimConfig::default()).unwrap();
        assert_eq!(c.all_zmanim(), fresh.all_zmanim(), "{}", c.date());
    }
    assert_eq!(c.date().day(), 28);
}

#[test]
fn consecutive_sunrises_about_a_day_apart() {
    let loc = places().remove(1);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut c = ZmanimContext::new(loc, start, ZmanimConfig::default()).unwrap();
    for _ in 0..365 {
        let next = c.next_day().unwrap();
        let gap = next.sunrise().at().unwrap() - c.sunrise().at().unwrap();
        assert!((gap - TimeDelta::days(1)).abs() < TimeDelta::minutes(3), "{}: {gap}", c.date());
        c = next;
    }
}

#[test]
fn every_zman_is_registered_once() {
    let ids: Vec<ZmanId> = ZmanId::all().collect();
    assert_eq!(ids.len(), ZMANIM.len());
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id as usize, i);
    }
}
