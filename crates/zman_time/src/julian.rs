//! Julian Day and Julian Century conversions.
//!
//! The calendar is the proleptic Gregorian calendar throughout; there is no
//! Julian-calendar switch in October 1582. January and February are counted
//! as months 13 and 14 of the previous year, following Meeus, *Astronomical
//! Algorithms*, ch. 7.

use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian Day for a proleptic Gregorian calendar date.
///
/// `day` may carry a fractional part; `day = 1.0` is 0h UT on the first of
/// the month, so whole days land on `x.5` Julian Days.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * f64::from(y + 4716)).floor() + (30.6001 * f64::from(m + 1)).floor() + day
        + f64::from(b)
        - 1524.5
}

/// Julian Day at 0h UT of a civil date.
pub fn julian_day(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), f64::from(date.day()))
}

/// Inverse of [`calendar_to_jd`]: `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Day for a count of Julian centuries since J2000.0.
pub fn centuries_to_jd(centuries: f64) -> f64 {
    centuries * DAYS_PER_JULIAN_CENTURY + J2000_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UT
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch, 1957-10-04.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn equinox_2024() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(julian_day(date), 2_460_389.5);
    }

    #[test]
    fn january_uses_previous_year() {
        let dec31 = calendar_to_jd(2023, 12, 31.0);
        let jan1 = calendar_to_jd(2024, 1, 1.0);
        assert_eq!(jan1 - dec31, 1.0);
    }

    #[test]
    fn gregorian_leap_rules() {
        assert_eq!(calendar_to_jd(2000, 3, 1.0) - calendar_to_jd(2000, 2, 29.0), 1.0);
        assert_eq!(calendar_to_jd(1900, 3, 1.0) - calendar_to_jd(1900, 2, 28.0), 1.0);
    }

    #[test]
    fn proleptic_before_1582() {
        // No ten-day gap: Oct 4 and Oct 15 1582 are eleven days apart.
        let gap = calendar_to_jd(1582, 10, 15.0) - calendar_to_jd(1582, 10, 4.0);
        assert_eq!(gap, 11.0);
    }

    #[test]
    fn year_one_and_9999() {
        assert_eq!(calendar_to_jd(1, 1, 1.0), 1_721_425.5);
        assert_eq!(calendar_to_jd(9999, 12, 31.0), 5_373_483.5);
    }

    #[test]
    fn calendar_inverse() {
        let (y, m, d) = jd_to_calendar(2_460_389.5);
        assert_eq!((y, m), (2024, 3));
        assert!((d - 20.0).abs() < 1e-9);
    }

    #[test]
    fn calendar_inverse_fractional() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "day = {d}");
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn centuries_roundtrip() {
        let jd = 2_460_389.5;
        let back = centuries_to_jd(jd_to_centuries(jd));
        assert!((back - jd).abs() < 1e-6);
    }
}
