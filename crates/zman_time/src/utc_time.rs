//! UTC minute-of-day ↔ absolute instant.
//!
//! The horizon solver works in minutes after 0h UTC of a civil date. These
//! helpers turn that coordinate into a `DateTime<Utc>` at whole-millisecond
//! resolution and back.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};

/// 0h UTC on the given civil date.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Instant `minutes` after 0h UTC on `date`, truncated to the millisecond.
///
/// `minutes` may be negative or exceed a day; the instant simply lands on a
/// neighbouring date.
pub fn instant_from_utc_minutes(date: NaiveDate, minutes: f64) -> DateTime<Utc> {
    // i64::MIN is the one millisecond count TimeDelta rejects
    let millis = ((minutes * 60_000.0).trunc() as i64).max(-i64::MAX);
    offset_instant(utc_midnight(date), TimeDelta::milliseconds(millis))
}

/// `instant + delta`, saturating at the ends of the representable range.
pub fn offset_instant(instant: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Minutes after 0h UTC of the instant's own UTC date.
pub fn utc_minutes_of(instant: DateTime<Utc>) -> f64 {
    let secs = f64::from(instant.num_seconds_from_midnight());
    let nanos = f64::from(instant.nanosecond() % 1_000_000_000);
    secs / 60.0 + nanos / 60.0e9
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn midnight_is_zero_minutes() {
        let t = utc_midnight(date(2024, 3, 20));
        assert_eq!(t.to_rfc3339(), "2024-03-20T00:00:00+00:00");
        assert_eq!(utc_minutes_of(t), 0.0);
    }

    #[test]
    fn minutes_to_instant() {
        let t = instant_from_utc_minutes(date(2024, 3, 20), 222.5);
        assert_eq!(t.to_rfc3339(), "2024-03-20T03:42:30+00:00");
    }

    #[test]
    fn truncates_to_millisecond() {
        let t = instant_from_utc_minutes(date(2024, 3, 20), 1.0 / 60_000.0 * 1.9);
        assert_eq!(t.timestamp_subsec_millis(), 1);
    }

    #[test]
    fn negative_minutes_roll_back() {
        let t = instant_from_utc_minutes(date(2024, 3, 20), -30.0);
        assert_eq!(t.to_rfc3339(), "2024-03-19T23:30:00+00:00");
    }

    #[test]
    fn saturates_past_the_last_date() {
        let t = instant_from_utc_minutes(NaiveDate::MAX, 1440.0 + 30.0);
        assert_eq!(t, DateTime::<Utc>::MAX_UTC);
        let t = instant_from_utc_minutes(NaiveDate::MIN, -30.0);
        assert_eq!(t, DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn offset_within_range_is_plain_addition() {
        let t = utc_midnight(date(2024, 3, 20));
        assert_eq!(offset_instant(t, TimeDelta::minutes(-72)), t - TimeDelta::minutes(72));
        let last = DateTime::<Utc>::MAX_UTC;
        assert_eq!(offset_instant(last, TimeDelta::minutes(1)), last);
    }

    #[test]
    fn infinite_minutes_do_not_panic() {
        let d = date(2024, 3, 20);
        assert_eq!(instant_from_utc_minutes(d, f64::NEG_INFINITY), DateTime::<Utc>::MIN_UTC);
        assert_eq!(instant_from_utc_minutes(d, f64::INFINITY), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn minutes_roundtrip() {
        let t = instant_from_utc_minutes(date(2024, 6, 21), 950.25);
        assert!((utc_minutes_of(t) - 950.25).abs() < 1e-9);
    }
}
