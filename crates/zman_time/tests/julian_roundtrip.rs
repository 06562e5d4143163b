//! Julian Day / Julian Century round trips across the supported civil range.

use chrono::{Datelike, NaiveDate};
use zman_time::{centuries_to_jd, jd_to_calendar, jd_to_centuries, julian_day};

/// Every 97th day from 0001-01-01 to 9999-12-31, plus both endpoints.
fn sample_dates() -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(1, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
    let mut dates: Vec<NaiveDate> = first
        .iter_days()
        .step_by(97)
        .take_while(|d| *d < last)
        .collect();
    dates.push(last);
    dates
}

#[test]
fn century_roundtrip_years_1_to_9999() {
    for date in sample_dates() {
        let jd = julian_day(date);
        let back = centuries_to_jd(jd_to_centuries(jd));
        assert!(
            (back - jd).abs() < 1e-6,
            "{date}: jd {jd} came back as {back}"
        );
    }
}

#[test]
fn calendar_roundtrip_years_1_to_9999() {
    for date in sample_dates() {
        let (y, m, d) = jd_to_calendar(julian_day(date));
        assert_eq!(
            (y, m, d),
            (date.year(), date.month(), f64::from(date.day())),
            "{date}"
        );
    }
}

#[test]
fn consecutive_days_differ_by_one() {
    let start = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    for date in start.iter_days().take(120) {
        let next = date.succ_opt().unwrap();
        assert_eq!(julian_day(next) - julian_day(date), 1.0, "{date}");
    }
}
