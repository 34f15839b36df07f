use approx::assert_abs_diff_eq;

use gnsstime::date::*;
use gnsstime::epoch::{Table, GPS_BDS_WEEKS};
use gnsstime::zone::beijing_to_utc;
use gnsstime::*;

fn at(date: &str, time: &str) -> CivilTimestamp {
    CivilTimestamp::new(parse_date(date).unwrap(), parse_time_of_day(time).unwrap())
}

#[test]
fn reference_epochs() {
    assert_eq!(51544.0, to_mjd(2000, 1, 1, 0, 0, 0.0));
    assert_eq!(44244.0, to_mjd(1980, 1, 6, 0, 0, 0.0));
    let gps = to_gps(1980, 1, 6, 0, 0, 0.0);
    assert_eq!(0, gps.week);
    assert_abs_diff_eq!(18.0, gps.seconds, epsilon = 1e-9);
}

#[test]
fn calendar() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(29, days_in_month(2024, 2));
    assert_eq!(28, days_in_month(2023, 2));
}

#[test]
fn doy_bounds() {
    let mut mjd = Gregorian(1999, 1, 1).mjd();
    while mjd < Gregorian(2026, 1, 1).mjd() {
        let date = Gregorian::from(mjd);
        let max = if is_leap_year(date.year()) { 366 } else { 365 };
        let doy = to_doy(date.year(), date.month(), date.day());
        assert!((1..=max).contains(&doy), "{} {}", date, doy);
        mjd += 1;
    }
}

#[test]
fn bds_follows_gps() {
    for &(date, time) in &[
        ("1999-08-22", "00:00"),
        ("2006-01-01", "00:00:00"),
        ("2025-03-11", "02:13:58.8"),
        ("2025-12-31", "23:59:59.999"),
    ] {
        let ts = at(date, time);
        let gps = ts.gps();
        let bds = ts.bds();
        assert_eq!(gps.week - GPS_BDS_WEEKS, bds.week);
        assert_eq!(gps.seconds - 14.0, bds.seconds);
        assert_eq!(to_gps(ts.year, ts.month, ts.day, ts.hour, ts.minute, ts.second), gps);
        assert_eq!(to_bds(ts.year, ts.month, ts.day, ts.hour, ts.minute, ts.second), bds);
    }
}

#[test]
fn zero_duration() {
    let t = at("2025-03-12", "08:18:58.3");
    assert_eq!(t, add_duration(t, Duration::ZERO));
}

#[test]
fn month_boundary() {
    let t = add_duration(at("2025-01-31", "00:00"), Duration::ymd(0, 0, 1));
    assert_eq!(at("2025-02-01", "00:00"), t);
}

#[test]
fn exercise_one() {
    let ts = at("2025-03-12", "00:00");
    assert_eq!(60746.0, ts.mjd());
    assert_eq!(71, ts.doy());
}

#[test]
fn exercise_two() {
    let sum = at("2025-03-12", "08:18:58.3") + Duration::hms(112, 39, 30.5);
    assert_eq!(Gregorian(2025, 3, 17), sum.date());
    assert_eq!((0, 58), (sum.hour, sum.minute));
    assert_abs_diff_eq!(28.8, sum.second, epsilon = 1e-9);
    assert_eq!("60751.040611", format!("{:.6}", sum.mjd()));
    assert_eq!("2025-03-17 00:58:28.800", sum.to_string());
}

#[test]
fn exercise_three() {
    let utc = beijing_to_utc(at("2025-03-11", "10:13:58.8"));
    assert_eq!("2025-03-11 02:13:58.800", utc.to_string());
    assert_eq!("week 2357 sow 180856.800", utc.gps().to_string());
    assert_eq!("week 1001 sow 180842.800", utc.bds().to_string());
    assert_eq!(utc.gps(), utc.gps_with(&Table));
}

#[test]
fn parse_errors() {
    assert!(matches!(parse_time_of_day("12:60:00"), Err(Error::Range("minute", _))));
    assert!(matches!(parse_time_of_day("12"), Err(Error::Format(_))));
    assert!(matches!(parse_time_of_day("1:2:3:4"), Err(Error::Format(_))));
    let time = parse_time_of_day("12:30").unwrap();
    assert_eq!(TimeOfDay { hour: 12, minute: 30, second: 0.0 }, time);
}
