// civil date and time to Modified Julian Date

use crate::date::*;

/// JD - MJD
pub const MODIFIED: f64 = 2400000.5;
/// JD of the civil day count origin, with the Gregorian century
/// correction for 1900-2099 folded in.
pub const JD_ORIGIN: f64 = 1720981.5;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const DAYS_PER_MONTH: f64 = 30.6001;

/// Modified Julian Date of a civil date and time.
///
/// The year is taken to start in March, so that the leap day falls
/// at the end. Exact from 1900-03-01 to 2100-02-28; outside that
/// range the folded century correction is off by a day or more.
/// The inputs are not range-checked.
pub fn to_mjd(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (DAYS_PER_YEAR * f64::from(year)).floor();
    let b = (DAYS_PER_MONTH * f64::from(month + 1)).floor();
    let fraction = f64::from(hour) / 24.0
        + f64::from(minute) / 1440.0
        + second / 86400.0;
    let jd = a + b + f64::from(day) + fraction + JD_ORIGIN;
    jd - MODIFIED
}

/// Day of the year, 1 to 366.
pub fn to_doy(year: i32, month: i32, day: i32) -> i32 {
    Gregorian(year, month, day).ordinal()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test() {
        for &(y, m, d, h, min, s, mjd) in &[
            (2000, 1, 1, 0, 0, 0.0, 51544.0),
            (1980, 1, 6, 0, 0, 0.0, 44244.0),
            (1970, 1, 1, 0, 0, 0.0, 40587.0),
            (2006, 1, 1, 0, 0, 0.0, 53736.0),
            (2025, 3, 12, 0, 0, 0.0, 60746.0),
            (2024, 2, 29, 12, 0, 0.0, 60369.5),
            (2025, 3, 17, 0, 58, 28.8, 60751.040611111),
        ] {
            assert_abs_diff_eq!(mjd, to_mjd(y, m, d, h, min, s), epsilon = 1e-8);
        }
    }

    #[test]
    fn agrees_with_day_numbers() {
        let first = Gregorian(1900, 3, 1).mjd();
        let last = Gregorian(2100, 2, 28).mjd();
        for mjd in first..=last {
            let date = Gregorian::from(mjd);
            let float = to_mjd(date.year(), date.month(), date.day(), 0, 0, 0.0);
            assert_eq!(f64::from(mjd), float, "{}", date);
        }
    }

    #[test]
    fn outside_supported_range() {
        // the folded century correction only holds for 1900-2099
        assert_eq!(-1.0, to_mjd(1858, 11, 17, 0, 0, 0.0));
        assert_eq!(0, Gregorian(1858, 11, 17).mjd());
    }

    #[test]
    fn time_fraction() {
        let midnight = to_mjd(2025, 3, 12, 0, 0, 0.0);
        assert_abs_diff_eq!(0.25, to_mjd(2025, 3, 12, 6, 0, 0.0) - midnight, epsilon = 1e-9);
        assert_abs_diff_eq!(
            1.0 / 1440.0,
            to_mjd(2025, 3, 12, 0, 1, 0.0) - midnight,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            30.5 / 86400.0,
            to_mjd(2025, 3, 12, 0, 0, 30.5) - midnight,
            epsilon = 1e-9
        );
    }

    #[test]
    fn doy() {
        assert_eq!(1, to_doy(2025, 1, 1));
        assert_eq!(71, to_doy(2025, 3, 12));
        assert_eq!(366, to_doy(2024, 12, 31));
        for &year in &[1999, 2000, 2023, 2024] {
            let max = if is_leap_year(year) { 366 } else { 365 };
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let doy = to_doy(year, month, day);
                    assert!(1 <= doy && doy <= max, "{}-{}-{}", year, month, day);
                }
            }
        }
    }
}
