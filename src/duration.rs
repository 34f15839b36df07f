// calendar-aware addition of a duration to a timestamp

use std::convert::TryFrom;

use crate::date::*;
use crate::timestamp::*;

/// A signed calendar duration. Months and years have no fixed length,
/// so each field is carried separately.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Duration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0.0,
    };

    pub fn hms(hours: i32, minutes: i32, seconds: f64) -> Self {
        Duration { hours, minutes, seconds, ..Duration::ZERO }
    }

    pub fn ymd(years: i32, months: i32, days: i32) -> Self {
        Duration { years, months, days, ..Duration::ZERO }
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;
    fn neg(self) -> Duration {
        Duration {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
        }
    }
}

// ISO 8601 with every field spelled out
impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{}Y{}M{}DT{}H{}M{}S",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Days in 400 Gregorian years, after which the calendar repeats.
const DAYS_PER_CYCLE: i64 = 146097;

/// Add `delta` to `base`, carrying from seconds up to days, then
/// applying months, then normalising the day against the month
/// lengths, and adding years last.
///
/// The order matters near month ends: years are added after the day
/// has been normalised, so 2024-02-29 plus one year is 2025-02-29.
///
/// A year beyond `i32` saturates; [`try_add_duration`] reports it.
pub fn add_duration(base: CivilTimestamp, delta: Duration) -> CivilTimestamp {
    let (year, t) = widen(base, delta);
    let year = i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX });
    CivilTimestamp { year, ..t }
}

/// Like [`add_duration`], but fails on a non-finite `seconds` or a
/// result year that does not fit.
pub fn try_add_duration(base: CivilTimestamp, delta: Duration) -> Result<CivilTimestamp> {
    if !delta.seconds.is_finite() {
        return Err(Error::Range("seconds", delta.seconds));
    }
    let (year, t) = widen(base, delta);
    match i32::try_from(year) {
        Ok(year) => Ok(CivilTimestamp { year, ..t }),
        Err(_) => Err(Error::Range("year", year as f64)),
    }
}

// the full pipeline, with the year left wide
fn widen(base: CivilTimestamp, delta: Duration) -> (i64, CivilTimestamp) {
    let (second, carry) = add_seconds(base.second, delta.seconds);
    let (minute, carry) = add_minutes(base.minute, i64::from(delta.minutes).saturating_add(carry));
    let (hour, carry) = add_hours(base.hour, i64::from(delta.hours).saturating_add(carry));
    let day = i64::from(base.day) + i64::from(delta.days);
    let day = day.saturating_add(carry);
    let (year, month) = add_months(i64::from(base.year), i64::from(base.month) + i64::from(delta.months));
    let (year, month, day) = normalize_day(year, month, day);
    let year = year + i64::from(delta.years);
    log::trace!(
        "{} + {} = {}-{:02}-{:02} {:02}:{:02}:{:06.3}",
        base, delta, year, month, day, hour, minute, second
    );
    // month and day are in range after normalize_day
    let t = CivilTimestamp { year: 0, month: month as i32, day: day as i32, hour, minute, second };
    (year, t)
}

pub(crate) fn add_seconds(second: f64, seconds: f64) -> (f64, i64) {
    let second = second + seconds;
    // float to int casts saturate, and NaN becomes zero
    let mut carry = second.div_euclid(60.0) as i64;
    let mut second = second.rem_euclid(60.0);
    // rem_euclid rounds a tiny negative remainder up to exactly 60
    if second >= 60.0 {
        second = 0.0;
        carry = carry.saturating_add(1);
    }
    log::trace!("seconds {} carry {}", second, carry);
    (second, carry)
}

pub(crate) fn add_minutes(minute: i32, minutes: i64) -> (i32, i64) {
    let minute = i64::from(minute).saturating_add(minutes);
    let carry = minute.div_euclid(60);
    log::trace!("minutes {} carry {}", minute, carry);
    (minute.rem_euclid(60) as i32, carry)
}

pub(crate) fn add_hours(hour: i32, hours: i64) -> (i32, i64) {
    let hour = i64::from(hour).saturating_add(hours);
    let carry = hour.div_euclid(24);
    log::trace!("hours {} carry {}", hour, carry);
    (hour.rem_euclid(24) as i32, carry)
}

/// Wraps `month` into 1..=12, moving whole years.
pub(crate) fn add_months(year: i64, month: i64) -> (i64, i64) {
    (year + (month - 1).div_euclid(12), (month - 1).rem_euclid(12) + 1)
}

/// Expects `month` in 1..=12.
pub(crate) fn normalize_day(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let cycles = day.saturating_sub(1).div_euclid(DAYS_PER_CYCLE);
    let mut year = year + 400 * cycles;
    let mut month = month;
    let mut day = day.saturating_sub(1).rem_euclid(DAYS_PER_CYCLE) + 1;
    // leap years repeat every 400 years
    let length = |year: i64, month: i64| i64::from(days_in_month(year.rem_euclid(400) as i32, month as i32));
    while day > length(year, month) {
        day -= length(year, month);
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    while day < 1 {
        month -= 1;
        if month < 1 {
            month = 12;
            year -= 1;
        }
        day += length(year, month);
    }
    (year, month, day)
}
