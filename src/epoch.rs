// GPS and BeiDou week number and seconds of week

use crate::date::*;
use crate::julian::*;
use crate::timestamp::CivilTimestamp;

pub const GPS_EPOCH_MJD: f64 = 44244.0;
/// Weeks from the GPS epoch to the BDS epoch.
pub const GPS_BDS_WEEKS: i64 = 1356;
/// 2006-01-01, which is exactly `GPS_BDS_WEEKS` after the GPS epoch.
pub const BDS_EPOCH_MJD: f64 = GPS_EPOCH_MJD + 7.0 * GPS_BDS_WEEKS as f64;
/// GPS - UTC since 2017-01-01.
pub const LEAP_SECONDS: f64 = 18.0;
/// BDS - GPS in seconds of week.
pub const BDS_GPS_SECONDS: f64 = -14.0;

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Week number and seconds into the week for one constellation.
///
/// `seconds` is not clamped to a week: a leap second correction can
/// push it past 604800 or below zero near a week boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeekTime {
    pub week: i64,
    pub seconds: f64,
}

impl std::fmt::Display for WeekTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "week {} sow {:.3}", self.week, self.seconds)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Constellation {
    Gps,
    Bds,
}

impl Constellation {
    pub fn week_time<L>(self, mjd: f64, leap: &L) -> WeekTime
    where
        L: LeapSeconds + ?Sized,
    {
        match self {
            Constellation::Gps => gps_week(mjd, leap),
            Constellation::Bds => bds_from_gps(gps_week(mjd, leap)),
        }
    }
}

impl std::fmt::Display for Constellation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constellation::Gps => write!(f, "GPS"),
            Constellation::Bds => write!(f, "BDS"),
        }
    }
}

/// GPS - UTC in seconds at a given MJD.
pub trait LeapSeconds {
    fn gps_utc(&self, mjd: f64) -> f64;
}

/// The same offset at every date.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fixed(pub f64);

pub const FIXED: Fixed = Fixed(LEAP_SECONDS);

impl LeapSeconds for Fixed {
    fn gps_utc(&self, _: f64) -> f64 {
        self.0
    }
}

/// The GPS - UTC history since the GPS epoch.
///
/// Compiled in, so it goes stale at the next leap second.
#[derive(Copy, Clone, Debug, Default)]
pub struct Table;

// date the offset takes effect, GPS - UTC
const HISTORY: [(Gregorian, i16); 19] = [
    (Gregorian(1980, 1, 6), 0),
    (Gregorian(1981, 7, 1), 1),
    (Gregorian(1982, 7, 1), 2),
    (Gregorian(1983, 7, 1), 3),
    (Gregorian(1985, 7, 1), 4),
    (Gregorian(1988, 1, 1), 5),
    (Gregorian(1990, 1, 1), 6),
    (Gregorian(1991, 1, 1), 7),
    (Gregorian(1992, 7, 1), 8),
    (Gregorian(1993, 7, 1), 9),
    (Gregorian(1994, 7, 1), 10),
    (Gregorian(1996, 1, 1), 11),
    (Gregorian(1997, 7, 1), 12),
    (Gregorian(1999, 1, 1), 13),
    (Gregorian(2006, 1, 1), 14),
    (Gregorian(2009, 1, 1), 15),
    (Gregorian(2012, 7, 1), 16),
    (Gregorian(2015, 7, 1), 17),
    (Gregorian(2017, 1, 1), 18),
];

impl LeapSeconds for Table {
    fn gps_utc(&self, mjd: f64) -> f64 {
        HISTORY
            .iter()
            .rev()
            .find(|(date, _)| mjd >= f64::from(date.mjd()))
            .map_or(0.0, |&(_, dtai)| f64::from(dtai))
    }
}

/// GPS week and seconds of week at a UTC instant given as MJD.
pub fn gps_week<L>(mjd: f64, leap: &L) -> WeekTime
where
    L: LeapSeconds + ?Sized,
{
    let week = ((mjd - GPS_EPOCH_MJD) / 7.0).floor();
    let days = mjd - GPS_EPOCH_MJD - week * 7.0;
    let seconds = days * SECONDS_PER_DAY + leap.gps_utc(mjd);
    let gps = WeekTime { week: week as i64, seconds };
    log::debug!("mjd {} -> GPS {}", mjd, gps);
    gps
}

pub fn bds_from_gps(gps: WeekTime) -> WeekTime {
    WeekTime {
        week: gps.week - GPS_BDS_WEEKS,
        seconds: gps.seconds + BDS_GPS_SECONDS,
    }
}

/// GPS week and seconds of week, with the fixed 18 second leap offset.
pub fn to_gps(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> WeekTime {
    gps_week(to_mjd(year, month, day, hour, minute, second), &FIXED)
}

/// BDS week and seconds of week, derived from [`to_gps`].
pub fn to_bds(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> WeekTime {
    bds_from_gps(to_gps(year, month, day, hour, minute, second))
}

/// GPS week and seconds of week with a chosen leap second model.
pub fn to_gps_with<L>(ts: &CivilTimestamp, leap: &L) -> WeekTime
where
    L: LeapSeconds + ?Sized,
{
    gps_week(ts.mjd(), leap)
}

pub fn to_bds_with<L>(ts: &CivilTimestamp, leap: &L) -> WeekTime
where
    L: LeapSeconds + ?Sized,
{
    bds_from_gps(to_gps_with(ts, leap))
}
