use thiserror::Error;

use crate::date::*;
use crate::duration::{add_duration, Duration};
use crate::epoch::*;
use crate::julian::*;

/// A clock reading within one day.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:06.3}", self.hour, self.minute, self.second)
    }
}

/// Calendar date and time of day, with no time zone attached.
///
/// Fields are not checked against each other: the arithmetic accepts
/// `day = 31` in April and so on. Text from users goes through
/// [`crate::parse`], which does check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CivilTimestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl CivilTimestamp {
    pub fn new(date: Gregorian, time: TimeOfDay) -> Self {
        CivilTimestamp {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        }
    }

    /// The current UTC time from the system clock.
    pub fn now() -> Self {
        let (mjd, secs) = clock();
        let whole = secs.floor() as i32;
        let time = TimeOfDay {
            hour: whole / 3600,
            minute: whole % 3600 / 60,
            second: secs - f64::from(whole - whole % 60),
        };
        CivilTimestamp::new(Gregorian::from(mjd), time)
    }

    pub fn date(&self) -> Gregorian {
        Gregorian(self.year, self.month, self.day)
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay { hour: self.hour, minute: self.minute, second: self.second }
    }

    pub fn mjd(&self) -> f64 {
        to_mjd(self.year, self.month, self.day, self.hour, self.minute, self.second)
    }

    pub fn doy(&self) -> i32 {
        to_doy(self.year, self.month, self.day)
    }

    pub fn gps(&self) -> WeekTime {
        self.gps_with(&FIXED)
    }

    pub fn gps_with<L: LeapSeconds + ?Sized>(&self, leap: &L) -> WeekTime {
        to_gps_with(self, leap)
    }

    pub fn bds(&self) -> WeekTime {
        self.bds_with(&FIXED)
    }

    pub fn bds_with<L: LeapSeconds + ?Sized>(&self, leap: &L) -> WeekTime {
        to_bds_with(self, leap)
    }
}

impl std::ops::Add<Duration> for CivilTimestamp {
    type Output = CivilTimestamp;
    fn add(self, delta: Duration) -> CivilTimestamp {
        add_duration(self, delta)
    }
}

impl std::fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date(), self.time())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("invalid date {0}")]
    Date(String),
    #[error("time format error, expected HH:MM[:SS.sss] ({0})")]
    Format(String),
    #[error("{0} out of range ({1})")]
    Range(&'static str, f64),
}
