// fixed-offset civil time zones

use crate::duration::*;
use crate::timestamp::*;

/// China Standard Time, UTC+8, no daylight saving.
pub const BEIJING_OFFSET_HOURS: i32 = 8;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Zone {
    Utc,
    Beijing,
}

impl Zone {
    /// Local time minus UTC.
    pub fn offset_hours(self) -> i32 {
        match self {
            Zone::Utc => 0,
            Zone::Beijing => BEIJING_OFFSET_HOURS,
        }
    }

    pub fn to_utc(self, local: CivilTimestamp) -> CivilTimestamp {
        add_duration(local, Duration::hms(-self.offset_hours(), 0, 0.0))
    }

    pub fn from_utc(self, utc: CivilTimestamp) -> CivilTimestamp {
        add_duration(utc, Duration::hms(self.offset_hours(), 0, 0.0))
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Utc => write!(f, "UTC"),
            Zone::Beijing => write!(f, "Beijing (UTC+{})", BEIJING_OFFSET_HOURS),
        }
    }
}

pub fn beijing_to_utc(local: CivilTimestamp) -> CivilTimestamp {
    Zone::Beijing.to_utc(local)
}

pub fn utc_to_beijing(utc: CivilTimestamp) -> CivilTimestamp {
    Zone::Beijing.from_utc(utc)
}
