// proleptic Gregorian calendar arithmetic

#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Gregorian(pub i32, pub i32, pub i32);

impl std::fmt::Display for Gregorian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Gregorian {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> i32 {
        self.1
    }
    pub fn day(self) -> i32 {
        self.2
    }

    /// Integer day number on the MJD axis, exact over the whole
    /// proleptic Gregorian calendar.
    pub const fn mjd(self) -> i32 {
        let Gregorian(y, m, d) = self;
        let (y, m) = if m > 2 { (y, m + 1) } else { (y - 1, m + 13) };
        days_in_years(y) + muldiv(m, 153, 5) + d - 679004
    }

    /// Day of the year, 1 for January 1st.
    pub fn ordinal(self) -> i32 {
        self.mjd() - Gregorian(self.0, 1, 1).mjd() + 1
    }

    pub fn is_valid(self) -> bool {
        (1..=12).contains(&self.1) && (1..=days_in_month(self.0, self.1)).contains(&self.2)
    }
}

impl From<i32> for Gregorian {
    fn from(mjd: i32) -> Gregorian {
        let mut d = mjd + 678881;
        let mut y = muldiv(d, 400, 146097) + 1;
        y -= (days_in_years(y) > d) as i32;
        d -= days_in_years(y) - 31;
        let m = muldiv(d, 17, 520);
        d -= muldiv(m, 520, 17);
        if m > 10 {
            Gregorian(y + 1, m - 10, d)
        } else {
            Gregorian(y, m + 2, d)
        }
    }
}

impl From<Gregorian> for i32 {
    fn from(date: Gregorian) -> i32 {
        date.mjd()
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Zero for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

const fn days_in_years(y: i32) -> i32 {
    muldiv(y, 1461, 4) - muldiv(y, 1, 100) + muldiv(y, 1, 400)
}

const fn muldiv(var: i32, mul: i32, div: i32) -> i32 {
    (var * mul).div_euclid(div)
}

/// Current UTC day number and seconds into that day.
pub(crate) fn clock() -> (i32, f64) {
    use std::time::SystemTime;
    // a clock before 1970 reads as the epoch
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs();
    let days = secs.div_euclid(86400) as i32;
    let rest = secs.rem_euclid(86400) as f64 + f64::from(now.subsec_millis()) / 1000.0;
    (Gregorian(1970, 1, 1).mjd() + days, rest)
}
