use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gnsstime::date::Gregorian;
use gnsstime::epoch::{Constellation, LeapSeconds, Table, FIXED};
use gnsstime::zone::*;
use gnsstime::*;

#[derive(Parser)]
#[command(name = "gnsstime")]
#[command(about = "Convert civil dates and times to MJD, day of year, GPS and BDS time")]
struct Cli {
    /// Use the GPS-UTC leap second history instead of a fixed 18 s
    #[arg(long, global = true)]
    leap_table: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct When {
    /// Date as YYYY-MM-DD (default: today)
    date: Option<String>,
    /// Time as HH:MM or HH:MM:SS.sss (default: now)
    time: Option<String>,
}

impl When {
    fn resolve(&self, now: CivilTimestamp) -> Result<CivilTimestamp> {
        let date = match &self.date {
            Some(text) => parse_date(text).with_context(|| format!("bad date {:?}", text))?,
            None => now.date(),
        };
        let time = match &self.time {
            Some(text) => {
                parse_time_of_day(text).with_context(|| format!("bad time {:?}", text))?
            }
            None => now.time(),
        };
        let ts = CivilTimestamp::new(date, time);
        log::debug!("resolved {:?} {:?} to {}", self.date, self.time, ts);
        Ok(ts)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Modified Julian Date
    Mjd(When),
    /// Day of year
    Doy {
        /// Date as YYYY-MM-DD (default: today)
        date: Option<String>,
    },
    /// GPS week and seconds of week
    Gps(When),
    /// BeiDou week and seconds of week
    Bds(When),
    /// Add a calendar duration, then print the result and its MJD
    Add {
        #[command(flatten)]
        when: When,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        years: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        hours: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        minutes: i32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Convert Beijing time (UTC+8) to UTC, with GPS and BDS time
    Utc(When),
    /// Work the three fixed exercises
    Homework,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let cli = Cli::parse();
    let leap: &dyn LeapSeconds = if cli.leap_table { &Table } else { &FIXED };
    let now = CivilTimestamp::now();

    match cli.command {
        Command::Mjd(when) => {
            let ts = when.resolve(now)?;
            println!("{}  MJD {:.6}", ts, ts.mjd());
        }
        Command::Doy { date } => {
            let date = match date {
                Some(text) => parse_date(&text).with_context(|| format!("bad date {:?}", text))?,
                None => now.date(),
            };
            println!("{}  DOY {}", date, to_doy(date.year(), date.month(), date.day()));
        }
        Command::Gps(when) => week_time(Constellation::Gps, when.resolve(now)?, leap),
        Command::Bds(when) => week_time(Constellation::Bds, when.resolve(now)?, leap),
        Command::Add { when, years, months, days, hours, minutes, seconds } => {
            let base = when.resolve(now)?;
            let delta = Duration { years, months, days, hours, minutes, seconds };
            let sum = try_add_duration(base, delta)
                .with_context(|| format!("cannot add {} to {}", delta, base))?;
            println!("{} + {} = {}", base, delta, sum);
            println!("MJD {:.6}", sum.mjd());
        }
        Command::Utc(when) => {
            let local = when.resolve(utc_to_beijing(now))?;
            let utc = beijing_to_utc(local);
            println!("{} {} = {} {}", local, Zone::Beijing, utc, Zone::Utc);
            week_time(Constellation::Gps, utc, leap);
            week_time(Constellation::Bds, utc, leap);
        }
        Command::Homework => homework(leap),
    }
    Ok(())
}

fn week_time(system: Constellation, ts: CivilTimestamp, leap: &dyn LeapSeconds) {
    println!("{}  {} {}", ts, system, system.week_time(ts.mjd(), leap));
}

fn homework(leap: &dyn LeapSeconds) {
    let date = Gregorian(2025, 3, 12);
    let start = CivilTimestamp::new(date, TimeOfDay::default());
    println!("1. MJD and DOY of {}", date);
    println!("   MJD {:.6}", start.mjd());
    println!("   DOY {}", start.doy());

    let base = CivilTimestamp::new(date, TimeOfDay { hour: 8, minute: 18, second: 58.3 });
    let delta = Duration::hms(112, 39, 30.5);
    let sum = base + delta;
    println!("2. {} + {}", base, delta);
    println!("   {}", sum);
    println!("   MJD {:.6}", sum.mjd());

    let local = CivilTimestamp::new(
        Gregorian(2025, 3, 11),
        TimeOfDay { hour: 10, minute: 13, second: 58.8 },
    );
    let utc = beijing_to_utc(local);
    println!("3. {} {} to GPS and BDS time", local, Zone::Beijing);
    println!("   {} {}", utc, Zone::Utc);
    println!("   GPS {}", utc.gps_with(leap));
    println!("   BDS {}", utc.bds_with(leap));
}
