pub mod date;
pub mod duration;
pub mod epoch;
pub mod julian;
pub mod parse;
pub mod timestamp;
pub mod zone;

pub use crate::duration::{add_duration, try_add_duration, Duration};
pub use crate::epoch::{to_bds, to_gps, WeekTime};
pub use crate::julian::{to_doy, to_mjd};
pub use crate::parse::{parse_date, parse_time_of_day};
pub use crate::timestamp::*;
