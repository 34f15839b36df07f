// parse time-of-day and date text

use crate::date::*;
use crate::timestamp::*;

use nom::character::complete::*;
use nom::combinator::*;
use nom::number::complete::double;
use nom::sequence::*;
use std::str::FromStr;

type IResult<'a, O> = nom::IResult<&'a str, O, nom::error::Error<&'a str>>;

fn int<'a>(input: &'a str) -> IResult<'a, i32> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), i32::from_str)(input)
}

// an integer clock field, kept as f64 so a huge value is a range error
fn whole<'a>(input: &'a str) -> IResult<'a, f64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), f64::from_str)(input)
}

fn field<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<'a, O>
where
    F: FnMut(&'a str) -> IResult<'a, O>,
{
    delimited(space0, inner, space0)
}

// HH:MM or HH:MM:SS.sss
fn hms<'a>(input: &'a str) -> IResult<'a, (f64, f64, Option<f64>)> {
    tuple((
        field(whole),
        preceded(char(':'), field(whole)),
        opt(preceded(char(':'), field(double))),
    ))(input)
}

fn ymd<'a>(input: &'a str) -> IResult<'a, Gregorian> {
    map(
        tuple((int, preceded(char('-'), int), preceded(char('-'), int))),
        |(y, m, d)| Gregorian(y, m, d),
    )(input)
}

/// Parse `HH:MM` or `HH:MM:SS.sss`.
///
/// Hour and minute are integers and the second may have a fraction.
/// A result is only returned when every field is in range.
pub fn parse_time_of_day(text: &str) -> Result<TimeOfDay> {
    let (hour, minute, second) = match all_consuming(hms)(text) {
        Ok((_, fields)) => fields,
        Err(_) => return Err(Error::Format(text.to_owned())),
    };
    let second = second.unwrap_or(0.0);
    if !(0.0..24.0).contains(&hour) {
        return Err(Error::Range("hour", hour));
    }
    if !(0.0..60.0).contains(&minute) {
        return Err(Error::Range("minute", minute));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(Error::Range("second", second));
    }
    Ok(TimeOfDay { hour: hour as i32, minute: minute as i32, second })
}

/// Parse a `YYYY-MM-DD` date, which must exist in the calendar.
pub fn parse_date(text: &str) -> Result<Gregorian> {
    match all_consuming(ymd)(text.trim()) {
        Ok((_, date)) if date.is_valid() => Ok(date),
        _ => Err(Error::Date(text.to_owned())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        for &(text, hour, minute, second) in &[
            ("12:30", 12, 30, 0.0),
            ("00:00:00", 0, 0, 0.0),
            ("22:10:32.126", 22, 10, 32.126),
            ("23:59:59.999", 23, 59, 59.999),
            ("8:5:7", 8, 5, 7.0),
            (" 08 : 05 : 07.5 ", 8, 5, 7.5),
            ("10:13:58.8", 10, 13, 58.8),
        ] {
            let time = parse_time_of_day(text).unwrap();
            assert_eq!(TimeOfDay { hour, minute, second }, time, "{:?}", text);
        }
    }

    #[test]
    fn format_errors() {
        for &text in &[
            "", "12", "1:2:3:4", "12:30:", "ab:cd", "12:3x", "12.5:30", "12:30:abc", ":30",
            "12::30", "12:30:nan", "12:30:inf",
        ] {
            match parse_time_of_day(text) {
                Err(Error::Format(_)) => (),
                other => panic!("{:?} gave {:?}", text, other),
            }
        }
    }

    #[test]
    fn range_errors() {
        for &(text, what) in &[
            ("12:60:00", "minute"),
            ("24:00", "hour"),
            ("-1:00", "hour"),
            ("12:-5", "minute"),
            ("12:30:60", "second"),
            ("12:30:-0.5", "second"),
            ("12:30:1e3", "second"),
            ("99999999999:00", "hour"),
            ("12:99999999999", "minute"),
        ] {
            match parse_time_of_day(text) {
                Err(Error::Range(field, _)) => assert_eq!(what, field, "{:?}", text),
                other => panic!("{:?} gave {:?}", text, other),
            }
        }
    }

    #[test]
    fn dates() {
        assert_eq!(Ok(Gregorian(2025, 3, 12)), parse_date("2025-03-12"));
        assert_eq!(Ok(Gregorian(2024, 2, 29)), parse_date(" 2024-2-29 "));
        for &text in &["2023-02-29", "2025-13-01", "2025-04-31", "2025-00-10", "2025/03/12", "2025-03"] {
            assert_eq!(Err(Error::Date(text.to_owned())), parse_date(text));
        }
    }
}
