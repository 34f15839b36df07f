#![no_main]
use gnsstime::date::*;
use gnsstime::*;
use libfuzzer_sys::fuzz_target;
use std::convert::TryInto;

fn fuzz_parse(data: &[u8]) {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    match parse_time_of_day(text) {
        Ok(time) => {
            assert!((0..24).contains(&time.hour), "{:?}", text);
            assert!((0..60).contains(&time.minute), "{:?}", text);
            assert!((0.0..60.0).contains(&time.second), "{:?}", text);
        }
        Err(Error::Format(_)) => (),
        Err(Error::Range(..)) => (),
        Err(err) => panic!("{:?} gave {}", text, err),
    }
    if let Ok(date) = parse_date(text) {
        assert!(date.is_valid(), "{:?}", text);
    }
}

// small signed deltas from a valid base always land on a valid timestamp
fn fuzz_add(data: &[u8]) {
    let bytes: [u8; 12] = match data.get(..12).and_then(|d| d.try_into().ok()) {
        Some(bytes) => bytes,
        None => return,
    };
    let mjd = Gregorian(1900, 3, 1).mjd() + i32::from(u16::from_le_bytes([bytes[0], bytes[1]]));
    let date = Gregorian::from(mjd);
    let time = TimeOfDay {
        hour: i32::from(bytes[2] % 24),
        minute: i32::from(bytes[3] % 60),
        second: f64::from(bytes[4] % 60) + f64::from(bytes[5]) / 256.0,
    };
    let base = CivilTimestamp::new(date, time);
    let small = |b: u8| i32::from(b as i8);
    let delta = Duration {
        years: small(bytes[6]),
        months: small(bytes[7]),
        days: small(bytes[8]),
        hours: small(bytes[9]),
        minutes: small(bytes[10]),
        seconds: f64::from(small(bytes[11])) * 1.5,
    };
    let sum = add_duration(base, delta);
    assert!((1..=12).contains(&sum.month), "{} + {} = {}", base, delta, sum);
    assert!(sum.day >= 1 && sum.day <= 31, "{} + {} = {}", base, delta, sum);
    assert!((0..24).contains(&sum.hour), "{} + {} = {}", base, delta, sum);
    assert!((0..60).contains(&sum.minute), "{} + {} = {}", base, delta, sum);
    assert!((0.0..60.0).contains(&sum.second), "{} + {} = {}", base, delta, sum);
    if delta.years == 0 {
        assert!(sum.date().is_valid(), "{} + {} = {}", base, delta, sum);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 1 {
        return;
    }
    let rest = &data[1..];
    match data[0] {
        0 => fuzz_parse(rest),
        1 => fuzz_add(rest),
        _ => (),
    }
});
