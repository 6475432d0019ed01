//! Clock-face arithmetic for the booking grid. All functions work on
//! plain wall-clock times within a single day; intervals are half-open
//! `[start, end)` throughout.

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;

/// Parses `HH:mm`, `HH:mm:ss` or `h:mm AM/PM`. Malformed input is a
/// programmer error, not user input, at this layer.
pub fn parse_time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .or_else(|_| NaiveTime::parse_from_str(value, "%I:%M %p"))
        .unwrap_or_else(|_| panic!("malformed time string: {value}"))
}

/// `h:mm AM/PM` with no leading zero on the hour.
pub fn format_12(minute_of_day: i64) -> String {
    let wrapped = minute_of_day.rem_euclid(MINUTES_PER_DAY);
    let time = NaiveTime::from_hms_opt((wrapped / 60) as u32, (wrapped % 60) as u32, 0)
        .unwrap_or_else(|| panic!("minute index out of range: {minute_of_day}"));
    time.format("%-I:%M %p").to_string()
}

/// `12 AM -> 00`, `12 PM -> 12`, everything else positional.
pub fn to_24_hour(time12: &str) -> String {
    parse_time(time12).format("%H:%M").to_string()
}

pub fn to_12_hour(time24: &str) -> String {
    let t = parse_time(time24);
    format_12((t.hour() * 60 + t.minute()) as i64)
}

/// Minute index within the day: `hour * 60 + minute`, domain `[0, 1440)`.
pub fn minutes_of_day(time: &str) -> i64 {
    minute_index(parse_time(time))
}

pub fn minute_index(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}

pub fn duration_minutes(duration_hours: f64) -> i64 {
    (duration_hours * 60.0).round() as i64
}

/// Adds `duration_hours` (fractional, half-hour steps) to a 12-hour
/// start time. Wraps modularly past midnight.
pub fn end_time(start12: &str, duration_hours: f64) -> String {
    format_12(minutes_of_day(start12) + duration_minutes(duration_hours))
}

/// The 12-hour grid between `start` and `end`, half-open: the slot equal
/// to `end` is excluded.
pub fn generate_slots(start: &str, end: &str, step_minutes: i64) -> Vec<String> {
    let end_min = minutes_of_day(end);
    let mut slots = Vec::new();
    let mut cursor = minutes_of_day(start);
    while cursor < end_min {
        slots.push(format_12(cursor));
        cursor += step_minutes;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_and_noon_normalization() {
        assert_eq!(to_24_hour("12:00 AM"), "00:00");
        assert_eq!(to_24_hour("12:30 AM"), "00:30");
        assert_eq!(to_24_hour("12:00 PM"), "12:00");
        assert_eq!(to_24_hour("12:30 PM"), "12:30");
        assert_eq!(to_24_hour("1:00 PM"), "13:00");
        assert_eq!(to_24_hour("9:30 AM"), "09:30");
    }

    #[test]
    fn test_to_12_hour_has_no_leading_zero() {
        assert_eq!(to_12_hour("09:00"), "9:00 AM");
        assert_eq!(to_12_hour("00:30"), "12:30 AM");
        assert_eq!(to_12_hour("12:00"), "12:00 PM");
        assert_eq!(to_12_hour("21:00:00"), "9:00 PM");
    }

    #[test]
    fn test_round_trip_over_full_grid() {
        for minute in (0..MINUTES_PER_DAY).step_by(30) {
            let t24 = format!("{:02}:{:02}", minute / 60, minute % 60);
            assert_eq!(to_24_hour(&to_12_hour(&t24)), t24);
        }
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day("00:00"), 0);
        assert_eq!(minutes_of_day("07:00"), 420);
        assert_eq!(minutes_of_day("23:30:00"), 1410);
        assert_eq!(minutes_of_day("2:00 PM"), 840);
    }

    #[test]
    fn test_end_time_fractional_durations() {
        assert_eq!(end_time("3:00 PM", 1.0), "4:00 PM");
        assert_eq!(end_time("3:00 PM", 1.5), "4:30 PM");
        assert_eq!(end_time("11:30 AM", 0.5), "12:00 PM");
        assert_eq!(end_time("11:00 PM", 2.0), "1:00 AM");
    }

    #[test]
    fn test_generate_slots_is_half_open() {
        let slots = generate_slots("07:00", "09:00", 30);
        assert_eq!(slots, vec!["7:00 AM", "7:30 AM", "8:00 AM", "8:30 AM"]);

        let empty = generate_slots("09:00", "09:00", 30);
        assert!(empty.is_empty());
    }
}
