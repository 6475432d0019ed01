//! Minimum-notice policy. Every function takes an explicit `now` so the
//! policy is deterministic under test; the facility default lives in
//! `Config::min_lead_hours`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::times;

pub const DEFAULT_MIN_LEAD_HOURS: i64 = 4;

/// True iff the candidate start instant is at least `lead_hours` ahead
/// of `now`. Compares absolute date+time instants, never dates alone.
pub fn is_booking_time_valid(
    date: NaiveDate,
    time12: &str,
    now: NaiveDateTime,
    lead_hours: i64,
) -> bool {
    let start = date.and_time(times::parse_time(time12));
    start >= now + Duration::hours(lead_hours)
}

/// Earliest bookable start on `date`, or `None` when the date is not
/// "today" (future dates carry no extra restriction) or nothing on the
/// grid remains before `close`.
///
/// Rounding is deliberately asymmetric: minutes past the hour <= 30
/// snap to `:30` of the same hour, anything later rolls to `:00` of the
/// next hour. Changing this silently changes the effective lead time.
pub fn minimum_bookable_time(
    date: NaiveDate,
    now: NaiveDateTime,
    lead_hours: i64,
    close: NaiveTime,
) -> Option<String> {
    if date != now.date() {
        return None;
    }

    let earliest = now + Duration::hours(lead_hours);
    if earliest.date() != date {
        return None;
    }

    let minute = if earliest.minute() <= 30 {
        earliest.hour() as i64 * 60 + 30
    } else {
        (earliest.hour() as i64 + 1) * 60
    };

    if minute >= times::minute_index(close) {
        return None;
    }

    Some(times::format_12(minute))
}
