//! The half-open overlap predicate and the aggregate availability
//! check run immediately before a booking write. The aggregate is a
//! pre-check: the storage layer's no-overlap constraint is what settles
//! concurrent writers.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::models::{blocked_time::BlockedTime, booking::{self, Booking}};
use super::{blocked, lead_time, times};

/// Half-open interval intersection: intervals that merely touch at an
/// endpoint do not overlap.
pub fn overlaps(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < b_end && b_start < a_end
}

/// Authoritative yes/no consulted before checkout: lead time, blocked
/// windows, then confirmed-booking overlap. Cancelled and pending rows
/// never conflict.
pub fn is_time_slot_available(
    bookings: &[Booking],
    blocks: &[BlockedTime],
    zone_id: &str,
    date: NaiveDate,
    start12: &str,
    duration_hours: f64,
    now: NaiveDateTime,
    lead_hours: i64,
) -> bool {
    if !lead_time::is_booking_time_valid(date, start12, now, lead_hours) {
        return false;
    }
    if blocked::is_blocked(blocks, zone_id, date, start12, duration_hours) {
        return false;
    }

    let start = times::minutes_of_day(start12);
    let end = start + times::duration_minutes(duration_hours);

    !bookings.iter().any(|b| {
        b.zone_id == zone_id
            && b.date == date
            && b.status == booking::STATUS_CONFIRMED
            && overlaps(
                start,
                end,
                times::minute_index(b.start_time),
                times::minute_index(b.end_time),
            )
    })
}
