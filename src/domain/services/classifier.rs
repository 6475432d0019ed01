//! Slot state machine. The checks run in a fixed priority order and the
//! first hit wins; UI messaging differs per state, so the order is part
//! of the contract (a slot that is both past lead time and blocked
//! reports the lead-time violation).

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::models::{
    blocked_time::BlockedTime,
    booking::{self, Booking},
    slot::{SlotStatus, UnavailableReason},
    zone::Zone,
};
use super::{availability, blocked, lead_time, times};

pub fn classify_slot(
    zone: &Zone,
    date: NaiveDate,
    time12: &str,
    duration_hours: f64,
    bookings: &[Booking],
    blocks: &[BlockedTime],
    now: NaiveDateTime,
    lead_hours: i64,
) -> SlotStatus {
    if date < now.date() {
        return SlotStatus::PastDate;
    }
    if zone.is_walk_in {
        return SlotStatus::WalkIn;
    }

    let start = times::minutes_of_day(time12);
    let end = start + times::duration_minutes(duration_hours);

    if start < times::minute_index(zone.available_start) {
        return SlotStatus::Unavailable { reason: UnavailableReason::BeforeOpen };
    }
    if end > times::minute_index(zone.available_end) {
        return SlotStatus::Unavailable { reason: UnavailableReason::PastClose };
    }
    if !lead_time::is_booking_time_valid(date, time12, now, lead_hours) {
        return SlotStatus::Unavailable { reason: UnavailableReason::LeadTime };
    }
    if let Some(block) = blocked::find_blocking(blocks, &zone.id, date, time12, duration_hours) {
        return SlotStatus::Blocked { reason: block.reason.clone() };
    }

    let confirmed_here = |b: &&Booking| {
        b.zone_id == zone.id && b.date == date && b.status == booking::STATUS_CONFIRMED
    };

    // A booking whose [start, end) contains this slot's start minute
    // marks the cell itself as taken.
    if let Some(hit) = bookings.iter().filter(confirmed_here).find(|b| {
        let b_start = times::minute_index(b.start_time);
        let b_end = times::minute_index(b.end_time);
        b_start <= start && start < b_end
    }) {
        return SlotStatus::Booked { booking: hit.clone() };
    }

    if duration_hours < zone.min_duration || duration_hours > zone.max_duration {
        return SlotStatus::InvalidDuration;
    }

    // The start minute is free but the requested duration runs into a
    // later booking.
    if bookings.iter().filter(confirmed_here).any(|b| {
        availability::overlaps(
            start,
            end,
            times::minute_index(b.start_time),
            times::minute_index(b.end_time),
        )
    }) {
        return SlotStatus::Unavailable { reason: UnavailableReason::Conflict };
    }

    SlotStatus::Available
}
