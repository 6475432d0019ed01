use serde::Serialize;
use super::booking::Booking;

/// Terminal classification of one (zone, date, time) cell on the grid.
/// Never persisted; recomputed per query. Unavailability is data, not
/// an error.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotStatus {
    PastDate,
    WalkIn,
    Unavailable { reason: UnavailableReason },
    Blocked { reason: String },
    Booked { booking: Booking },
    InvalidDuration,
    Available,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    BeforeOpen,
    PastClose,
    LeadTime,
    Conflict,
}
