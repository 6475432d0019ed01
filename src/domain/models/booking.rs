use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_CANCELLED: &str = "CANCELLED";
pub const STATUS_PENDING: &str = "PENDING";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub zone_id: String,
    pub date: NaiveDate,
    /// Occupied interval is `[start_time, end_time)`.
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_note: Option<String>,
    /// Opaque reference handed over by the payment collaborator.
    pub payment_reference: Option<String>,
    pub status: String,
    pub management_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub zone_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub name: String,
    pub email: String,
    pub note: Option<String>,
    pub payment_reference: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let minutes = (params.duration_hours * 60.0).round() as i64;
        let end_time = params.start_time + chrono::Duration::minutes(minutes);
        // NaiveTime addition wraps at midnight, which would invert the
        // [start, end) interval. Callers must keep bookings inside one day.
        debug_assert!(
            end_time > params.start_time,
            "booking interval wraps past midnight: {} + {}min",
            params.start_time,
            minutes
        );

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            zone_id: params.zone_id,
            date: params.date,
            start_time: params.start_time,
            end_time,
            duration_hours: params.duration_hours,
            customer_name: params.name,
            customer_email: params.email,
            customer_note: params.note,
            payment_reference: params.payment_reference,
            status: STATUS_CONFIRMED.to_string(),
            management_token: token,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn params(start: &str, hours: f64) -> NewBookingParams {
        NewBookingParams {
            zone_id: "pool".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            duration_hours: hours,
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            note: None,
            payment_reference: None,
        }
    }

    #[test]
    fn test_end_time_follows_duration() {
        let booking = Booking::new(params("10:00", 1.5));
        assert_eq!(booking.end_time, NaiveTime::parse_from_str("11:30", "%H:%M").unwrap());
        assert_eq!(booking.status, STATUS_CONFIRMED);
        assert_eq!(booking.management_token.len(), 48);
    }

    #[test]
    #[should_panic(expected = "wraps past midnight")]
    fn test_interval_may_not_wrap_past_midnight() {
        let _ = Booking::new(params("23:00", 2.0));
    }
}
