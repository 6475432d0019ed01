//! Recurring blocked-time resolution. Blocks recur weekly forever; a
//! block applies to a date when its weekday matches and it is either
//! global (`zone_id = None`) or tied to the queried zone. Overlapping
//! blocks are kept as a set, never merged.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::blocked_time::BlockedTime;
use super::{availability, times};

/// 0 = Sunday .. 6 = Saturday, matching the stored `day_of_week`.
pub fn day_of_week(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

pub fn blocked_times_for<'a>(
    blocks: &'a [BlockedTime],
    zone_id: &str,
    date: NaiveDate,
) -> Vec<&'a BlockedTime> {
    let day = day_of_week(date);
    blocks
        .iter()
        .filter(|b| b.active && b.day_of_week == day)
        .filter(|b| b.zone_id.as_deref().is_none_or(|z| z == zone_id))
        .collect()
}

/// First block whose `[start, end)` intersects the candidate interval,
/// carrying its reason for the UI.
pub fn find_blocking<'a>(
    blocks: &'a [BlockedTime],
    zone_id: &str,
    date: NaiveDate,
    start12: &str,
    duration_hours: f64,
) -> Option<&'a BlockedTime> {
    let start = times::minutes_of_day(start12);
    let end = start + times::duration_minutes(duration_hours);
    blocked_times_for(blocks, zone_id, date).into_iter().find(|b| {
        availability::overlaps(
            start,
            end,
            times::minute_index(b.start_time),
            times::minute_index(b.end_time),
        )
    })
}

pub fn is_blocked(
    blocks: &[BlockedTime],
    zone_id: &str,
    date: NaiveDate,
    start12: &str,
    duration_hours: f64,
) -> bool {
    find_blocking(blocks, zone_id, date, start12, duration_hours).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn block(zone_id: Option<&str>, day: i32, start: &str, end: &str, active: bool) -> BlockedTime {
        BlockedTime {
            id: format!("block-{day}-{start}"),
            zone_id: zone_id.map(str::to_string),
            day_of_week: day,
            start_time: times::parse_time(start),
            end_time: times::parse_time(end),
            reason: "Maintenance".to_string(),
            active,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    fn friday() -> NaiveDate {
        // 2025-06-06 is a Friday
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
    }

    #[test]
    fn test_day_of_week_is_sunday_based() {
        assert_eq!(day_of_week(friday()), 5);
        assert_eq!(day_of_week(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()), 0);
    }

    #[test]
    fn test_global_and_zone_blocks_resolve() {
        let blocks = vec![
            block(None, 5, "12:00", "15:00", true),
            block(Some("pool"), 5, "08:00", "09:00", true),
            block(Some("court"), 5, "08:00", "09:00", true),
            block(Some("pool"), 3, "08:00", "09:00", true),
            block(Some("pool"), 5, "18:00", "19:00", false),
        ];

        let resolved = blocked_times_for(&blocks, "pool", friday());
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|b| b.day_of_week == 5));
        assert!(resolved.iter().all(|b| b.zone_id.as_deref() != Some("court")));
    }

    #[test]
    fn test_is_blocked_half_open() {
        let blocks = vec![block(None, 5, "12:00", "15:00", true)];

        assert!(is_blocked(&blocks, "pool", friday(), "1:00 PM", 1.0));
        assert!(is_blocked(&blocks, "pool", friday(), "11:30 AM", 1.0));
        // touching endpoints do not overlap
        assert!(!is_blocked(&blocks, "pool", friday(), "3:00 PM", 1.0));
        assert!(!is_blocked(&blocks, "pool", friday(), "11:00 AM", 1.0));
        // same time on a Thursday is free
        let thursday = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert!(!is_blocked(&blocks, "pool", thursday, "1:00 PM", 1.0));
    }

    #[test]
    fn test_blocking_reason_is_surfaced() {
        let blocks = vec![block(None, 5, "12:00", "15:00", true)];
        let hit = find_blocking(&blocks, "court", friday(), "2:30 PM", 1.0).unwrap();
        assert_eq!(hit.reason, "Maintenance");
    }
}
