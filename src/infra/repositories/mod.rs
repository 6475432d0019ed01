pub mod sqlite_zone_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_blocked_time_repo;

pub mod postgres_zone_repo;
pub mod postgres_booking_repo;
pub mod postgres_blocked_time_repo;
