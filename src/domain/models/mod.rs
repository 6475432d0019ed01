pub mod blocked_time;
pub mod booking;
pub mod slot;
pub mod zone;
