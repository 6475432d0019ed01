pub mod availability;
pub mod blocked;
pub mod classifier;
pub mod lead_time;
pub mod times;
