use crate::domain::models::{blocked_time::BlockedTime, booking::Booking, zone::Zone};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn create(&self, zone: &Zone) -> Result<Zone, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Zone>, AppError>;
    async fn list(&self) -> Result<Vec<Zone>, AppError>;
    async fn update(&self, zone: &Zone) -> Result<Zone, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert honoring the storage-level no-overlap guarantee for
    /// CONFIRMED rows; a lost race surfaces as `AppError::Conflict` or
    /// a constraint-violation database error, never a silent success.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Booking>, AppError>;
    async fn list_confirmed_for_day(&self, zone_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    async fn list_by_zone(&self, zone_id: &str, date: Option<NaiveDate>) -> Result<Vec<Booking>, AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn cancel(&self, id: &str) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait BlockedTimeRepository: Send + Sync {
    async fn create(&self, block: &BlockedTime) -> Result<BlockedTime, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<BlockedTime>, AppError>;
    async fn list(&self) -> Result<Vec<BlockedTime>, AppError>;
    /// Active blocks for one weekday, zone-specific or global.
    async fn list_active_for_day(&self, zone_id: &str, day_of_week: i32) -> Result<Vec<BlockedTime>, AppError>;
    async fn update(&self, block: &BlockedTime) -> Result<BlockedTime, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str) -> Result<(), AppError>;
}
