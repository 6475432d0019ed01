use std::sync::Arc;
use crate::domain::ports::{BlockedTimeRepository, BookingRepository, EmailService, ZoneRepository};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub zone_repo: Arc<dyn ZoneRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub blocked_time_repo: Arc<dyn BlockedTimeRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub templates: Arc<Tera>,
}
