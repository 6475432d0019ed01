use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub mail_service_url: String,
    pub mail_service_token: String,
    /// Minimum advance notice between "now" and a bookable start instant.
    pub min_lead_hours: i64,
    /// Width of one cell on the booking grid, in minutes.
    pub slot_interval_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            mail_service_url: env::var("MAIL_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/send".to_string()),
            mail_service_token: env::var("MAIL_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            min_lead_hours: env::var("MIN_LEAD_HOURS").unwrap_or_else(|_| "4".to_string()).parse().expect("MIN_LEAD_HOURS must be a number"),
            slot_interval_min: env::var("SLOT_INTERVAL_MIN").unwrap_or_else(|_| "30".to_string()).parse().expect("SLOT_INTERVAL_MIN must be a number"),
        }
    }
}
