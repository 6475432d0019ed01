use facility_booking_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::EmailService,
    error::AppError,
    infra::repositories::{
        sqlite_blocked_time_repo::SqliteBlockedTimeRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_zone_repo::SqliteZoneRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::Router;
use tera::Tera;
use uuid::Uuid;

pub struct MockEmailService;

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, _recipient: &str, _subject: &str, _html_body: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "confirmation.html",
            "<html>Mock Confirmation for {{ customer_name }}</html>",
        ).unwrap();
        let templates = Arc::new(tera);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            min_lead_hours: 4,
            slot_interval_min: 30,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            zone_repo: Arc::new(SqliteZoneRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            blocked_time_repo: Arc::new(SqliteBlockedTimeRepo::new(pool.clone())),
            email_service: Arc::new(MockEmailService),
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
