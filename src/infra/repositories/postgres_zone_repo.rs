use crate::domain::{models::zone::Zone, ports::ZoneRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresZoneRepo {
    pool: PgPool,
}

impl PostgresZoneRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneRepository for PostgresZoneRepo {
    async fn create(&self, zone: &Zone) -> Result<Zone, AppError> {
        sqlx::query_as::<_, Zone>(
            "INSERT INTO zones (id, name, description, hourly_rate, min_duration, max_duration, available_start, available_end, active, is_walk_in, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *"
        )
            .bind(&zone.id).bind(&zone.name).bind(&zone.description)
            .bind(zone.hourly_rate).bind(zone.min_duration).bind(zone.max_duration)
            .bind(zone.available_start).bind(zone.available_end)
            .bind(zone.active).bind(zone.is_walk_in).bind(zone.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Zone>, AppError> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Zone>, AppError> {
        sqlx::query_as::<_, Zone>("SELECT * FROM zones ORDER BY name ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, zone: &Zone) -> Result<Zone, AppError> {
        sqlx::query_as::<_, Zone>(
            "UPDATE zones SET name=$1, description=$2, hourly_rate=$3, min_duration=$4, max_duration=$5, available_start=$6, available_end=$7, active=$8, is_walk_in=$9
             WHERE id=$10
             RETURNING *"
        )
            .bind(&zone.name).bind(&zone.description)
            .bind(zone.hourly_rate).bind(zone.min_duration).bind(zone.max_duration)
            .bind(zone.available_start).bind(zone.available_end)
            .bind(zone.active).bind(zone.is_walk_in)
            .bind(&zone.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn deactivate(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE zones SET active = FALSE WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Zone not found".into()));
        }
        Ok(())
    }
}
