use crate::domain::{models::blocked_time::BlockedTime, ports::BlockedTimeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBlockedTimeRepo {
    pool: PgPool,
}

impl PostgresBlockedTimeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockedTimeRepository for PostgresBlockedTimeRepo {
    async fn create(&self, block: &BlockedTime) -> Result<BlockedTime, AppError> {
        sqlx::query_as::<_, BlockedTime>(
            "INSERT INTO blocked_times (id, zone_id, day_of_week, start_time, end_time, reason, active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&block.id).bind(&block.zone_id).bind(block.day_of_week)
            .bind(block.start_time).bind(block.end_time).bind(&block.reason)
            .bind(block.active).bind(block.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlockedTime>, AppError> {
        sqlx::query_as::<_, BlockedTime>("SELECT * FROM blocked_times WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<BlockedTime>, AppError> {
        sqlx::query_as::<_, BlockedTime>("SELECT * FROM blocked_times ORDER BY day_of_week ASC, start_time ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active_for_day(&self, zone_id: &str, day_of_week: i32) -> Result<Vec<BlockedTime>, AppError> {
        sqlx::query_as::<_, BlockedTime>(
            "SELECT * FROM blocked_times
             WHERE active = TRUE AND day_of_week = $1 AND (zone_id IS NULL OR zone_id = $2)"
        )
            .bind(day_of_week).bind(zone_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, block: &BlockedTime) -> Result<BlockedTime, AppError> {
        sqlx::query_as::<_, BlockedTime>(
            "UPDATE blocked_times SET zone_id=$1, day_of_week=$2, start_time=$3, end_time=$4, reason=$5, active=$6
             WHERE id=$7
             RETURNING *"
        )
            .bind(&block.zone_id).bind(block.day_of_week)
            .bind(block.start_time).bind(block.end_time).bind(&block.reason)
            .bind(block.active).bind(&block.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blocked_times WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blocked time not found".into()));
        }
        Ok(())
    }
}
