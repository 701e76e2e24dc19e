// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply embedded migrations (events table + date index)
    pub async fn migrate(&self) -> Result<()> {
        tracing::debug!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Events (calendar entries, keyed by date)
    // ============================================

    pub async fn insert_event(&self, input: CreateEventRow) -> Result<EventRow> {
        // UUID v7 ids sort by creation time, giving the table a stable
        // insertion order without a sequence
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, date, holiday_type, day, extra)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, date, holiday_type, day, extra, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.date)
        .bind(&input.holiday_type)
        .bind(&input.day)
        .bind(&input.extra)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Oldest event with exactly this date, if any. Date matching is
    /// case-sensitive with no normalization.
    pub async fn find_event_by_date(&self, date: &str) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, date, holiday_type, day, extra, created_at
            FROM events
            WHERE date = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, date, holiday_type, day, extra, created_at
            FROM events
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Remove the oldest event with this date. Returns false when no row
    /// matched.
    pub async fn delete_event_by_date(&self, date: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = (
                SELECT id FROM events
                WHERE date = $1
                ORDER BY id ASC
                LIMIT 1
            )
            "#,
        )
        .bind(date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
