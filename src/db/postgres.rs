//! Postgres-backed event store
//!
//! Each event is stored as a single JSONB document row, so the roster and all
//! sub-documents are read and written atomically with the event. Listing
//! queries filter on fields inside the document; the persisted status is used
//! as-is (staleness is bounded by the last write, by contract).

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::store::EventStore,
    error::{AppError, AppResult},
    models::Event,
};

/// [`EventStore`] implementation over a Postgres JSONB collection
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn encode(event: &Event) -> AppResult<serde_json::Value> {
        Ok(serde_json::to_value(event)?)
    }

    fn decode(doc: serde_json::Value) -> AppResult<Event> {
        Ok(serde_json::from_value(doc)?)
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, event: &Event) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO events (id, doc) VALUES ($1, $2)"#)
            .bind(event.id)
            .bind(Self::encode(event)?)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>> {
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar(r#"SELECT doc FROM events WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        doc.map(Self::decode).transpose()
    }

    async fn save(&self, event: &Event) -> AppResult<()> {
        let result = sqlx::query(r#"UPDATE events SET doc = $2, updated_at = NOW() WHERE id = $1"#)
            .bind(event.id)
            .bind(Self::encode(event)?)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    async fn list_upcoming(&self, limit: i64) -> AppResult<Vec<Event>> {
        let docs: Vec<serde_json::Value> = sqlx::query_scalar(
            r#"
            SELECT doc FROM events
            WHERE doc->>'status' = 'upcoming'
              AND (doc->>'is_active')::boolean
              AND (doc->>'is_published')::boolean
            ORDER BY (doc->>'date')::timestamptz ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        docs.into_iter().map(Self::decode).collect()
    }

    async fn list_live(&self) -> AppResult<Vec<Event>> {
        let docs: Vec<serde_json::Value> = sqlx::query_scalar(
            r#"
            SELECT doc FROM events
            WHERE doc->>'status' = 'live'
              AND (doc->>'is_active')::boolean
              AND (doc->>'is_published')::boolean
            ORDER BY (doc->>'date')::timestamptz ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        docs.into_iter().map(Self::decode).collect()
    }
}
