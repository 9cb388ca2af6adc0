use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::events::dtos::{CreateEventDto, UpdateEventDto};
use crate::features::events::models::{Event, EventFilter};
use crate::features::events::repositories::EventRepository;
use crate::shared::query::WhereClause;

const EVENT_COLUMNS: &str = "id, title, description, image, start_date, end_date, event_type, \
     location, participating_stores, is_active, created_at";

pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn list_query(filter: &EventFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM events", EVENT_COLUMNS));

    {
        let mut clause = WhereClause::new(&mut builder);

        if let Some(event_type) = &filter.event_type {
            clause
                .and()
                .push("event_type = ")
                .push_bind(event_type.clone());
        }
        if let Some(is_active) = filter.is_active {
            clause.and().push("is_active = ").push_bind(is_active);
        }
        if let Some(from) = filter.start_date {
            clause.and().push("start_date >= ").push_bind(from);
        }
        if let Some(until) = filter.end_date {
            clause.and().push("end_date <= ").push_bind(until);
        }
    }

    builder.push(" ORDER BY start_date DESC, id ASC");
    builder
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let mut query = list_query(filter);
        query
            .build_query_as::<Event>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list events: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get(&self, id: i32) -> Result<Option<Event>> {
        let query = format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS);
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get event by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, input: &CreateEventDto) -> Result<Event> {
        let query = format!(
            r#"
            INSERT INTO events (
                title, description, image, start_date, end_date,
                event_type, location, participating_stores, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        );

        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.event_type)
            .bind(&input.location)
            .bind(&input.participating_stores)
            .bind(input.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create event: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, input: &UpdateEventDto) -> Result<Option<Event>> {
        let query = format!(
            r#"
            UPDATE events
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                image = COALESCE($3, image),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                event_type = COALESCE($6, event_type),
                location = COALESCE($7, location),
                participating_stores = COALESCE($8, participating_stores),
                is_active = COALESCE($9, is_active)
            WHERE id = $10
            RETURNING {}
            "#,
            EVENT_COLUMNS
        );

        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.event_type)
            .bind(&input.location)
            .bind(&input.participating_stores)
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update event: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete event: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
