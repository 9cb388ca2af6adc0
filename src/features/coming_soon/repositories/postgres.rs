use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::coming_soon::dtos::{CreateComingSoonDto, UpdateComingSoonDto};
use crate::features::coming_soon::models::ComingSoonStore;
use crate::features::coming_soon::repositories::ComingSoonRepository;

const COMING_SOON_COLUMNS: &str =
    "id, name, description, image, floor, unit, opening_date, category, created_at";

pub struct PgComingSoonRepository {
    pool: PgPool,
}

impl PgComingSoonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComingSoonRepository for PgComingSoonRepository {
    async fn list(&self) -> Result<Vec<ComingSoonStore>> {
        let query = format!(
            "SELECT {} FROM coming_soon_stores ORDER BY opening_date ASC, id ASC",
            COMING_SOON_COLUMNS
        );
        sqlx::query_as::<_, ComingSoonStore>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list coming soon stores: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get(&self, id: i32) -> Result<Option<ComingSoonStore>> {
        let query = format!(
            "SELECT {} FROM coming_soon_stores WHERE id = $1",
            COMING_SOON_COLUMNS
        );
        sqlx::query_as::<_, ComingSoonStore>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get coming soon store by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, input: &CreateComingSoonDto) -> Result<ComingSoonStore> {
        let query = format!(
            r#"
            INSERT INTO coming_soon_stores (
                name, description, image, floor, unit, opening_date, category
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            COMING_SOON_COLUMNS
        );

        sqlx::query_as::<_, ComingSoonStore>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.floor)
            .bind(&input.unit)
            .bind(input.opening_date)
            .bind(&input.category)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create coming soon store: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateComingSoonDto,
    ) -> Result<Option<ComingSoonStore>> {
        let query = format!(
            r#"
            UPDATE coming_soon_stores
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                image = COALESCE($3, image),
                floor = COALESCE($4, floor),
                unit = COALESCE($5, unit),
                opening_date = COALESCE($6, opening_date),
                category = COALESCE($7, category)
            WHERE id = $8
            RETURNING {}
            "#,
            COMING_SOON_COLUMNS
        );

        sqlx::query_as::<_, ComingSoonStore>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.floor)
            .bind(&input.unit)
            .bind(input.opening_date)
            .bind(&input.category)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update coming soon store: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM coming_soon_stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete coming soon store: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
