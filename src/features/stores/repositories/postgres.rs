use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::stores::dtos::{CreateStoreDto, UpdateStoreDto};
use crate::features::stores::models::{Store, StoreFilter};
use crate::features::stores::repositories::StoreRepository;
use crate::shared::query::{like_pattern, WhereClause};

const STORE_COLUMNS: &str = "id, name, category, subcategory, floor, unit, hours, description, \
     image, phone, website, is_open, created_at";

/// PostgreSQL-backed store repository
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the listing query. Only criteria that are set produce a predicate.
fn list_query(filter: &StoreFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM stores", STORE_COLUMNS));

    {
        let mut clause = WhereClause::new(&mut builder);

        if let Some(category) = &filter.category {
            clause.and().push("category = ").push_bind(category.clone());
        }
        if let Some(subcategory) = &filter.subcategory {
            clause
                .and()
                .push("subcategory = ")
                .push_bind(subcategory.clone());
        }
        if let Some(floor) = &filter.floor {
            clause.and().push("floor = ").push_bind(floor.clone());
        }
        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            clause
                .and()
                .push("(name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR category ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(is_open) = filter.is_open {
            clause.and().push("is_open = ").push_bind(is_open);
        }
    }

    builder.push(r#" ORDER BY name COLLATE "C" ASC, id ASC"#);
    builder
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>> {
        let mut query = list_query(filter);
        query
            .build_query_as::<Store>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list stores: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get(&self, id: i32) -> Result<Option<Store>> {
        let query = format!("SELECT {} FROM stores WHERE id = $1", STORE_COLUMNS);
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get store by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, input: &CreateStoreDto) -> Result<Store> {
        let query = format!(
            r#"
            INSERT INTO stores (
                name, category, subcategory, floor, unit, hours,
                description, image, phone, website, is_open
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            STORE_COLUMNS
        );

        sqlx::query_as::<_, Store>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.floor)
            .bind(&input.unit)
            .bind(&input.hours)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(input.is_open)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create store: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, input: &UpdateStoreDto) -> Result<Option<Store>> {
        let query = format!(
            r#"
            UPDATE stores
            SET name = COALESCE($1, name),
                category = COALESCE($2, category),
                subcategory = COALESCE($3, subcategory),
                floor = COALESCE($4, floor),
                unit = COALESCE($5, unit),
                hours = COALESCE($6, hours),
                description = COALESCE($7, description),
                image = COALESCE($8, image),
                phone = COALESCE($9, phone),
                website = COALESCE($10, website),
                is_open = COALESCE($11, is_open)
            WHERE id = $12
            RETURNING {}
            "#,
            STORE_COLUMNS
        );

        sqlx::query_as::<_, Store>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.floor)
            .bind(&input.unit)
            .bind(&input.hours)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(input.is_open)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update store: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete store: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECT: &str = "SELECT id, name, category, subcategory, floor, unit, hours, \
         description, image, phone, website, is_open, created_at FROM stores";
    const ORDER: &str = r#" ORDER BY name COLLATE "C" ASC, id ASC"#;

    #[test]
    fn test_list_query_without_filters_has_no_where() {
        let query = list_query(&StoreFilter::default());
        assert_eq!(query.sql(), format!("{}{}", SELECT, ORDER));
    }

    #[test]
    fn test_list_query_binds_only_supplied_criteria() {
        let filter = StoreFilter {
            category: Some("Fashion & Apparel".to_string()),
            is_open: Some(false),
            ..Default::default()
        };
        let query = list_query(&filter);
        assert_eq!(
            query.sql(),
            format!(
                "{} WHERE category = $1 AND is_open = $2{}",
                SELECT, ORDER
            )
        );
    }

    #[test]
    fn test_list_query_search_is_or_of_three_columns() {
        let filter = StoreFilter {
            floor: Some("Ground Floor".to_string()),
            search: Some("zara".to_string()),
            ..Default::default()
        };
        let query = list_query(&filter);
        assert_eq!(
            query.sql(),
            format!(
                "{} WHERE floor = $1 AND (name ILIKE $2 OR description ILIKE $3 \
                 OR category ILIKE $4){}",
                SELECT, ORDER
            )
        );
    }
}
