use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::models::{News, NewsFilter};
use crate::features::news::repositories::NewsRepository;
use crate::shared::query::WhereClause;

const NEWS_COLUMNS: &str = "id, title, excerpt, content, image, category, author, publish_date, \
     is_published, created_at";

pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn list_query(filter: &NewsFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM news", NEWS_COLUMNS));

    {
        let mut clause = WhereClause::new(&mut builder);

        if let Some(category) = &filter.category {
            clause.and().push("category = ").push_bind(category.clone());
        }
        if let Some(is_published) = filter.is_published {
            clause.and().push("is_published = ").push_bind(is_published);
        }
    }

    builder.push(" ORDER BY publish_date DESC, id ASC");
    builder
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>> {
        let mut query = list_query(filter);
        query
            .build_query_as::<News>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn get(&self, id: i32) -> Result<Option<News>> {
        let query = format!("SELECT {} FROM news WHERE id = $1", NEWS_COLUMNS);
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get news by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn create(&self, input: &CreateNewsDto) -> Result<News> {
        let query = format!(
            r#"
            INSERT INTO news (
                title, excerpt, content, image, category, author,
                publish_date, is_published
            ) VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8)
            RETURNING {}
            "#,
            NEWS_COLUMNS
        );

        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&input.category)
            .bind(&input.author)
            .bind(input.publish_date)
            .bind(input.is_published)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, id: i32, input: &UpdateNewsDto) -> Result<Option<News>> {
        let query = format!(
            r#"
            UPDATE news
            SET title = COALESCE($1, title),
                excerpt = COALESCE($2, excerpt),
                content = COALESCE($3, content),
                image = COALESCE($4, image),
                category = COALESCE($5, category),
                author = COALESCE($6, author),
                publish_date = COALESCE($7, publish_date),
                is_published = COALESCE($8, is_published)
            WHERE id = $9
            RETURNING {}
            "#,
            NEWS_COLUMNS
        );

        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.image)
            .bind(&input.category)
            .bind(&input.author)
            .bind(input.publish_date)
            .bind(input.is_published)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update news: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete news: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_filters_and_order() {
        let query = list_query(&NewsFilter {
            category: Some("Events".to_string()),
            is_published: Some(true),
        });
        assert!(query.sql().ends_with(
            " FROM news WHERE category = $1 AND is_published = $2 \
             ORDER BY publish_date DESC, id ASC"
        ));
    }

    #[test]
    fn test_list_query_without_filters() {
        let query = list_query(&NewsFilter::default());
        assert!(!query.sql().contains("WHERE"));
    }
}
