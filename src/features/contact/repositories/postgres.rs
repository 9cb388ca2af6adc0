use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::ContactSubmission;
use crate::features::contact::repositories::ContactRepository;

const CONTACT_COLUMNS: &str = "id, first_name, last_name, email, subject, related_store, \
     message, is_resolved, created_at";

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, input: &CreateContactDto) -> Result<ContactSubmission> {
        let query = format!(
            r#"
            INSERT INTO contact_submissions (
                first_name, last_name, email, subject, related_store, message, is_resolved
            ) VALUES ($1, $2, $3, $4, $5, $6, FALSE)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        );

        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.related_store)
            .bind(&input.message)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create contact submission: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>> {
        let query = format!(
            "SELECT {} FROM contact_submissions ORDER BY created_at DESC, id DESC",
            CONTACT_COLUMNS
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list contact submissions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn set_resolved(&self, id: i32, is_resolved: bool) -> Result<Option<ContactSubmission>> {
        let query = format!(
            "UPDATE contact_submissions SET is_resolved = $1 WHERE id = $2 RETURNING {}",
            CONTACT_COLUMNS
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(is_resolved)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update contact submission: {:?}", e);
                AppError::Database(e)
            })
    }
}
