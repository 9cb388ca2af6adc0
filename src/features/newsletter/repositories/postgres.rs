use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::newsletter::models::NewsletterSubscription;
use crate::features::newsletter::repositories::{NewsletterRepository, DUPLICATE_EMAIL};

const SUBSCRIPTION_COLUMNS: &str = "id, email, is_active, created_at";

pub struct PgNewsletterRepository {
    pool: PgPool,
}

impl PgNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PgNewsletterRepository {
    async fn create(&self, email: &str) -> Result<NewsletterSubscription> {
        let query = format!(
            "INSERT INTO newsletter_subscriptions (email, is_active) VALUES ($1, TRUE) RETURNING {}",
            SUBSCRIPTION_COLUMNS
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, DUPLICATE_EMAIL))
    }

    async fn list(&self) -> Result<Vec<NewsletterSubscription>> {
        let query = format!(
            "SELECT {} FROM newsletter_subscriptions ORDER BY created_at DESC, id DESC",
            SUBSCRIPTION_COLUMNS
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list newsletter subscriptions: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<NewsletterSubscription>> {
        let query = format!(
            "UPDATE newsletter_subscriptions SET is_active = $1 WHERE id = $2 RETURNING {}",
            SUBSCRIPTION_COLUMNS
        );
        sqlx::query_as::<_, NewsletterSubscription>(&query)
            .bind(is_active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update newsletter subscription: {:?}", e);
                AppError::Database(e)
            })
    }
}
