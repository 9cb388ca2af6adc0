use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::newsletter::models::{sort_newest_first, NewsletterSubscription};
use crate::features::newsletter::repositories::{NewsletterRepository, DUPLICATE_EMAIL};
use crate::shared::memory::MemoryTable;

#[derive(Default)]
pub struct MemoryNewsletterRepository {
    table: MemoryTable<NewsletterSubscription>,
}

impl MemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsletterRepository for MemoryNewsletterRepository {
    async fn create(&self, email: &str) -> Result<NewsletterSubscription> {
        self.table
            .insert_unique_with(
                |existing| existing.email == email,
                |id| NewsletterSubscription {
                    id,
                    email: email.to_string(),
                    is_active: true,
                    created_at: Utc::now(),
                },
            )
            .await
            .ok_or_else(|| AppError::Conflict(DUPLICATE_EMAIL.to_string()))
    }

    async fn list(&self) -> Result<Vec<NewsletterSubscription>> {
        let mut subscriptions = self.table.select(|_| true).await;
        sort_newest_first(&mut subscriptions);
        Ok(subscriptions)
    }

    async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<NewsletterSubscription>> {
        Ok(self
            .table
            .update_with(id, |subscription| subscription.is_active = is_active)
            .await)
    }
}
