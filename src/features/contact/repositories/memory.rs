use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::{sort_newest_first, ContactSubmission};
use crate::features::contact::repositories::ContactRepository;
use crate::shared::memory::MemoryTable;

#[derive(Default)]
pub struct MemoryContactRepository {
    table: MemoryTable<ContactSubmission>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn create(&self, input: &CreateContactDto) -> Result<ContactSubmission> {
        let submission = self
            .table
            .insert_with(|id| ContactSubmission {
                id,
                first_name: input.first_name.clone(),
                last_name: input.last_name.clone(),
                email: input.email.clone(),
                subject: input.subject.clone(),
                related_store: input.related_store.clone(),
                message: input.message.clone(),
                is_resolved: false,
                created_at: Utc::now(),
            })
            .await;
        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>> {
        let mut submissions = self.table.select(|_| true).await;
        sort_newest_first(&mut submissions);
        Ok(submissions)
    }

    async fn set_resolved(&self, id: i32, is_resolved: bool) -> Result<Option<ContactSubmission>> {
        Ok(self
            .table
            .update_with(id, |submission| submission.is_resolved = is_resolved)
            .await)
    }
}
