use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{ContactResponseDto, CreateContactDto, UpdateContactDto};
use crate::features::contact::repositories::ContactRepository;

/// Service for contact form submissions
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit(&self, dto: CreateContactDto) -> Result<ContactResponseDto> {
        let submission = self.repository.create(&dto).await?;

        tracing::info!(
            "Contact submission received: id={}, subject={}",
            submission.id,
            submission.subject
        );

        Ok(submission.into())
    }

    pub async fn list(&self) -> Result<Vec<ContactResponseDto>> {
        let submissions = self.repository.list().await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i32, dto: UpdateContactDto) -> Result<ContactResponseDto> {
        let submission = self
            .repository
            .set_resolved(id, dto.is_resolved)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))?;

        tracing::info!(
            "Contact submission updated: id={}, resolved={}",
            submission.id,
            submission.is_resolved
        );

        Ok(submission.into())
    }
}
