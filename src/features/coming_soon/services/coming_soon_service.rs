use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::coming_soon::dtos::{
    ComingSoonResponseDto, CreateComingSoonDto, UpdateComingSoonDto,
};
use crate::features::coming_soon::repositories::ComingSoonRepository;

/// Service for upcoming store openings
pub struct ComingSoonService {
    repository: Arc<dyn ComingSoonRepository>,
}

impl ComingSoonService {
    pub fn new(repository: Arc<dyn ComingSoonRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<ComingSoonResponseDto>> {
        let stores = self.repository.list().await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ComingSoonResponseDto> {
        self.repository
            .get(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: CreateComingSoonDto) -> Result<ComingSoonResponseDto> {
        let store = self.repository.create(&dto).await?;

        tracing::info!(
            "Coming soon store created: id={}, name={}, opening={}",
            store.id,
            store.name,
            store.opening_date
        );

        Ok(store.into())
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateComingSoonDto,
    ) -> Result<ComingSoonResponseDto> {
        let store = self
            .repository
            .update(id, &dto)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Coming soon store updated: id={}", store.id);

        Ok(store.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Coming soon store deleted: id={}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Coming soon store not found".to_string())
}
