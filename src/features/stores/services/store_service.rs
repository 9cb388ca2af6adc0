use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::stores::dtos::{CreateStoreDto, StoreResponseDto, UpdateStoreDto};
use crate::features::stores::models::StoreFilter;
use crate::features::stores::repositories::StoreRepository;

/// Service for store directory operations
pub struct StoreService {
    repository: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    /// List stores matching the filter, ordered by name
    pub async fn list(&self, filter: &StoreFilter) -> Result<Vec<StoreResponseDto>> {
        let stores = self.repository.list(filter).await?;
        Ok(stores.into_iter().map(Into::into).collect())
    }

    /// Get store by ID
    pub async fn get_by_id(&self, id: i32) -> Result<StoreResponseDto> {
        self.repository
            .get(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: CreateStoreDto) -> Result<StoreResponseDto> {
        let store = self.repository.create(&dto).await?;

        tracing::info!("Store created: id={}, name={}", store.id, store.name);

        Ok(store.into())
    }

    /// Apply a partial update
    pub async fn update(&self, id: i32, dto: UpdateStoreDto) -> Result<StoreResponseDto> {
        let store = self
            .repository
            .update(id, &dto)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Store updated: id={}", store.id);

        Ok(store.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Store deleted: id={}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Store not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stores::repositories::MemoryStoreRepository;
    use crate::shared::test_helpers::store_dto;

    fn service() -> StoreService {
        StoreService::new(Arc::new(MemoryStoreRepository::new()))
    }

    async fn seeded() -> StoreService {
        let service = service();
        for dto in [
            store_dto("Zara", "Fashion & Apparel", "First Floor", true),
            store_dto("Apple Store", "Electronics", "Ground Floor", true),
            store_dto("H&M", "Fashion & Apparel", "First Floor", false),
            store_dto("Uniqlo", "Fashion & Apparel", "Ground Floor", true),
            store_dto("JB Hi-Fi", "Electronics", "Ground Floor", false),
        ] {
            service.create(dto).await.unwrap();
        }
        service
    }

    fn names(stores: &[StoreResponseDto]) -> Vec<&str> {
        stores.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_without_filters_returns_all_by_name() {
        let service = seeded().await;
        let stores = service.list(&StoreFilter::default()).await.unwrap();
        assert_eq!(
            names(&stores),
            vec!["Apple Store", "H&M", "JB Hi-Fi", "Uniqlo", "Zara"]
        );
    }

    #[tokio::test]
    async fn test_list_open_fashion_stores() {
        let service = seeded().await;
        let filter = StoreFilter {
            category: Some("Fashion & Apparel".to_string()),
            is_open: Some(true),
            ..Default::default()
        };
        let stores = service.list(&filter).await.unwrap();
        assert_eq!(names(&stores), vec!["Uniqlo", "Zara"]);
    }

    #[tokio::test]
    async fn test_list_closed_stores_on_floor() {
        let service = seeded().await;
        let filter = StoreFilter {
            floor: Some("Ground Floor".to_string()),
            is_open: Some(false),
            ..Default::default()
        };
        let stores = service.list(&filter).await.unwrap();
        assert_eq!(names(&stores), vec!["JB Hi-Fi"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let service = seeded().await;
        let filter = StoreFilter {
            search: Some("zara".to_string()),
            ..Default::default()
        };
        let stores = service.list(&filter).await.unwrap();
        assert_eq!(names(&stores), vec!["Zara"]);
    }

    #[tokio::test]
    async fn test_list_with_no_match_is_empty() {
        let service = seeded().await;
        let filter = StoreFilter {
            category: Some("Automotive".to_string()),
            ..Default::default()
        };
        assert!(service.list(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_store_is_not_found() {
        let service = service();
        let err = service.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let service = seeded().await;
        let before = service.get_by_id(1).await.unwrap();

        let updated = service
            .update(
                1,
                UpdateStoreDto {
                    is_open: Some(false),
                    hours: Some("9:00 AM - 5:00 PM".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated.is_open);
        assert_eq!(updated.hours, "9:00 AM - 5:00 PM");
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_store_are_not_found() {
        let service = service();
        let err = service
            .update(9, UpdateStoreDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.delete(9).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_store() {
        let service = seeded().await;
        service.delete(1).await.unwrap();
        assert!(matches!(
            service.get_by_id(1).await,
            Err(AppError::NotFound(_))
        ));
    }
}
