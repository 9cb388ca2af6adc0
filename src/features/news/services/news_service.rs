use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::models::NewsFilter;
use crate::features::news::repositories::NewsRepository;

/// Service for mall news articles
pub struct NewsService {
    repository: Arc<dyn NewsRepository>,
}

impl NewsService {
    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: &NewsFilter) -> Result<Vec<NewsResponseDto>> {
        let items = self.repository.list(filter).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<NewsResponseDto> {
        self.repository
            .get(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: CreateNewsDto) -> Result<NewsResponseDto> {
        let news = self.repository.create(&dto).await?;

        tracing::info!("News created: id={}, title={}", news.id, news.title);

        Ok(news.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateNewsDto) -> Result<NewsResponseDto> {
        let news = self
            .repository
            .update(id, &dto)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("News updated: id={}", news.id);

        Ok(news.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("News deleted: id={}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("News article not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::features::news::repositories::MemoryNewsRepository;
    use crate::shared::test_helpers::{date, news_dto};

    async fn seeded() -> NewsService {
        let service = NewsService::new(Arc::new(MemoryNewsRepository::new()));
        for dto in [
            news_dto("Grand Opening", "New Stores", Some(date(2024, 7, 10)), true),
            news_dto("Summer Festival", "Events", Some(date(2024, 7, 20)), true),
            news_dto("Parking Upgrade", "Announcement", Some(date(2024, 7, 15)), false),
        ] {
            service.create(dto).await.unwrap();
        }
        service
    }

    fn titles(items: &[NewsResponseDto]) -> Vec<&str> {
        items.iter().map(|n| n.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let service = seeded().await;
        let items = service.list(&NewsFilter::default()).await.unwrap();
        assert_eq!(
            titles(&items),
            vec!["Summer Festival", "Parking Upgrade", "Grand Opening"]
        );
    }

    #[tokio::test]
    async fn test_list_published_only() {
        let service = seeded().await;
        let filter = NewsFilter {
            is_published: Some(true),
            ..Default::default()
        };
        let items = service.list(&filter).await.unwrap();
        assert_eq!(titles(&items), vec!["Summer Festival", "Grand Opening"]);
    }

    #[tokio::test]
    async fn test_missing_publish_date_defaults_to_now() {
        let service = seeded().await;
        let before = Utc::now();
        let created = service
            .create(news_dto("Fresh", "Events", None, true))
            .await
            .unwrap();

        assert!(created.publish_date >= before);
        assert_eq!(created.publish_date, created.created_at);

        let items = service.list(&NewsFilter::default()).await.unwrap();
        assert_eq!(items[0].title, "Fresh");
    }

    #[tokio::test]
    async fn test_unpublish_and_delete() {
        let service = seeded().await;
        let updated = service
            .update(
                2,
                UpdateNewsDto {
                    is_published: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_published);

        service.delete(2).await.unwrap();
        assert!(matches!(
            service.get_by_id(2).await,
            Err(AppError::NotFound(_))
        ));
    }
}
