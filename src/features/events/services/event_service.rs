use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::events::dtos::{CreateEventDto, EventResponseDto, UpdateEventDto};
use crate::features::events::models::EventFilter;
use crate::features::events::repositories::EventRepository;

/// Service for mall events and promotions
pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// List events matching the filter, latest start date first
    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<EventResponseDto>> {
        let events = self.repository.list(filter).await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<EventResponseDto> {
        self.repository
            .get(id)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }

    pub async fn create(&self, dto: CreateEventDto) -> Result<EventResponseDto> {
        let event = self.repository.create(&dto).await?;

        tracing::info!("Event created: id={}, title={}", event.id, event.title);

        Ok(event.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateEventDto) -> Result<EventResponseDto> {
        let event = self
            .repository
            .update(id, &dto)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Event updated: id={}", event.id);

        Ok(event.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Event deleted: id={}", id);
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::events::repositories::MemoryEventRepository;
    use crate::shared::test_helpers::{date, event_dto};

    async fn seeded() -> EventService {
        let service = EventService::new(Arc::new(MemoryEventRepository::new()));
        for dto in [
            event_dto("Tech Expo", "Featured Event", date(2024, 8, 15), date(2024, 8, 20), true),
            event_dto("Fashion Week", "Fashion Event", date(2024, 9, 1), date(2024, 9, 7), true),
            event_dto("Holiday Sale", "Sale Event", date(2024, 12, 1), date(2024, 12, 31), true),
            event_dto("Winter Clearance", "Sale Event", date(2024, 7, 1), date(2024, 7, 14), false),
        ] {
            service.create(dto).await.unwrap();
        }
        service
    }

    fn titles(events: &[EventResponseDto]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_orders_by_start_date_descending() {
        let service = seeded().await;
        let events = service.list(&EventFilter::default()).await.unwrap();
        assert_eq!(
            titles(&events),
            vec!["Holiday Sale", "Fashion Week", "Tech Expo", "Winter Clearance"]
        );
    }

    #[tokio::test]
    async fn test_list_active_sale_events() {
        let service = seeded().await;
        let filter = EventFilter {
            event_type: Some("Sale Event".to_string()),
            is_active: Some(true),
            ..Default::default()
        };
        let events = service.list(&filter).await.unwrap();
        assert_eq!(titles(&events), vec!["Holiday Sale"]);
    }

    #[tokio::test]
    async fn test_list_within_date_window() {
        let service = seeded().await;
        let filter = EventFilter {
            start_date: Some(date(2024, 8, 1)),
            end_date: Some(date(2024, 9, 30)),
            ..Default::default()
        };
        let events = service.list(&filter).await.unwrap();
        assert_eq!(titles(&events), vec!["Fashion Week", "Tech Expo"]);
    }

    #[tokio::test]
    async fn test_update_replaces_participating_stores() {
        let service = seeded().await;
        let updated = service
            .update(
                1,
                UpdateEventDto {
                    participating_stores: Some(vec!["Apple Store".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.participating_stores, vec!["Apple Store".to_string()]);
        assert_eq!(updated.title, "Tech Expo");
    }

    #[tokio::test]
    async fn test_missing_event_is_not_found() {
        let service = seeded().await;
        assert!(matches!(
            service.get_by_id(99).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(99).await, Err(AppError::NotFound(_))));
    }
}
