use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::events::dtos::{CreateEventDto, UpdateEventDto};
use crate::features::events::models::{sort_events, Event, EventFilter};
use crate::features::events::repositories::EventRepository;
use crate::shared::memory::MemoryTable;

#[derive(Default)]
pub struct MemoryEventRepository {
    table: MemoryTable<Event>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let mut events = self.table.select(|event| filter.matches(event)).await;
        sort_events(&mut events);
        Ok(events)
    }

    async fn get(&self, id: i32) -> Result<Option<Event>> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, input: &CreateEventDto) -> Result<Event> {
        let event = self
            .table
            .insert_with(|id| Event {
                id,
                title: input.title.clone(),
                description: input.description.clone(),
                image: input.image.clone(),
                start_date: input.start_date,
                end_date: input.end_date,
                event_type: input.event_type.clone(),
                location: input.location.clone(),
                participating_stores: input.participating_stores.clone(),
                is_active: input.is_active,
                created_at: Utc::now(),
            })
            .await;
        Ok(event)
    }

    async fn update(&self, id: i32, input: &UpdateEventDto) -> Result<Option<Event>> {
        let updated = self
            .table
            .update_with(id, |event| {
                if let Some(title) = &input.title {
                    event.title = title.clone();
                }
                if let Some(description) = &input.description {
                    event.description = description.clone();
                }
                if let Some(image) = &input.image {
                    event.image = Some(image.clone());
                }
                if let Some(start_date) = input.start_date {
                    event.start_date = start_date;
                }
                if let Some(end_date) = input.end_date {
                    event.end_date = end_date;
                }
                if let Some(event_type) = &input.event_type {
                    event.event_type = event_type.clone();
                }
                if let Some(location) = &input.location {
                    event.location = Some(location.clone());
                }
                if let Some(stores) = &input.participating_stores {
                    event.participating_stores = stores.clone();
                }
                if let Some(is_active) = input.is_active {
                    event.is_active = is_active;
                }
            })
            .await;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}
