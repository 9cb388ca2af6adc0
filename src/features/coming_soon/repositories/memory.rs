use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::coming_soon::dtos::{CreateComingSoonDto, UpdateComingSoonDto};
use crate::features::coming_soon::models::{sort_by_opening, ComingSoonStore};
use crate::features::coming_soon::repositories::ComingSoonRepository;
use crate::shared::memory::MemoryTable;

#[derive(Default)]
pub struct MemoryComingSoonRepository {
    table: MemoryTable<ComingSoonStore>,
}

impl MemoryComingSoonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComingSoonRepository for MemoryComingSoonRepository {
    async fn list(&self) -> Result<Vec<ComingSoonStore>> {
        let mut stores = self.table.select(|_| true).await;
        sort_by_opening(&mut stores);
        Ok(stores)
    }

    async fn get(&self, id: i32) -> Result<Option<ComingSoonStore>> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, input: &CreateComingSoonDto) -> Result<ComingSoonStore> {
        let store = self
            .table
            .insert_with(|id| ComingSoonStore {
                id,
                name: input.name.clone(),
                description: input.description.clone(),
                image: input.image.clone(),
                floor: input.floor.clone(),
                unit: input.unit.clone(),
                opening_date: input.opening_date,
                category: input.category.clone(),
                created_at: Utc::now(),
            })
            .await;
        Ok(store)
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateComingSoonDto,
    ) -> Result<Option<ComingSoonStore>> {
        let updated = self
            .table
            .update_with(id, |store| {
                if let Some(name) = &input.name {
                    store.name = name.clone();
                }
                if let Some(description) = &input.description {
                    store.description = description.clone();
                }
                if let Some(image) = &input.image {
                    store.image = Some(image.clone());
                }
                if let Some(floor) = &input.floor {
                    store.floor = floor.clone();
                }
                if let Some(unit) = &input.unit {
                    store.unit = unit.clone();
                }
                if let Some(opening_date) = input.opening_date {
                    store.opening_date = opening_date;
                }
                if let Some(category) = &input.category {
                    store.category = category.clone();
                }
            })
            .await;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}
