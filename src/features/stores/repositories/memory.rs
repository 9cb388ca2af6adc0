use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::stores::dtos::{CreateStoreDto, UpdateStoreDto};
use crate::features::stores::models::{sort_stores, Store, StoreFilter};
use crate::features::stores::repositories::StoreRepository;
use crate::shared::memory::MemoryTable;

/// In-process store repository, used for tests and `STORAGE_BACKEND=memory`
#[derive(Default)]
pub struct MemoryStoreRepository {
    table: MemoryTable<Store>,
}

impl MemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreRepository for MemoryStoreRepository {
    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>> {
        let mut stores = self.table.select(|store| filter.matches(store)).await;
        sort_stores(&mut stores);
        Ok(stores)
    }

    async fn get(&self, id: i32) -> Result<Option<Store>> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, input: &CreateStoreDto) -> Result<Store> {
        let store = self
            .table
            .insert_with(|id| Store {
                id,
                name: input.name.clone(),
                category: input.category.clone(),
                subcategory: input.subcategory.clone(),
                floor: input.floor.clone(),
                unit: input.unit.clone(),
                hours: input.hours.clone(),
                description: input.description.clone(),
                image: input.image.clone(),
                phone: input.phone.clone(),
                website: input.website.clone(),
                is_open: input.is_open,
                created_at: Utc::now(),
            })
            .await;
        Ok(store)
    }

    async fn update(&self, id: i32, input: &UpdateStoreDto) -> Result<Option<Store>> {
        let updated = self
            .table
            .update_with(id, |store| {
                if let Some(name) = &input.name {
                    store.name = name.clone();
                }
                if let Some(category) = &input.category {
                    store.category = category.clone();
                }
                if let Some(subcategory) = &input.subcategory {
                    store.subcategory = Some(subcategory.clone());
                }
                if let Some(floor) = &input.floor {
                    store.floor = floor.clone();
                }
                if let Some(unit) = &input.unit {
                    store.unit = unit.clone();
                }
                if let Some(hours) = &input.hours {
                    store.hours = hours.clone();
                }
                if let Some(description) = &input.description {
                    store.description = Some(description.clone());
                }
                if let Some(image) = &input.image {
                    store.image = Some(image.clone());
                }
                if let Some(phone) = &input.phone {
                    store.phone = Some(phone.clone());
                }
                if let Some(website) = &input.website {
                    store.website = Some(website.clone());
                }
                if let Some(is_open) = input.is_open {
                    store.is_open = is_open;
                }
            })
            .await;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.table.remove(id).await)
    }
}
