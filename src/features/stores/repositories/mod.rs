//! Storage access for stores.
//!
//! Services depend on [`StoreRepository`]; the backend is picked at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::stores::dtos::{CreateStoreDto, UpdateStoreDto};
use crate::features::stores::models::{Store, StoreFilter};

pub use memory::MemoryStoreRepository;
pub use postgres::PgStoreRepository;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Stores satisfying every criterion in `filter`, ordered by name
    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>>;

    async fn get(&self, id: i32) -> Result<Option<Store>>;

    async fn create(&self, input: &CreateStoreDto) -> Result<Store>;

    /// Returns `None` when no store has `id`
    async fn update(&self, id: i32, input: &UpdateStoreDto) -> Result<Option<Store>>;

    /// Returns whether a store was deleted
    async fn delete(&self, id: i32) -> Result<bool>;
}
