pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::coming_soon::dtos::{CreateComingSoonDto, UpdateComingSoonDto};
use crate::features::coming_soon::models::ComingSoonStore;

pub use memory::MemoryComingSoonRepository;
pub use postgres::PgComingSoonRepository;

#[async_trait]
pub trait ComingSoonRepository: Send + Sync {
    /// Every listing, soonest opening first
    async fn list(&self) -> Result<Vec<ComingSoonStore>>;

    async fn get(&self, id: i32) -> Result<Option<ComingSoonStore>>;

    async fn create(&self, input: &CreateComingSoonDto) -> Result<ComingSoonStore>;

    async fn update(
        &self,
        id: i32,
        input: &UpdateComingSoonDto,
    ) -> Result<Option<ComingSoonStore>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
