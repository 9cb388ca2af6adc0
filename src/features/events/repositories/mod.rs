pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::events::dtos::{CreateEventDto, UpdateEventDto};
use crate::features::events::models::{Event, EventFilter};

pub use memory::MemoryEventRepository;
pub use postgres::PgEventRepository;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Events satisfying every criterion, latest start first
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>>;

    async fn get(&self, id: i32) -> Result<Option<Event>>;

    async fn create(&self, input: &CreateEventDto) -> Result<Event>;

    async fn update(&self, id: i32, input: &UpdateEventDto) -> Result<Option<Event>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
