pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::news::dtos::{CreateNewsDto, UpdateNewsDto};
use crate::features::news::models::{News, NewsFilter};

pub use memory::MemoryNewsRepository;
pub use postgres::PgNewsRepository;

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Articles satisfying every criterion, most recently published first
    async fn list(&self, filter: &NewsFilter) -> Result<Vec<News>>;

    async fn get(&self, id: i32) -> Result<Option<News>>;

    /// Insert an article; a missing publish date becomes the insertion time
    async fn create(&self, input: &CreateNewsDto) -> Result<News>;

    async fn update(&self, id: i32, input: &UpdateNewsDto) -> Result<Option<News>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}
