pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::contact::dtos::CreateContactDto;
use crate::features::contact::models::ContactSubmission;

pub use memory::MemoryContactRepository;
pub use postgres::PgContactRepository;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a submission with `is_resolved = false`
    async fn create(&self, input: &CreateContactDto) -> Result<ContactSubmission>;

    /// All submissions, newest first
    async fn list(&self) -> Result<Vec<ContactSubmission>>;

    async fn set_resolved(&self, id: i32, is_resolved: bool) -> Result<Option<ContactSubmission>>;
}
