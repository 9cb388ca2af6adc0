pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::newsletter::models::NewsletterSubscription;

pub use memory::MemoryNewsletterRepository;
pub use postgres::PgNewsletterRepository;

pub(crate) const DUPLICATE_EMAIL: &str = "Email is already subscribed";

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Insert an active subscription. Fails with Conflict if the email exists.
    async fn create(&self, email: &str) -> Result<NewsletterSubscription>;

    /// All subscriptions, newest first
    async fn list(&self) -> Result<Vec<NewsletterSubscription>>;

    async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<NewsletterSubscription>>;
}
