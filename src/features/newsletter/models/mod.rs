pub mod subscription;

pub use subscription::{normalize_email, sort_newest_first, NewsletterSubscription};
