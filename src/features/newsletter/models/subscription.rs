use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A newsletter subscriber. Emails are unique across all subscriptions.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct NewsletterSubscription {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Canonical form used for storage and the uniqueness check
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn sort_newest_first(subscriptions: &mut [NewsletterSubscription]) {
    subscriptions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Shopper@Example.COM "), "shopper@example.com");
    }
}
