use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A message sent through the contact form
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContactSubmission {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    /// Store the message is about, if any
    pub related_store: Option<String>,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

/// Newest first. Ids break ties so same-instant inserts stay in reverse order.
pub fn sort_newest_first(submissions: &mut [ContactSubmission]) {
    submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
