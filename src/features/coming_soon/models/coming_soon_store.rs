use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A store announced but not yet open
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ComingSoonStore {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub floor: String,
    pub unit: String,
    pub opening_date: DateTime<Utc>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Soonest opening first, then id
pub fn sort_by_opening(stores: &mut [ComingSoonStore]) {
    stores.sort_by(|a, b| a.opening_date.cmp(&b.opening_date).then(a.id.cmp(&b.id)));
}
