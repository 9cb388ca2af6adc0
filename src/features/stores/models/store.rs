use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::query::contains_ignore_case;

/// Database model for a store in the directory
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub floor: String,
    pub unit: String,
    pub hours: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
}

/// Criteria for listing stores. Every `Some` field is one predicate; all
/// predicates must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub floor: Option<String>,
    pub is_open: Option<bool>,
    /// Case-insensitive substring of name, description or category
    pub search: Option<String>,
}

impl StoreFilter {
    pub fn matches(&self, store: &Store) -> bool {
        self.category.as_ref().is_none_or(|c| store.category == *c)
            && self
                .subcategory
                .as_deref()
                .is_none_or(|s| store.subcategory.as_deref() == Some(s))
            && self.floor.as_ref().is_none_or(|f| store.floor == *f)
            && self.is_open.is_none_or(|open| store.is_open == open)
            && self.search.as_deref().is_none_or(|term| {
                contains_ignore_case(&store.name, term)
                    || store
                        .description
                        .as_deref()
                        .is_some_and(|d| contains_ignore_case(d, term))
                    || contains_ignore_case(&store.category, term)
            })
    }
}

/// Default listing order: name ascending, then id
pub fn sort_stores(stores: &mut [Store]) {
    stores.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(name: &str, category: &str, description: Option<&str>, is_open: bool) -> Store {
        Store {
            id: 1,
            name: name.to_string(),
            category: category.to_string(),
            subcategory: None,
            floor: "Ground Floor".to_string(),
            unit: "G01".to_string(),
            hours: "10:00 AM - 9:00 PM".to_string(),
            description: description.map(str::to_string),
            image: None,
            phone: None,
            website: None,
            is_open,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StoreFilter::default();
        assert!(filter.matches(&store("Zara", "Fashion & Apparel", None, false)));
    }

    #[test]
    fn test_search_covers_name_description_and_category() {
        let zara = store(
            "Zara",
            "Fashion & Apparel",
            Some("Latest fashion trends"),
            true,
        );
        let by = |term: &str| StoreFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };

        assert!(by("zara").matches(&zara));
        assert!(by("TRENDS").matches(&zara));
        assert!(by("apparel").matches(&zara));
        assert!(!by("electronics").matches(&zara));
    }

    #[test]
    fn test_search_skips_missing_description() {
        let filter = StoreFilter {
            search: Some("premium".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&store("Nike", "Sports", None, true)));
    }

    #[test]
    fn test_subcategory_requires_value_on_store() {
        let filter = StoreFilter {
            subcategory: Some("Cosmetics".to_string()),
            ..Default::default()
        };
        let mut sephora = store("Sephora", "Beauty & Cosmetics", None, true);
        assert!(!filter.matches(&sephora));

        sephora.subcategory = Some("Cosmetics".to_string());
        assert!(filter.matches(&sephora));
    }

    #[test]
    fn test_predicates_are_and_combined() {
        let filter = StoreFilter {
            category: Some("Fashion & Apparel".to_string()),
            is_open: Some(true),
            ..Default::default()
        };
        assert!(filter.matches(&store("Zara", "Fashion & Apparel", None, true)));
        assert!(!filter.matches(&store("Zara", "Fashion & Apparel", None, false)));
        assert!(!filter.matches(&store("Apple Store", "Electronics", None, true)));
    }

    #[test]
    fn test_sort_by_name_then_id() {
        let mut stores = vec![
            Store {
                id: 3,
                ..store("Zara", "Fashion", None, true)
            },
            Store {
                id: 2,
                ..store("Apple Store", "Electronics", None, true)
            },
            Store {
                id: 1,
                ..store("Zara", "Fashion", None, true)
            },
        ];
        sort_stores(&mut stores);
        let order: Vec<i32> = stores.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
