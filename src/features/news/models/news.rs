use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a news article
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Criteria for listing news
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

impl NewsFilter {
    pub fn matches(&self, news: &News) -> bool {
        self.category.as_ref().is_none_or(|c| news.category == *c)
            && self
                .is_published
                .is_none_or(|published| news.is_published == published)
    }
}

/// Most recently published first, then id
pub fn sort_news(items: &mut [News]) {
    items.sort_by(|a, b| {
        b.publish_date
            .cmp(&a.publish_date)
            .then(a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(id: i32, category: &str, day: u32, is_published: bool) -> News {
        News {
            id,
            title: format!("Article {}", id),
            excerpt: "Short".to_string(),
            content: "Long".to_string(),
            image: None,
            category: category.to_string(),
            author: "Mall Management".to_string(),
            publish_date: Utc.with_ymd_and_hms(2024, 7, day, 0, 0, 0).unwrap(),
            is_published,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_by_category_and_published() {
        let draft = article(1, "Announcement", 1, false);
        let filter = NewsFilter {
            category: Some("Announcement".to_string()),
            is_published: Some(false),
        };
        assert!(filter.matches(&draft));

        let published_only = NewsFilter {
            is_published: Some(true),
            ..Default::default()
        };
        assert!(!published_only.matches(&draft));
        assert!(NewsFilter::default().matches(&draft));
    }

    #[test]
    fn test_sort_newest_first_with_id_tiebreak() {
        let mut items = vec![
            article(1, "Sustainability", 10, true),
            article(2, "Events", 20, true),
            article(3, "New Stores", 10, true),
        ];
        sort_news(&mut items);
        let order: Vec<i32> = items.iter().map(|n| n.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
