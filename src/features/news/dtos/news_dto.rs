use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::news::models::{News, NewsFilter};
use crate::shared::query::{non_empty, parse_bool_flag};

fn default_true() -> bool {
    true
}

/// Request DTO for publishing a news article
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub image: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,

    /// Defaults to the time of insertion
    pub publish_date: Option<DateTime<Utc>>,

    #[serde(default = "default_true")]
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,

    pub image: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,

    #[validate(length(min = 1, message = "Author is required"))]
    pub author: Option<String>,

    pub publish_date: Option<DateTime<Utc>>,

    pub is_published: Option<bool>,
}

/// Query params for listing news
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NewsQueryParams {
    /// Exact category, e.g. "Events"
    pub category: Option<String>,
    /// "true" or "false"; any other value is ignored
    pub is_published: Option<String>,
}

impl From<NewsQueryParams> for NewsFilter {
    fn from(params: NewsQueryParams) -> Self {
        Self {
            category: non_empty(params.category),
            is_published: parse_bool_flag(params.is_published.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponseDto {
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

impl From<News> for NewsResponseDto {
    fn from(n: News) -> Self {
        Self {
            id: n.id,
            title: n.title,
            excerpt: n.excerpt,
            content: n.content,
            image: n.image,
            category: n.category,
            author: n.author,
            publish_date: n.publish_date,
            is_published: n.is_published,
            created_at: n.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_to_filter() {
        let filter = NewsFilter::from(NewsQueryParams {
            category: Some(String::new()),
            is_published: Some("false".to_string()),
        });
        assert_eq!(
            filter,
            NewsFilter {
                category: None,
                is_published: Some(false),
            }
        );
    }

    #[test]
    fn test_create_dto_optional_publish_date() {
        let dto: CreateNewsDto = serde_json::from_value(serde_json::json!({
            "title": "Sustainability Initiative",
            "excerpt": "Going green",
            "content": "Solar panels on the roof",
            "category": "Sustainability",
            "author": "Mall Management"
        }))
        .unwrap();

        assert!(dto.publish_date.is_none());
        assert!(dto.is_published);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_requires_content() {
        let dto: CreateNewsDto = serde_json::from_value(serde_json::json!({
            "title": "Empty",
            "excerpt": "Nothing here",
            "content": "",
            "category": "Events",
            "author": "Events Team"
        }))
        .unwrap();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }
}
