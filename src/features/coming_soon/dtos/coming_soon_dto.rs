use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::coming_soon::models::ComingSoonStore;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComingSoonDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub image: Option<String>,

    #[validate(length(min = 1, message = "Floor is required"))]
    pub floor: String,

    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,

    pub opening_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComingSoonDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub image: Option<String>,

    #[validate(length(min = 1, message = "Floor is required"))]
    pub floor: Option<String>,

    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: Option<String>,

    pub opening_date: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComingSoonResponseDto {
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

impl From<ComingSoonStore> for ComingSoonResponseDto {
    fn from(s: ComingSoonStore) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            image: s.image,
            floor: s.floor,
            unit: s.unit,
            opening_date: s.opening_date,
            category: s.category,
            created_at: s.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_requires_opening_date() {
        let result: Result<CreateComingSoonDto, _> = serde_json::from_value(serde_json::json!({
            "name": "Sephora",
            "description": "Beauty products",
            "floor": "Ground Floor",
            "unit": "G20",
            "category": "Health & Beauty"
        }));
        assert!(result.is_err());
    }
}
