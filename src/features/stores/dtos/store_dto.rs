use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::stores::models::{Store, StoreFilter};
use crate::shared::query::{non_empty, parse_bool_flag};

fn default_true() -> bool {
    true
}

/// Request DTO for creating a store
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    pub subcategory: Option<String>,

    #[validate(length(min = 1, message = "Floor is required"))]
    pub floor: String,

    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,

    /// Opening hours, e.g. "10:00 AM - 9:00 PM"
    #[validate(length(min = 1, message = "Hours are required"))]
    pub hours: String,

    pub description: Option<String>,

    pub image: Option<String>,

    pub phone: Option<String>,

    pub website: Option<String>,

    #[serde(default = "default_true")]
    pub is_open: bool,
}

/// Request DTO for a partial store update. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,

    pub subcategory: Option<String>,

    #[validate(length(min = 1, message = "Floor is required"))]
    pub floor: Option<String>,

    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: Option<String>,

    #[validate(length(min = 1, message = "Hours are required"))]
    pub hours: Option<String>,

    pub description: Option<String>,

    pub image: Option<String>,

    pub phone: Option<String>,

    pub website: Option<String>,

    pub is_open: Option<bool>,
}

/// Query params for listing stores
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StoreQueryParams {
    /// Exact category, e.g. "Fashion & Apparel"
    pub category: Option<String>,
    /// Exact subcategory
    pub subcategory: Option<String>,
    /// Exact floor, e.g. "Ground Floor"
    pub floor: Option<String>,
    /// Case-insensitive text matched against name, description and category
    pub search: Option<String>,
    /// "true" or "false"; any other value is ignored
    pub is_open: Option<String>,
}

impl From<StoreQueryParams> for StoreFilter {
    fn from(params: StoreQueryParams) -> Self {
        Self {
            category: non_empty(params.category),
            subcategory: non_empty(params.subcategory),
            floor: non_empty(params.floor),
            is_open: parse_bool_flag(params.is_open.as_deref()),
            search: non_empty(params.search),
        }
    }
}

/// Response DTO for store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponseDto {
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

impl From<Store> for StoreResponseDto {
    fn from(s: Store) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category: s.category,
            subcategory: s.subcategory,
            floor: s.floor,
            unit: s.unit,
            hours: s.hours,
            description: s.description,
            image: s.image,
            phone: s.phone,
            website: s.website,
            is_open: s.is_open,
            created_at: s.created_at,
        }
    }
}
