use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::newsletter::models::NewsletterSubscription;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Activate or deactivate a subscription
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionDto {
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponseDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NewsletterSubscription> for SubscriptionResponseDto {
    fn from(s: NewsletterSubscription) -> Self {
        Self {
            id: s.id,
            email: s.email,
            is_active: s.is_active,
            created_at: s.created_at,
        }
    }
}
