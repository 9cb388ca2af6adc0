use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::contact::models::ContactSubmission;

/// Contact form payload. Submissions always start unresolved.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    pub related_store: Option<String>,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Mark a submission resolved or reopen it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactDto {
    pub is_resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub related_store: Option<String>,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactResponseDto {
    fn from(c: ContactSubmission) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            subject: c.subject,
            related_store: c.related_store,
            message: c.message,
            is_resolved: c.is_resolved,
            created_at: c.created_at,
        }
    }
}
