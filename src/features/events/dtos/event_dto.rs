use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::AppError;
use crate::features::events::models::{Event, EventFilter};
use crate::shared::query::{non_empty, parse_bool_flag, parse_date_bound};

fn default_true() -> bool {
    true
}

/// Request DTO for creating an event
///
/// `startDate` is expected to be on or before `endDate`; this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub image: Option<String>,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub event_type: String,

    pub location: Option<String>,

    #[serde(default)]
    pub participating_stores: Vec<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request DTO for a partial event update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub image: Option<String>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub event_type: Option<String>,

    pub location: Option<String>,

    pub participating_stores: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

/// Query params for listing events
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventQueryParams {
    /// Exact event type, e.g. "Fashion Event"
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// "true" or "false"; any other value is ignored
    pub is_active: Option<String>,
    /// Keep events starting on or after this date (RFC 3339 or YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Keep events ending on or before this date (RFC 3339 or YYYY-MM-DD)
    pub end_date: Option<String>,
}

impl TryFrom<EventQueryParams> for EventFilter {
    type Error = AppError;

    fn try_from(params: EventQueryParams) -> Result<Self, Self::Error> {
        let start_date = parse_date_bound(params.start_date.as_deref())
            .map_err(|raw| invalid_date("startDate", &raw))?;
        let end_date = parse_date_bound(params.end_date.as_deref())
            .map_err(|raw| invalid_date("endDate", &raw))?;

        Ok(Self {
            event_type: non_empty(params.event_type),
            is_active: parse_bool_flag(params.is_active.as_deref()),
            start_date,
            end_date,
        })
    }
}

fn invalid_date(field: &str, raw: &str) -> AppError {
    AppError::Validation(
        "Invalid event filter".to_string(),
        vec![format!("{}: '{}' is not a valid date", field, raw)],
    )
}

/// Response DTO for event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub location: Option<String>,
    pub participating_stores: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponseDto {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            image: e.image,
            start_date: e.start_date,
            end_date: e.end_date,
            event_type: e.event_type,
            location: e.location,
            participating_stores: e.participating_stores,
            is_active: e.is_active,
            created_at: e.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_params_to_filter() {
        let params = EventQueryParams {
            event_type: Some("Sale Event".to_string()),
            is_active: Some("true".to_string()),
            start_date: Some("2024-09-01".to_string()),
            end_date: None,
        };
        let filter = EventFilter::try_from(params).unwrap();

        assert_eq!(
            filter,
            EventFilter {
                event_type: Some("Sale Event".to_string()),
                is_active: Some(true),
                start_date: Some(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap()),
                end_date: None,
            }
        );
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let params = EventQueryParams {
            end_date: Some("soon".to_string()),
            ..Default::default()
        };
        match EventFilter::try_from(params) {
            Err(AppError::Validation(_, details)) => {
                assert_eq!(details, vec!["endDate: 'soon' is not a valid date".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_dto_reads_type_and_defaults() {
        let dto: CreateEventDto = serde_json::from_value(serde_json::json!({
            "title": "Spring Fashion Week",
            "description": "Exclusive fashion shows",
            "startDate": "2024-09-01T00:00:00Z",
            "endDate": "2024-09-07T00:00:00Z",
            "type": "Fashion Event"
        }))
        .unwrap();

        assert_eq!(dto.event_type, "Fashion Event");
        assert!(dto.participating_stores.is_empty());
        assert!(dto.is_active);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_response_serializes_type_field() {
        let dto = EventResponseDto {
            id: 1,
            title: "Tech Expo".to_string(),
            description: "Demos".to_string(),
            image: None,
            start_date: Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 8, 20, 0, 0, 0).unwrap(),
            event_type: "Featured Event".to_string(),
            location: None,
            participating_stores: vec!["Apple Store".to_string()],
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["type"], "Featured Event");
        assert_eq!(value["participatingStores"][0], "Apple Store");
        assert_eq!(value["isActive"], true);
    }
}
