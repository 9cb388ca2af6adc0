use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::events::dtos::{
    CreateEventDto, EventQueryParams, EventResponseDto, UpdateEventDto,
};
use crate::features::events::models::EventFilter;
use crate::features::events::services::EventService;
use crate::shared::validation::validate_payload;

/// List events
///
/// Date bounds are inclusive. Results are ordered by start date, newest first.
#[utoipa::path(
    get,
    path = "/api/events",
    params(EventQueryParams),
    responses(
        (status = 200, description = "Matching events (possibly empty)", body = Vec<EventResponseDto>),
        (status = 400, description = "Unparseable date bound")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(service): State<Arc<EventService>>,
    AppQuery(params): AppQuery<EventQueryParams>,
) -> Result<Json<Vec<EventResponseDto>>> {
    let filter = EventFilter::try_from(params)?;
    let events = service.list(&filter).await?;
    Ok(Json(events))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponseDto),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<EventResponseDto>> {
    let event = service.get_by_id(id).await?;
    Ok(Json(event))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventResponseDto),
        (status = 400, description = "Invalid event data")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(service): State<Arc<EventService>>,
    AppJson(dto): AppJson<CreateEventDto>,
) -> Result<(StatusCode, Json<EventResponseDto>)> {
    validate_payload(&dto, "Invalid event data")?;

    let event = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventResponseDto),
        (status = 400, description = "Invalid event data"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateEventDto>,
) -> Result<Json<EventResponseDto>> {
    validate_payload(&dto, "Invalid event data")?;

    let event = service.update(id, dto).await?;
    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
