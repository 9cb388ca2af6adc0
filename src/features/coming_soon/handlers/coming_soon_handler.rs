use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::coming_soon::dtos::{
    ComingSoonResponseDto, CreateComingSoonDto, UpdateComingSoonDto,
};
use crate::features::coming_soon::services::ComingSoonService;
use crate::shared::validation::validate_payload;

/// List upcoming stores, soonest opening first
#[utoipa::path(
    get,
    path = "/api/coming-soon",
    responses(
        (status = 200, description = "All upcoming stores", body = Vec<ComingSoonResponseDto>),
    ),
    tag = "coming-soon"
)]
pub async fn list_coming_soon(
    State(service): State<Arc<ComingSoonService>>,
) -> Result<Json<Vec<ComingSoonResponseDto>>> {
    let stores = service.list().await?;
    Ok(Json(stores))
}

#[utoipa::path(
    get,
    path = "/api/coming-soon/{id}",
    params(
        ("id" = i32, Path, description = "Coming soon store ID")
    ),
    responses(
        (status = 200, description = "Listing found", body = ComingSoonResponseDto),
        (status = 404, description = "Listing not found")
    ),
    tag = "coming-soon"
)]
pub async fn get_coming_soon(
    State(service): State<Arc<ComingSoonService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ComingSoonResponseDto>> {
    let store = service.get_by_id(id).await?;
    Ok(Json(store))
}

#[utoipa::path(
    post,
    path = "/api/coming-soon",
    request_body = CreateComingSoonDto,
    responses(
        (status = 201, description = "Listing created", body = ComingSoonResponseDto),
        (status = 400, description = "Invalid coming soon store data")
    ),
    tag = "coming-soon"
)]
pub async fn create_coming_soon(
    State(service): State<Arc<ComingSoonService>>,
    AppJson(dto): AppJson<CreateComingSoonDto>,
) -> Result<(StatusCode, Json<ComingSoonResponseDto>)> {
    validate_payload(&dto, "Invalid coming soon store data")?;

    let store = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

#[utoipa::path(
    patch,
    path = "/api/coming-soon/{id}",
    params(
        ("id" = i32, Path, description = "Coming soon store ID")
    ),
    request_body = UpdateComingSoonDto,
    responses(
        (status = 200, description = "Listing updated", body = ComingSoonResponseDto),
        (status = 400, description = "Invalid coming soon store data"),
        (status = 404, description = "Listing not found")
    ),
    tag = "coming-soon"
)]
pub async fn update_coming_soon(
    State(service): State<Arc<ComingSoonService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateComingSoonDto>,
) -> Result<Json<ComingSoonResponseDto>> {
    validate_payload(&dto, "Invalid coming soon store data")?;

    let store = service.update(id, dto).await?;
    Ok(Json(store))
}

#[utoipa::path(
    delete,
    path = "/api/coming-soon/{id}",
    params(
        ("id" = i32, Path, description = "Coming soon store ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 404, description = "Listing not found")
    ),
    tag = "coming-soon"
)]
pub async fn delete_coming_soon(
    State(service): State<Arc<ComingSoonService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
