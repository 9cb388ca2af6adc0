use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::stores::dtos::{
    CreateStoreDto, StoreQueryParams, StoreResponseDto, UpdateStoreDto,
};
use crate::features::stores::models::StoreFilter;
use crate::features::stores::services::StoreService;
use crate::shared::validation::validate_payload;

/// List stores
///
/// All supplied filters must match. Results are ordered by name.
#[utoipa::path(
    get,
    path = "/api/stores",
    params(StoreQueryParams),
    responses(
        (status = 200, description = "Matching stores (possibly empty)", body = Vec<StoreResponseDto>),
    ),
    tag = "stores"
)]
pub async fn list_stores(
    State(service): State<Arc<StoreService>>,
    AppQuery(params): AppQuery<StoreQueryParams>,
) -> Result<Json<Vec<StoreResponseDto>>> {
    let filter: StoreFilter = params.into();
    let stores = service.list(&filter).await?;
    Ok(Json(stores))
}

/// Get store by ID
#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store found", body = StoreResponseDto),
        (status = 404, description = "Store not found")
    ),
    tag = "stores"
)]
pub async fn get_store(
    State(service): State<Arc<StoreService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<StoreResponseDto>> {
    let store = service.get_by_id(id).await?;
    Ok(Json(store))
}

/// Create a store
#[utoipa::path(
    post,
    path = "/api/stores",
    request_body = CreateStoreDto,
    responses(
        (status = 201, description = "Store created", body = StoreResponseDto),
        (status = 400, description = "Invalid store data")
    ),
    tag = "stores"
)]
pub async fn create_store(
    State(service): State<Arc<StoreService>>,
    AppJson(dto): AppJson<CreateStoreDto>,
) -> Result<(StatusCode, Json<StoreResponseDto>)> {
    validate_payload(&dto, "Invalid store data")?;

    let store = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Partially update a store
#[utoipa::path(
    patch,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    request_body = UpdateStoreDto,
    responses(
        (status = 200, description = "Store updated", body = StoreResponseDto),
        (status = 400, description = "Invalid store data"),
        (status = 404, description = "Store not found")
    ),
    tag = "stores"
)]
pub async fn update_store(
    State(service): State<Arc<StoreService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateStoreDto>,
) -> Result<Json<StoreResponseDto>> {
    validate_payload(&dto, "Invalid store data")?;

    let store = service.update(id, dto).await?;
    Ok(Json(store))
}

/// Delete a store
#[utoipa::path(
    delete,
    path = "/api/stores/{id}",
    params(
        ("id" = i32, Path, description = "Store ID")
    ),
    responses(
        (status = 204, description = "Store deleted"),
        (status = 404, description = "Store not found")
    ),
    tag = "stores"
)]
pub async fn delete_store(
    State(service): State<Arc<StoreService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
