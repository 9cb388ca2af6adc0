use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::news::dtos::{CreateNewsDto, NewsQueryParams, NewsResponseDto, UpdateNewsDto};
use crate::features::news::models::NewsFilter;
use crate::features::news::services::NewsService;
use crate::shared::validation::validate_payload;

/// List news articles, most recently published first
#[utoipa::path(
    get,
    path = "/api/news",
    params(NewsQueryParams),
    responses(
        (status = 200, description = "Matching articles (possibly empty)", body = Vec<NewsResponseDto>),
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
    AppQuery(params): AppQuery<NewsQueryParams>,
) -> Result<Json<Vec<NewsResponseDto>>> {
    let filter: NewsFilter = params.into();
    let items = service.list(&filter).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "Article found", body = NewsResponseDto),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn get_news(
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<NewsResponseDto>> {
    let news = service.get_by_id(id).await?;
    Ok(Json(news))
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Article created", body = NewsResponseDto),
        (status = 400, description = "Invalid news data")
    ),
    tag = "news"
)]
pub async fn create_news(
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsDto>,
) -> Result<(StatusCode, Json<NewsResponseDto>)> {
    validate_payload(&dto, "Invalid news data")?;

    let news = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

#[utoipa::path(
    patch,
    path = "/api/news/{id}",
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "Article updated", body = NewsResponseDto),
        (status = 400, description = "Invalid news data"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn update_news(
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateNewsDto>,
) -> Result<Json<NewsResponseDto>> {
    validate_payload(&dto, "Invalid news data")?;

    let news = service.update(id, dto).await?;
    Ok(Json(news))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(service): State<Arc<NewsService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
