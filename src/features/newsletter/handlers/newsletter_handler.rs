use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::newsletter::dtos::{
    SubscribeDto, SubscriptionResponseDto, UpdateSubscriptionDto,
};
use crate::features::newsletter::services::NewsletterService;
use crate::shared::validation::validate_payload;

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = SubscribeDto,
    responses(
        (status = 201, description = "Subscribed", body = SubscriptionResponseDto),
        (status = 400, description = "Invalid newsletter subscription data"),
        (status = 409, description = "Email is already subscribed")
    ),
    tag = "newsletter"
)]
pub async fn subscribe(
    State(service): State<Arc<NewsletterService>>,
    AppJson(dto): AppJson<SubscribeDto>,
) -> Result<(StatusCode, Json<SubscriptionResponseDto>)> {
    validate_payload(&dto, "Invalid newsletter subscription data")?;

    let subscription = service.subscribe(dto).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

#[utoipa::path(
    get,
    path = "/api/newsletter",
    responses(
        (status = 200, description = "All subscriptions, newest first", body = Vec<SubscriptionResponseDto>),
    ),
    tag = "newsletter"
)]
pub async fn list_subscriptions(
    State(service): State<Arc<NewsletterService>>,
) -> Result<Json<Vec<SubscriptionResponseDto>>> {
    let subscriptions = service.list().await?;
    Ok(Json(subscriptions))
}

#[utoipa::path(
    patch,
    path = "/api/newsletter/{id}",
    params(
        ("id" = i32, Path, description = "Subscription ID")
    ),
    request_body = UpdateSubscriptionDto,
    responses(
        (status = 200, description = "Subscription updated", body = SubscriptionResponseDto),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Subscription not found")
    ),
    tag = "newsletter"
)]
pub async fn update_subscription(
    State(service): State<Arc<NewsletterService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateSubscriptionDto>,
) -> Result<Json<SubscriptionResponseDto>> {
    let subscription = service.update(id, dto).await?;
    Ok(Json(subscription))
}
