use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::contact::dtos::{ContactResponseDto, CreateContactDto, UpdateContactDto};
use crate::features::contact::services::ContactService;
use crate::shared::validation::validate_payload;

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission stored", body = ContactResponseDto),
        (status = 400, description = "Invalid contact submission data")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ContactResponseDto>)> {
    validate_payload(&dto, "Invalid contact submission data")?;

    let submission = service.submit(dto).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// List contact submissions, newest first
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "All submissions", body = Vec<ContactResponseDto>),
    ),
    tag = "contact"
)]
pub async fn list_contact_submissions(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<Vec<ContactResponseDto>>> {
    let submissions = service.list().await?;
    Ok(Json(submissions))
}

#[utoipa::path(
    patch,
    path = "/api/contact/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    request_body = UpdateContactDto,
    responses(
        (status = 200, description = "Submission updated", body = ContactResponseDto),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact"
)]
pub async fn update_contact_submission(
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateContactDto>,
) -> Result<Json<ContactResponseDto>> {
    let submission = service.update(id, dto).await?;
    Ok(Json(submission))
}
