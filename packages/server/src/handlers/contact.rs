use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::contact::{ContactRequest, ContactResponse, validate_contact};

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = "Contact",
    operation_id = "submitContact",
    summary = "Submit the contact form",
    description = "Validates the submission and records it for the operator. Delivery is outside this service; acceptance is acknowledged with 202.",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(payload), fields(email = %payload.email))]
pub async fn submit_contact(
    AppJson(payload): AppJson<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_contact(&payload)?;

    tracing::info!(
        name = %payload.name.trim(),
        email = %payload.email,
        subject = payload.subject.as_deref().unwrap_or(""),
        "contact form submission received"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactResponse {
            message: "Your message has been received".into(),
        }),
    ))
}
