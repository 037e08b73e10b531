use axum::{extract::State, Json};
use common::types::CreatedResponse;
use models::{Consultation, QuoteRequest};

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/quotes", tag = "leads",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Created", body = CreatedResponse),
        (status = 422, description = "Validation Error", body = crate::errors::ValidationErrorBody),
        (status = 500, description = "Store not configured or failing", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_quote(
    State(state): State<AppState>,
    JsonBody(quote): JsonBody<QuoteRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.leads.create_quote(&quote).await?;
    Ok(Json(CreatedResponse { id }))
}

#[utoipa::path(
    post, path = "/api/consultations", tag = "leads",
    request_body = Consultation,
    responses(
        (status = 200, description = "Created", body = CreatedResponse),
        (status = 422, description = "Validation Error", body = crate::errors::ValidationErrorBody),
        (status = 500, description = "Store not configured or failing", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_consultation(
    State(state): State<AppState>,
    JsonBody(consultation): JsonBody<Consultation>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.leads.create_consultation(&consultation).await?;
    Ok(Json(CreatedResponse { id }))
}
