use axum::{extract::State, Json};
use common::types::CreatedResponse;
use models::Pack;
use service::packs::PackListing;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/packs", tag = "packs",
    request_body = Pack,
    responses(
        (status = 200, description = "Created", body = CreatedResponse),
        (status = 422, description = "Validation Error", body = crate::errors::ValidationErrorBody),
        (status = 500, description = "Store not configured or failing", body = crate::errors::ErrorBody)
    )
)]
pub async fn create_pack(
    State(state): State<AppState>,
    JsonBody(pack): JsonBody<Pack>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.packs.create(&pack).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Stored packs with their `id`, or the six built-in packs when the store is
/// absent, empty or failing.
#[utoipa::path(
    get, path = "/api/packs", tag = "packs",
    responses((status = 200, description = "Stored or built-in packs", body = [Pack]))
)]
pub async fn list_packs(State(state): State<AppState>) -> Json<Vec<PackListing>> {
    let catalog = state.packs.list().await;
    info!(source = ?catalog.source, count = catalog.packs.len(), "list packs");
    Json(catalog.packs)
}
