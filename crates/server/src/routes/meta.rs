use axum::{extract::State, Json};
use common::types::MessageResponse;

use crate::diagnostics::{diagnose, DiagnosticsReport};
use crate::state::AppState;

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, body = MessageResponse)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Sponsorisily API running"))
}

#[utoipa::path(get, path = "/api/hello", tag = "meta", responses((status = 200, body = MessageResponse)))]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from Sponsorisily backend!"))
}

/// Store connectivity report; always 200.
#[utoipa::path(get, path = "/test", tag = "meta", responses((status = 200, body = DiagnosticsReport)))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(diagnose(state.store.as_deref(), state.store_env).await)
}
