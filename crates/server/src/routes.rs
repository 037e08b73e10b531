pub mod meta;
pub mod packs;
pub mod leads;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Permit every origin, method and header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the full application router: meta routes, catalog, lead intake and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let meta = Router::new()
        .route("/", get(meta::root))
        .route("/api/hello", get(meta::hello))
        .route("/test", get(meta::diagnostics));

    let api = Router::new()
        .route("/api/packs", get(packs::list_packs).post(packs::create_pack))
        .route("/api/quotes", post(leads::create_quote))
        .route("/api/consultations", post(leads::create_consultation));

    let docs = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());

    meta.merge(api)
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
