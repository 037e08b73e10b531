use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::FieldError;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{error, warn};
use utoipa::ToSchema;

pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// `{"detail": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

#[derive(Debug)]
pub enum ApiError {
    /// 422 with field-level detail
    Validation(Vec<FieldError>),
    /// 500, a required dependency is not configured
    Unavailable(String),
    /// 500, the store failed; the cause is logged, never returned
    Internal(String),
    /// Any other extractor rejection, status preserved
    Rejected(StatusCode, String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(fields) => Self::Validation(fields),
            ServiceError::Unavailable(msg) => Self::Unavailable(msg.to_string()),
            ServiceError::Db(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                warn!(errors = detail.len(), "request rejected by validation");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationErrorBody { detail })).into_response()
            }
            ApiError::Unavailable(detail) => {
                error!(error = %detail, "dependency unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
            }
            ApiError::Internal(detail) => {
                error!(error = %detail, "store operation failed");
                let detail = INTERNAL_ERROR.to_string();
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
            }
            ApiError::Rejected(status, detail) => (status, Json(ErrorBody { detail })).into_response(),
        }
    }
}
