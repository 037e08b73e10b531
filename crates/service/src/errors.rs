use models::errors::ModelError;
use models::validation::FieldError;
use thiserror::Error;

/// Message used whenever a write is attempted without a store.
pub const STORE_NOT_CONFIGURED: &str = "Database not configured";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {} field(s) rejected", .0.len())]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Unavailable(&'static str),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn store_not_configured() -> Self { Self::Unavailable(STORE_NOT_CONFIGURED) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(fields) => Self::Validation(fields),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { Self::Db(e.to_string()) }
}
