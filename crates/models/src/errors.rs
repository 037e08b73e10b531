use thiserror::Error;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", crate::validation::summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
