use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": ...}` body used by the liveness and greeting routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Body returned by every create endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}
