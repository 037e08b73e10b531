use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::collection::{Collection, Record};

/// A lead asking for a price quote, optionally about a specific pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuoteRequest {
    #[serde(default)]
    #[validate(custom = "crate::validation::not_blank")]
    pub full_name: String,
    #[serde(default)]
    #[validate(custom = "crate::validation::email")]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pack_name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

impl Record for QuoteRequest {
    const COLLECTION: Collection = Collection::QuoteRequest;
}
