use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::collection::{Collection, Record};

/// A lead asking to be called back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Consultation {
    #[serde(default)]
    #[validate(custom = "crate::validation::not_blank")]
    pub full_name: String,
    #[serde(default)]
    #[validate(custom = "crate::validation::not_blank")]
    pub phone: String,
    /// Preferred time slot, free text
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for Consultation {
    const COLLECTION: Collection = Collection::Consultation;
}
