use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::collection::{Collection, Record};

/// A sellable marketing bundle for one or more ad platforms.
///
/// `price_DA` keeps its wire name; prices are preformatted labels such as
/// `"15,000 DA"`, not numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Pack {
    /// Platform(s) the pack targets, e.g. `Facebook & Instagram`
    #[serde(default)]
    #[validate(custom = "crate::validation::not_blank")]
    pub platform: String,
    /// Display name
    #[serde(default)]
    #[validate(custom = "crate::validation::not_blank")]
    pub name: String,
    #[serde(rename = "price_DA", default)]
    pub price_da: Option<String>,
    /// Duration label, e.g. `7 jours`
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub objective: Option<String>,
    /// Logo URL for the platform
    #[serde(default)]
    pub logo: Option<String>,
}

impl Record for Pack {
    const COLLECTION: Collection = Collection::Pack;
}
