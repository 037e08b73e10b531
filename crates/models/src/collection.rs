use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// Named document collections. Names are the lowercased record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pack,
    QuoteRequest,
    Consultation,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Pack, Collection::QuoteRequest, Collection::Consultation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pack => "pack",
            Collection::QuoteRequest => "quoterequest",
            Collection::Consultation => "consultation",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated record kind that is persisted in exactly one collection.
pub trait Record: Serialize + DeserializeOwned + Validate + Send + Sync {
    const COLLECTION: Collection;
}
