//! Document store abstraction.
//!
//! A store keeps schemaless JSON objects in named collections and hands out
//! string ids. Two backends exist: Postgres through sea-orm and a single JSON
//! file for local runs and tests.

pub mod json_file;
pub mod seaorm;

use std::sync::Arc;

use async_trait::async_trait;
use models::Record;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ServiceError;

pub use json_file::JsonFileDocumentStore;
pub use seaorm::SeaOrmDocumentStore;

/// A stored record as a JSON object.
pub type Document = Map<String, Value>;

/// Key under which stores return the generated id.
pub const ID_KEY: &str = "_id";

/// Shared, injectable store handle.
pub type SharedStore = Arc<dyn DocumentStore>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Logical name of the store (database name or file stem).
    fn name(&self) -> &str;

    /// Insert `record` into `collection` and return the generated id.
    async fn create_document(&self, collection: &str, record: Document) -> Result<String, ServiceError>;

    /// All documents of `collection` in insertion order, each carrying its
    /// id under [`ID_KEY`].
    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, ServiceError>;

    /// Sorted names of collections holding at least one document, at most `limit`.
    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError>;
}

/// Serialize a record into a document. Records must be JSON objects.
pub fn to_document<T: Serialize>(record: &T) -> Result<Document, ServiceError> {
    match serde_json::to_value(record)? {
        Value::Object(mut map) => {
            map.remove(ID_KEY);
            Ok(map)
        }
        other => Err(ServiceError::Db(format!("record must serialize to an object, got {other}"))),
    }
}

/// Insert a typed record into its own collection.
pub async fn create_record<T: Record>(store: &dyn DocumentStore, record: &T) -> Result<String, ServiceError> {
    let doc = to_document(record)?;
    store.create_document(T::COLLECTION.as_str(), doc).await
}

/// Replace the internal [`ID_KEY`] with a client-facing string `id`.
/// A document without an id gets an empty one.
pub fn expose_id(mut doc: Document) -> Document {
    let id = match doc.remove(ID_KEY) {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    doc.insert("id".to_string(), Value::String(id));
    doc
}

/// Fail with the fixed unavailable-dependency error when no store is configured.
pub fn require(store: &Option<SharedStore>) -> Result<&SharedStore, ServiceError> {
    store.as_ref().ok_or_else(ServiceError::store_not_configured)
}
