use async_trait::async_trait;
use models::document;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tracing::warn;

use super::{Document, DocumentStore, ID_KEY};
use crate::errors::ServiceError;

/// SeaORM-backed store: every collection shares the `document` table.
pub struct SeaOrmDocumentStore {
    db: DatabaseConnection,
    name: String,
}

impl SeaOrmDocumentStore {
    pub fn new(db: DatabaseConnection, name: impl Into<String>) -> Self {
        Self { db, name: name.into() }
    }
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, mut record: Document) -> Result<String, ServiceError> {
        record.remove(ID_KEY);
        let row = document::insert(&self.db, collection, Value::Object(record)).await?;
        Ok(row.id.to_string())
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, ServiceError> {
        let rows = document::list_by_collection(&self.db, collection).await?;
        let docs = rows
            .into_iter()
            .filter_map(|row| match row.body {
                Value::Object(mut body) => {
                    body.insert(ID_KEY.to_string(), Value::String(row.id.to_string()));
                    Some(body)
                }
                _ => {
                    warn!(id = %row.id, %collection, "skipping non-object document body");
                    None
                }
            })
            .collect();
        Ok(docs)
    }

    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError> {
        Ok(document::collection_names(&self.db, limit as u64).await?)
    }
}
