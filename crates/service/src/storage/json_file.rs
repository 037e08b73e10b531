use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{fs, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

use super::{Document, DocumentStore, ID_KEY};
use crate::errors::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredDocument {
    id: Uuid,
    created_at: DateTime<Utc>,
    body: Document,
}

type Collections = BTreeMap<String, Vec<StoredDocument>>;

/// JSON file-backed document store.
///
/// All collections live in one file that is rewritten on every insert while
/// the write lock is held, so concurrent inserts never lose each other.
/// Intended for local runs and tests where a database is overkill.
pub struct JsonFileDocumentStore {
    name: String,
    inner: RwLock<Collections>,
    file_path: PathBuf,
}

fn io_err(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Db(e.to_string())
}

impl JsonFileDocumentStore {
    /// Open `<dir>/<name>.json`, creating it (and `dir`) when missing.
    pub async fn open<P: Into<PathBuf>>(dir: P, name: &str) -> Result<Arc<Self>, ServiceError> {
        let path = dir.into().join(format!("{name}.json"));
        Self::open_path(path, name).await
    }

    /// Open an explicit file path.
    pub async fn open_path<P: Into<PathBuf>>(path: P, name: &str) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let collections: Collections = match fs::read(&file_path).await {
            Ok(bytes) if bytes.is_empty() => Collections::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Db(format!("corrupt store file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Collections::new();
                fs::write(&file_path, serde_json::to_vec(&empty)?).await.map_err(io_err)?;
                empty
            }
            Err(e) => return Err(io_err(e)),
        };
        debug!(path = %file_path.display(), collections = collections.len(), "json store opened");

        Ok(Arc::new(Self { name: name.to_string(), inner: RwLock::new(collections), file_path }))
    }

    async fn save(&self, collections: &Collections) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(collections)?;
        fs::write(&self.file_path, data).await.map_err(io_err)
    }
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, mut record: Document) -> Result<String, ServiceError> {
        record.remove(ID_KEY);
        let doc = StoredDocument { id: Uuid::new_v4(), created_at: Utc::now(), body: record };
        let id = doc.id.to_string();

        let mut map = self.inner.write().await;
        map.entry(collection.to_string()).or_default().push(doc);
        if let Err(e) = self.save(&map).await {
            // keep memory and file in agreement
            if let Some(docs) = map.get_mut(collection) {
                docs.pop();
                if docs.is_empty() {
                    map.remove(collection);
                }
            }
            return Err(e);
        }
        Ok(id)
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>, ServiceError> {
        let map = self.inner.read().await;
        let docs = map
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|d| {
                        let mut body = d.body.clone();
                        body.insert(ID_KEY.to_string(), Value::String(d.id.to_string()));
                        body
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn list_collection_names(&self, limit: usize) -> Result<Vec<String>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_store_path;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn json_store_insert_list_and_reload() -> Result<(), ServiceError> {
        let path = temp_store_path();
        let store = JsonFileDocumentStore::open_path(&path, "test").await?;

        assert!(store.get_documents("pack").await?.is_empty());
        assert!(store.list_collection_names(10).await?.is_empty());

        let a = store.create_document("pack", doc(json!({"name": "A"}))).await?;
        let b = store.create_document("pack", doc(json!({"name": "B", "_id": "spoofed"}))).await?;
        store.create_document("consultation", doc(json!({"full_name": "C"}))).await?;
        assert_ne!(a, b);

        let packs = store.get_documents("pack").await?;
        assert_eq!(packs.len(), 2);
        assert_eq!(packs[0]["name"], "A");
        assert_eq!(packs[0][ID_KEY], json!(a));
        assert_eq!(packs[1][ID_KEY], json!(b));

        assert_eq!(store.list_collection_names(10).await?, vec!["consultation", "pack"]);
        assert_eq!(store.list_collection_names(1).await?, vec!["consultation"]);

        let reloaded = JsonFileDocumentStore::open_path(&path, "test").await?;
        assert_eq!(reloaded.get_documents("pack").await?.len(), 2);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let path = temp_store_path();
        tokio::fs::write(&path, b"{not json").await.unwrap();
        assert!(JsonFileDocumentStore::open_path(&path, "test").await.is_err());
        let _ = tokio::fs::remove_file(&path).await;
    }
}
