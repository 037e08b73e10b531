#![cfg(test)]
use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{JsonFileDocumentStore, SharedStore};

/// Fresh file path under the system temp dir.
pub fn temp_store_path() -> PathBuf {
    std::env::temp_dir().join(format!("sponsorisily_store_{}.json", uuid::Uuid::new_v4()))
}

/// Empty JSON-file store plus its path for cleanup.
pub async fn temp_store() -> (SharedStore, PathBuf) {
    let path = temp_store_path();
    let store: Arc<JsonFileDocumentStore> =
        JsonFileDocumentStore::open_path(&path, "test").await.expect("open temp store");
    let store: SharedStore = store;
    (store, path)
}
