#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::env::StoreEnv;
use server::{routes, state::AppState};
use service::errors::ServiceError;
use service::storage::{Document, DocumentStore, JsonFileDocumentStore, SharedStore};
use tower::ServiceExt;

/// A store whose every operation fails, as if the database went away.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "broken"
    }

    async fn create_document(&self, _collection: &str, _record: Document) -> Result<String, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }

    async fn get_documents(&self, _collection: &str) -> Result<Vec<Document>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }

    async fn list_collection_names(&self, _limit: usize) -> Result<Vec<String>, ServiceError> {
        Err(ServiceError::Db("server selection timeout after 30000ms while listing collections".into()))
    }
}

/// A JSON-file store in the temp dir; removed when dropped.
pub struct TempStore {
    pub store: SharedStore,
    path: PathBuf,
}

impl TempStore {
    pub async fn new() -> Self {
        let path = std::env::temp_dir().join(format!("sponsorisily_api_{}.json", uuid::Uuid::new_v4()));
        let store: Arc<JsonFileDocumentStore> =
            JsonFileDocumentStore::open_path(&path, "test").await.expect("open temp store");
        Self { store, path }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn app(store: Option<SharedStore>) -> Router {
    app_with_env(store, StoreEnv::default())
}

pub fn app_with_env(store: Option<SharedStore>, env: StoreEnv) -> Router {
    routes::build_router(AppState::new(store, env), routes::build_cors())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}
